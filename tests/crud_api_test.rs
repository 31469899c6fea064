mod common;

use common::{admin_token, body_json, login_token, send, spawn_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn tank_crud_lifecycle() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    // Create
    let response = send(
        &app,
        "POST",
        "/api/v1/admin/cuves",
        Some(&token),
        Some(json!({
            "designation": "CUV-01",
            "name": "Cuve principale",
            "stored_product": "Essence",
            "capacity": "20000",
            "purchase_price": "1500000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_str().expect("tank id").to_string();

    // List contains the new row
    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Update
    let response = send(
        &app,
        "PUT",
        &format!("/api/v1/admin/cuves/{}", id),
        Some(&token),
        Some(json!({ "name": "Cuve nord" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Cuve nord");
    assert_eq!(body["data"]["designation"], "CUV-01");

    // Delete removes exactly that row
    let response = send(
        &app,
        "DELETE",
        &format!("/api/v1/admin/cuves/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        &app,
        "GET",
        &format!("/api/v1/admin/cuves/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_field_is_rejected_without_side_effect() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/cuves",
        Some(&token),
        Some(json!({
            "designation": "",
            "name": "Cuve principale",
            "stored_product": "Essence",
            "capacity": "20000",
            "purchase_price": "1500000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was inserted
    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn negative_numeric_field_is_rejected() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/cuves",
        Some(&token),
        Some(json!({
            "designation": "CUV-02",
            "name": "Cuve sud",
            "stored_product": "Gasoil",
            "capacity": "-5",
            "purchase_price": "1000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_client_phone_conflicts() {
    let app = spawn_app().await;
    let token = login_token(&app, "gerantstat", "ger@1234").await;

    let client = json!({
        "first_name": "Ama",
        "last_name": "Kodjo",
        "phone": "+22890123456",
        "email": "ama.kodjo@example.com"
    });

    let response = send(
        &app,
        "POST",
        "/api/v1/gerant/clients",
        Some(&token),
        Some(client.clone()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        "POST",
        "/api/v1/gerant/clients",
        Some(&token),
        Some(client),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Only the first insert went through
    let response = send(&app, "GET", "/api/v1/gerant/clients", Some(&token), None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn client_phone_must_match_the_togo_format() {
    let app = spawn_app().await;
    let token = login_token(&app, "gerantstat", "ger@1234").await;

    let response = send(
        &app,
        "POST",
        "/api/v1/gerant/clients",
        Some(&token),
        Some(json!({
            "first_name": "Ama",
            "last_name": "Kodjo",
            "phone": "90123456",
            "email": "ama.kodjo@example.com"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pump_requires_an_existing_tank() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/pompes",
        Some(&token),
        Some(json!({
            "name": "Pompe 1",
            "content": "Essence",
            "tank_id": "550e8400-e29b-41d4-a716-446655440000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // With a real tank the pump goes through
    let response = send(
        &app,
        "POST",
        "/api/v1/admin/cuves",
        Some(&token),
        Some(json!({
            "designation": "CUV-01",
            "name": "Cuve principale",
            "stored_product": "Essence",
            "capacity": "20000",
            "purchase_price": "1500000"
        })),
    )
    .await;
    let tank = body_json(response).await;
    let tank_id = tank["data"]["id"].as_str().unwrap();

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/pompes",
        Some(&token),
        Some(json!({
            "name": "Pompe 1",
            "content": "Essence",
            "tank_id": tank_id
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn station_profile_is_a_single_upserted_record() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    // No profile yet
    let response = send(&app, "GET", "/api/v1/admin/stations", Some(&token), None).await;
    let body = body_json(response).await;
    assert!(body["data"].is_null());

    let profile = |designation: &str| {
        json!({
            "designation": designation,
            "activities": "Vente de carburant",
            "fiscal_id": "TG-123456",
            "bank_account": "TG53-0001-0002",
            "commune": "Lomé",
            "email": "contact@carburis.example",
            "trade_register": "RCCM-TG-2024"
        })
    };

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/stations",
        Some(&token),
        Some(profile("Carburis - Station XYZ")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Saving again replaces the record instead of adding a second one
    let response = send(
        &app,
        "POST",
        "/api/v1/admin/stations",
        Some(&token),
        Some(profile("Carburis - Station Nord")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/api/v1/admin/stations", Some(&token), None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["designation"], "Carburis - Station Nord");
}

#[tokio::test]
async fn attendant_feedback_reaches_the_manager() {
    let app = spawn_app().await;
    let pompiste = login_token(&app, "pop@123", "pompis@789").await;
    let gerant = login_token(&app, "gerantstat", "ger@1234").await;

    let response = send(
        &app,
        "POST",
        "/api/v1/pompistes/feedback",
        Some(&pompiste),
        Some(json!({ "message": "La pompe 2 perd de la pression" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "GET", "/api/v1/gerant/feedback", Some(&gerant), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["author_role"], "pompiste");
    assert_eq!(items[0]["message"], "La pompe 2 perd de la pression");
}
