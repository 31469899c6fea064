mod common;

use common::{admin_token, body_json, send, spawn_app};
use http::StatusCode;
use serde_json::{json, Value};

fn employee_body() -> Value {
    json!({
        "first_name": "Kossi",
        "last_name": "Dupont",
        "birth_date": "1990-06-15",
        "email": "kossi.dupont@example.com",
        "marital_status": "Célibataire",
        "phone": "+22890123456",
        "bank_account": "TG53-0001-0002",
        "emergency_contact_name": "Afi Dupont",
        "emergency_contact_phone": "+22898765432",
        "nationality": "Togolaise",
        "position": "pompiste",
        "national_id": "CNI-123456",
        "password": "s3cret-pass",
        "password_confirmation": "s3cret-pass"
    })
}

#[tokio::test]
async fn employee_creation_derives_matricule_and_age() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/employes",
        Some(&token),
        Some(employee_body()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let employee = &body["data"];

    // Matricule: two letters of the last name plus three digits
    let matricule = employee["registration_number"].as_str().unwrap();
    assert_eq!(matricule.len(), 5);
    assert_eq!(&matricule[..2], "DU");
    assert!(matricule[2..].chars().all(|c| c.is_ascii_digit()));

    // Age is derived from the birth date
    let age = employee["age"].as_i64().unwrap();
    assert!(age >= 34, "age derived from 1990-06-15 should be at least 34");

    // The hash never leaves the backend
    assert!(employee.get("password_hash").is_none());
}

#[tokio::test]
async fn mismatched_password_confirmation_is_rejected() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let mut body = employee_body();
    body["password_confirmation"] = json!("something-else");

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/employes",
        Some(&token),
        Some(body),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/v1/admin/employes", Some(&token), None).await;
    let list = body_json(response).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_position_is_rejected() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let mut body = employee_body();
    body["position"] = json!("director");

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/employes",
        Some(&token),
        Some(body),
    )
    .await;
    // Unknown enum variants fail at deserialization
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn changing_the_birth_date_refreshes_the_age() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/admin/employes",
        Some(&token),
        Some(employee_body()),
    )
    .await;
    let body = body_json(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let age_before = body["data"]["age"].as_i64().unwrap();

    let response = send(
        &app,
        "PUT",
        &format!("/api/v1/admin/employes/{}", id),
        Some(&token),
        Some(json!({ "birth_date": "2000-06-15" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let age_after = body["data"]["age"].as_i64().unwrap();
    assert_eq!(age_before - age_after, 10);

    // The matricule survives the update
    assert_eq!(&body["data"]["registration_number"].as_str().unwrap()[..2], "DU");
}
