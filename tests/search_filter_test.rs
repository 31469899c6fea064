mod common;

use common::{admin_token, body_json, send, spawn_app};
use http::StatusCode;
use serde_json::json;

async fn seed_tanks(app: &common::TestApp, token: &str) {
    for (designation, name, product) in [
        ("CUV-01", "Cuve Essence A", "Essence"),
        ("CUV-02", "Cuve Essence B", "Essence"),
        ("CUV-03", "Cuve Gasoil", "Gasoil"),
        ("CIT-01", "Citerne Diesel", "Diesel"),
    ] {
        let response = send(
            app,
            "POST",
            "/api/v1/admin/cuves",
            Some(token),
            Some(json!({
                "designation": designation,
                "name": name,
                "stored_product": product,
                "capacity": "10000",
                "purchase_price": "500000"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

async fn count_for_search(app: &common::TestApp, token: &str, term: &str) -> usize {
    let uri = if term.is_empty() {
        "/api/v1/admin/cuves".to_string()
    } else {
        format!("/api/v1/admin/cuves?search={}", term)
    };
    let response = send(app, "GET", &uri, Some(token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["data"].as_array().unwrap().len()
}

#[tokio::test]
async fn refining_the_search_never_grows_the_result() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;
    seed_tanks(&app, &token).await;

    // Each term extends the previous one, so the visible row count must
    // be monotonically non-increasing.
    let refinements = ["", "C", "Cu", "Cuve", "Cuve%20Essence", "Cuve%20Essence%20A"];

    let mut previous = usize::MAX;
    for term in refinements {
        let count = count_for_search(&app, &token, term).await;
        assert!(
            count <= previous,
            "search '{}' returned {} rows, more than the coarser search before it",
            term,
            count
        );
        previous = count;
    }

    assert_eq!(count_for_search(&app, &token, "").await, 4);
    assert_eq!(count_for_search(&app, &token, "Cuve").await, 3);
    assert_eq!(count_for_search(&app, &token, "Cuve%20Essence%20A").await, 1);
}

#[tokio::test]
async fn search_matches_any_text_column() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;
    seed_tanks(&app, &token).await;

    // "Gasoil" only appears in the stored product / name of CUV-03
    assert_eq!(count_for_search(&app, &token, "Gasoil").await, 1);
    // Designation matches too
    assert_eq!(count_for_search(&app, &token, "CIT").await, 1);
    // Unknown term matches nothing
    assert_eq!(count_for_search(&app, &token, "Kerosene").await, 0);
}

#[tokio::test]
async fn sorting_orders_the_collection() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;
    seed_tanks(&app, &token).await;

    let response = send(
        &app,
        "GET",
        "/api/v1/admin/cuves?sort_by=name&sort_order=asc",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Citerne Diesel",
            "Cuve Essence A",
            "Cuve Essence B",
            "Cuve Gasoil"
        ]
    );

    let response = send(
        &app,
        "GET",
        "/api/v1/admin/cuves?sort_by=name&sort_order=desc",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Cuve Gasoil",
            "Cuve Essence B",
            "Cuve Essence A",
            "Citerne Diesel"
        ]
    );
}

#[tokio::test]
async fn pagination_slices_the_collection() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;
    seed_tanks(&app, &token).await;

    let response = send(
        &app,
        "GET",
        "/api/v1/admin/cuves?page=1&per_page=3&sort_by=designation",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let response = send(
        &app,
        "GET",
        "/api/v1/admin/cuves?page=2&per_page=3&sort_by=designation",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
