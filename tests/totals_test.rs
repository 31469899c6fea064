mod common;

use std::str::FromStr;

use chrono::Utc;
use common::{admin_token, body_json, login_token, send, spawn_app};
use http::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn decimal_field(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

#[tokio::test]
async fn sale_total_is_quantity_times_price_plus_tax() {
    let app = spawn_app().await;
    let token = login_token(&app, "pop@123", "pompis@789").await;

    let response = send(
        &app,
        "POST",
        "/api/v1/pompistes/ventes",
        Some(&token),
        Some(json!({
            "client_name": "Ama Kodjo",
            "client_phone": "+22890123456",
            "client_email": "ama.kodjo@example.com",
            "product": "Essence",
            "category": "Carburant",
            "quantity": "100",
            "unit_price": "500"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    // 100 x 500 x 1.18 = 59000
    assert_eq!(decimal_field(&body["data"]["total"]), dec!(59000));
}

#[tokio::test]
async fn submitted_totals_are_ignored() {
    let app = spawn_app().await;
    let token = login_token(&app, "pop@123", "pompis@789").await;

    // A client trying to smuggle its own total gets the derived one back
    let response = send(
        &app,
        "POST",
        "/api/v1/pompistes/ventes",
        Some(&token),
        Some(json!({
            "client_name": "Ama Kodjo",
            "client_phone": "+22890123456",
            "client_email": "ama.kodjo@example.com",
            "product": "Essence",
            "category": "Carburant",
            "quantity": "10",
            "unit_price": "100",
            "total": "1"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(decimal_field(&body["data"]["total"]), dec!(1180));
}

#[tokio::test]
async fn updating_a_sale_recomputes_the_total() {
    let app = spawn_app().await;
    let token = login_token(&app, "pop@123", "pompis@789").await;

    let response = send(
        &app,
        "POST",
        "/api/v1/pompistes/ventes",
        Some(&token),
        Some(json!({
            "client_name": "Ama Kodjo",
            "client_phone": "+22890123456",
            "client_email": "ama.kodjo@example.com",
            "product": "Essence",
            "category": "Carburant",
            "quantity": "100",
            "unit_price": "500"
        })),
    )
    .await;
    let body = body_json(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        "PUT",
        &format!("/api/v1/pompistes/ventes/{}", id),
        Some(&token),
        Some(json!({ "quantity": "50" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // 50 x 500 x 1.18 = 29500
    assert_eq!(decimal_field(&body["data"]["total"]), dec!(29500));
}

#[tokio::test]
async fn restock_total_is_prior_plus_incoming_stock() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let today = Utc::now().date_naive();
    let response = send(
        &app,
        "POST",
        "/api/v1/admin/approvisionnements",
        Some(&token),
        Some(json!({
            "date": today,
            "supplier": "Total Distribution",
            "category": "Carburant",
            "product": "Essence",
            "stock_before": "1500",
            "stock_incoming": "2500",
            "blend": "0",
            "tank_location": "CUV-01",
            "amount_paid": "1200000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(decimal_field(&body["data"]["stock_total"]), dec!(4000));
}

#[tokio::test]
async fn restock_rejects_past_dates() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let yesterday = Utc::now().date_naive().pred_opt().unwrap();
    let response = send(
        &app,
        "POST",
        "/api/v1/admin/approvisionnements",
        Some(&token),
        Some(json!({
            "date": yesterday,
            "supplier": "Total Distribution",
            "category": "Carburant",
            "product": "Essence",
            "stock_before": "1500",
            "stock_incoming": "2500",
            "tank_location": "CUV-01",
            "amount_paid": "1200000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn manager_restock_routes_share_the_admin_handlers() {
    let app = spawn_app().await;
    let gerant = login_token(&app, "gerantstat", "ger@1234").await;
    let admin = admin_token(&app).await;

    let today = Utc::now().date_naive();
    let response = send(
        &app,
        "POST",
        "/api/v1/gerant/approvisionnements",
        Some(&gerant),
        Some(json!({
            "date": today,
            "supplier": "Oando",
            "category": "Carburant",
            "product": "Gasoil",
            "stock_before": "0",
            "stock_incoming": "3000",
            "tank_location": "CUV-02",
            "amount_paid": "900000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The admin sees the same collection
    let response = send(
        &app,
        "GET",
        "/api/v1/admin/approvisionnements",
        Some(&admin),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn reports_aggregate_stocks_and_sales() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;
    let pompiste = login_token(&app, "pop@123", "pompis@789").await;

    // One tank, one restock into it
    send(
        &app,
        "POST",
        "/api/v1/admin/cuves",
        Some(&admin),
        Some(json!({
            "designation": "CUV-01",
            "name": "Cuve principale",
            "stored_product": "Essence",
            "capacity": "20000",
            "purchase_price": "1500000"
        })),
    )
    .await;

    let today = Utc::now().date_naive();
    send(
        &app,
        "POST",
        "/api/v1/admin/approvisionnements",
        Some(&admin),
        Some(json!({
            "date": today,
            "supplier": "Total Distribution",
            "category": "Carburant",
            "product": "Essence",
            "stock_before": "1000",
            "stock_incoming": "5000",
            "tank_location": "CUV-01",
            "amount_paid": "2500000"
        })),
    )
    .await;

    // Two sales of the same product
    for quantity in ["100", "50"] {
        send(
            &app,
            "POST",
            "/api/v1/pompistes/ventes",
            Some(&pompiste),
            Some(json!({
                "client_name": "Ama Kodjo",
                "client_phone": "+22890123456",
                "client_email": "ama.kodjo@example.com",
                "product": "Essence",
                "category": "Carburant",
                "quantity": quantity,
                "unit_price": "500"
            })),
        )
        .await;
    }

    let response = send(
        &app,
        "GET",
        "/api/v1/reports/stock-levels",
        Some(&admin),
        None,
    )
    .await;
    let body = body_json(response).await;
    let levels = body["data"].as_array().unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0]["designation"], "CUV-01");
    assert_eq!(decimal_field(&levels[0]["stock"]), dec!(6000));

    let response = send(
        &app,
        "GET",
        "/api/v1/reports/sales-summary",
        Some(&admin),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_sales"], 2);
    // 59000 + 29500
    assert_eq!(decimal_field(&body["data"]["total_revenue"]), dec!(88500));
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(decimal_field(&products[0]["quantity"]), dec!(150));
}
