mod common;

use common::{admin_token, body_json, login, login_token, send, spawn_app};
use http::StatusCode;
use rstest::rstest;

#[rstest]
#[case("admin", "admin@2024", "admin", "/admin")]
#[case("gerantstat", "ger@1234", "gerant", "/gerant")]
#[case("pop@123", "pompis@789", "pompiste", "/pompistes")]
#[tokio::test]
async fn each_credential_pair_lands_on_its_dashboard(
    #[case] username: &str,
    #[case] password: &str,
    #[case] role: &str,
    #[case] landing: &str,
) {
    let app = spawn_app().await;

    let response = login(&app, username, password).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["role"], role);
    assert_eq!(body["landing"], landing);
    assert!(body["access_token"].as_str().is_some());
    assert!(body["refresh_token"].as_str().is_some());
}

#[rstest]
#[case("admin", "wrong-password")]
#[case("unknown", "admin@2024")]
#[case("", "")]
#[tokio::test]
async fn any_other_pair_stays_logged_out(#[case] username: &str, #[case] password: &str) {
    let app = spawn_app().await;

    let response = login(&app, username, password).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/api/v1/admin/cuves", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn attendant_token_cannot_reach_admin_routes() {
    let app = spawn_app().await;
    let token = login_token(&app, "pop@123", "pompis@789").await;

    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, "GET", "/api/v1/gerant/clients", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_token_passes_every_role_gate() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    for uri in [
        "/api/v1/admin/cuves",
        "/api/v1/gerant/clients",
        "/api/v1/pompistes/ventes",
        "/api/v1/reports/stock-levels",
    ] {
        let response = send(&app, "GET", uri, Some(&token), None).await;
        assert_eq!(response.status(), StatusCode::OK, "admin blocked on {}", uri);
    }
}

#[tokio::test]
async fn manager_token_is_scoped_to_manager_routes() {
    let app = spawn_app().await;
    let token = login_token(&app, "gerantstat", "ger@1234").await;

    let response = send(&app, "GET", "/api/v1/gerant/clients", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, "GET", "/api/v1/pompistes/ventes", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_revokes_the_session_token() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    // Token works before logout
    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "POST", "/auth/logout", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // And is rejected afterwards
    let response = send(&app, "GET", "/api/v1/admin/cuves", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn status_and_health_are_public() {
    let app = spawn_app().await;

    let response = send(&app, "GET", "/api/v1/status", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["service"], "carburis-api");

    let response = send(&app, "GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["checks"]["database"], "healthy");
}
