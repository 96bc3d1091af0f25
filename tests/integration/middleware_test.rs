//! Integration tests for the `require_session` guard and request-cookie verification.

mod helpers;

use chrono::Utc;
use http::StatusCode;

use tokenjar_auth::SessionManager;
use tokenjar_core::config::{AuthConfig, Environment};

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_with_valid_session() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let response = app
        .request("GET", "/api/me", None, Some(&format!("theme=dark; {cookie}")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["userId"], "user123");
    assert_eq!(response.body["data"]["email"], "test@example.com");
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let forged = app
        .manager
        .issue_token("admin", "admin@example.com", Utc::now())
        .expect("issue token");
    let original: Vec<&str> = cookie.trim_start_matches("auth-token=").split('.').collect();
    let forged_body = forged.token.split('.').nth(1).expect("payload segment");
    let tampered = format!("auth-token={}.{}.{}", original[0], forged_body, original[2]);

    let response = app.request("GET", "/api/me", None, Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_token_from_other_secret() {
    let app = helpers::TestApp::new();
    let stranger = SessionManager::new(
        &AuthConfig::new("another-deployment-signing-secret-987654"),
        Environment::Development,
    )
    .expect("session manager");
    let issued = stranger
        .issue_token("user123", "test@example.com", Utc::now())
        .expect("issue token");

    let response = app
        .request(
            "GET",
            "/api/me",
            None,
            Some(&format!("auth-token={}", issued.token)),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_after_logout_cookie_is_gone() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let logout = app
        .request("DELETE", "/api/session", None, Some(&cookie))
        .await;
    let removal = logout.cookie("auth-token").expect("removal cookie");

    // A browser honoring the removal sends the emptied cookie, if anything.
    let response = app
        .request(
            "GET",
            "/api/me",
            None,
            Some(&format!("auth-token={}", removal.value())),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
