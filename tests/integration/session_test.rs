//! Integration tests for the session cookie lifecycle over HTTP.

mod helpers;

use chrono::{Duration, Utc};
use cookie::SameSite;
use http::StatusCode;

use tokenjar_core::config::Environment;

#[tokio::test]
async fn test_issue_sets_session_cookie() {
    let app = helpers::TestApp::new();
    let before = Utc::now();

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "userId": "user123", "email": "test@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["userId"], "user123");
    assert_eq!(response.body["data"]["email"], "test@example.com");
    assert!(response.body["data"].get("exp").is_none());
    assert!(response.body["data"].get("iat").is_none());

    let cookie = response.cookie("auth-token").expect("auth-token cookie");
    assert_eq!(cookie.value().split('.').count(), 3);
    assert_eq!(cookie.http_only(), Some(true));
    assert_ne!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));

    let expires = cookie
        .expires_datetime()
        .expect("cookie should carry an expiry")
        .unix_timestamp();
    let expected = (before + Duration::days(7)).timestamp();
    assert!((expires - expected).abs() <= 1);
}

#[tokio::test]
async fn test_cookie_expiry_matches_payload_expiry() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "userId": "user123", "email": "test@example.com" })),
            None,
        )
        .await;

    let expires_at = response.body["data"]["expiresAt"]
        .as_str()
        .expect("expiresAt string");
    let payload_expiry = chrono::DateTime::parse_from_rfc3339(expires_at)
        .expect("expiresAt is RFC 3339")
        .timestamp();
    let cookie_expiry = response
        .cookie("auth-token")
        .and_then(|c| c.expires_datetime())
        .expect("cookie expiry")
        .unix_timestamp();

    assert_eq!(payload_expiry, cookie_expiry);
}

#[tokio::test]
async fn test_issue_sets_secure_cookie_in_production() {
    let app = helpers::TestApp::with(Environment::Production, true);

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "userId": "user123", "email": "test@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.cookie("auth-token").expect("auth-token cookie");
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
}

#[tokio::test]
async fn test_issue_not_routed_when_disabled() {
    let app = helpers::TestApp::with(Environment::Development, false);

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "userId": "user123", "email": "test@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.cookie("auth-token").is_none());
}

#[tokio::test]
async fn test_issue_rejects_empty_identity() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "userId": "", "email": "test@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.cookie("auth-token").is_none());
}

#[tokio::test]
async fn test_current_session_round_trip() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let response = app.request("GET", "/api/session", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_object().expect("session object");
    assert_eq!(data.len(), 3);
    assert_eq!(data["userId"], "user123");
    assert_eq!(data["email"], "test@example.com");
    assert!(data.contains_key("expiresAt"));
}

#[tokio::test]
async fn test_current_session_without_cookie() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/session", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_current_session_with_invalid_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/session", None, Some("auth-token=invalid-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_session_with_expired_token() {
    let app = helpers::TestApp::new();
    let issued = app
        .manager
        .issue_token("user123", "test@example.com", Utc::now() - Duration::days(8))
        .expect("issue token");

    let response = app
        .request(
            "GET",
            "/api/session",
            None,
            Some(&format!("auth-token={}", issued.token)),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let response = app
        .request("DELETE", "/api/session", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let removal = response.cookie("auth-token").expect("removal cookie");
    assert_eq!(removal.value(), "");
    assert_eq!(removal.path(), Some("/"));
    let expires = removal
        .expires_datetime()
        .expect("removal cookie expiry")
        .unix_timestamp();
    assert!(expires < Utc::now().timestamp());
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/session", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
}

#[tokio::test]
async fn test_new_login_supersedes_previous() {
    let app = helpers::TestApp::new();
    let _first = app.login("alice", "alice@example.com").await;
    let second = app.login("bob", "bob@example.com").await;

    let response = app.request("GET", "/api/session", None, Some(&second)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["userId"], "bob");
}

#[tokio::test]
async fn test_verify_endpoint_mirrors_current_session() {
    let app = helpers::TestApp::new();
    let cookie = app.login("user123", "test@example.com").await;

    let ambient = app.request("GET", "/api/session", None, Some(&cookie)).await;
    let explicit = app
        .request("GET", "/api/session/verify", None, Some(&cookie))
        .await;

    assert_eq!(explicit.status, StatusCode::OK);
    assert_eq!(explicit.body["data"], ambient.body["data"]);

    let missing = app.request("GET", "/api/session/verify", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let invalid = app
        .request("GET", "/api/session/verify", None, Some("auth-token=invalid-token"))
        .await;
    assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_session_cookie_read_paths_agree() {
    let app = helpers::TestApp::new();
    let valid = app.login("user123", "test@example.com").await;

    // The later occurrence of a repeated name is the one both paths trust.
    let cases = [
        (format!("{valid}; auth-token=garbage"), StatusCode::UNAUTHORIZED),
        (format!("auth-token=garbage; {valid}"), StatusCode::OK),
    ];

    for (header, expected) in cases {
        let ambient = app.request("GET", "/api/session", None, Some(&header)).await;
        let explicit = app
            .request("GET", "/api/session/verify", None, Some(&header))
            .await;
        let guarded = app.request("GET", "/api/me", None, Some(&header)).await;

        assert_eq!(ambient.status, expected, "GET /api/session with {header}");
        assert_eq!(explicit.status, expected, "GET /api/session/verify with {header}");
        assert_eq!(guarded.status, expected, "GET /api/me with {header}");
        assert_eq!(explicit.body["data"], ambient.body["data"]);
    }
}
