//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use cookie::Cookie;
use http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tokenjar_api::AppState;
use tokenjar_api::router::build_router;
use tokenjar_auth::SessionManager;
use tokenjar_core::config::{AppConfig, AuthConfig, Environment, LoggingConfig, ServerConfig};

/// Signing secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-signing-secret-0123456789";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Session manager with the same key material as the router
    pub manager: SessionManager,
}

/// A fully buffered response.
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body (`Value::Null` when empty or not JSON)
    pub body: Value,
    /// Parsed `Set-Cookie` headers
    pub set_cookies: Vec<Cookie<'static>>,
}

impl TestResponse {
    /// Returns the `Set-Cookie` for the given name, if any.
    pub fn cookie(&self, name: &str) -> Option<&Cookie<'static>> {
        self.set_cookies.iter().find(|c| c.name() == name)
    }
}

/// Builds a config for tests without touching the filesystem.
pub fn test_config(environment: Environment, allow_direct_issue: bool) -> AppConfig {
    let mut auth = AuthConfig::new(TEST_SECRET);
    auth.allow_direct_issue = allow_direct_issue;

    AppConfig {
        environment,
        server: ServerConfig::default(),
        auth,
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Development app with direct issuing enabled.
    pub fn new() -> Self {
        Self::with(Environment::Development, true)
    }

    /// App for an explicit environment and issue policy.
    pub fn with(environment: Environment, allow_direct_issue: bool) -> Self {
        let config = test_config(environment, allow_direct_issue);
        let manager = SessionManager::new(&config.auth, config.environment)
            .expect("Failed to build session manager");
        let state = AppState::new(config).expect("Failed to build app state");

        Self {
            router: build_router(state),
            manager,
        }
    }

    /// Sends a request, optionally with a JSON body and a raw `Cookie` header.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| Cookie::parse(v.to_string()).ok())
            .collect();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }

    /// Issues a session over HTTP and returns the `auth-token=...` pair for
    /// use in a `Cookie` header.
    pub async fn login(&self, user_id: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/session",
                Some(serde_json::json!({ "userId": user_id, "email": email })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        let cookie = response
            .cookie("auth-token")
            .expect("login should set the session cookie");
        format!("auth-token={}", cookie.value())
    }
}
