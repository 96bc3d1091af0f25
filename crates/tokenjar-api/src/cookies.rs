//! Adapts Axum's `CookieJar` to the session layer's cookie transport.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite as JarSameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use tokenjar_core::cookie::{CookieOptions, CookieSource, CookieTransport, SameSite};
use tokenjar_core::error::AppError;

/// A [`CookieTransport`] over the request's cookie jar.
///
/// Writes accumulate in the wrapped jar; hand it back with
/// [`JarTransport::into_jar`] and return it from the handler so the
/// `Set-Cookie` headers reach the client.
#[derive(Debug, Clone)]
pub struct JarTransport {
    jar: CookieJar,
}

impl JarTransport {
    /// Wraps an extracted jar.
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Returns the jar, including any pending cookie changes.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn update(&mut self, f: impl FnOnce(CookieJar) -> CookieJar) {
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = f(jar);
    }
}

impl CookieSource for JarTransport {
    fn get(&self, name: &str) -> Option<String> {
        self.jar.get(name).map(|cookie| cookie.value().to_string())
    }
}

impl CookieTransport for JarTransport {
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> Result<(), AppError> {
        let cookie = Cookie::build((name.to_string(), value.to_string()))
            .http_only(options.http_only)
            .secure(options.secure)
            .same_site(same_site(options.same_site))
            .path(options.path.clone())
            .expires(offset_date_time(options.expires)?)
            .build();

        self.update(|jar| jar.add(cookie));
        Ok(())
    }

    fn delete(&mut self, name: &str, path: &str) {
        let removal = Cookie::build((name.to_string(), "")).path(path.to_string());
        self.update(|jar| jar.remove(removal));
    }
}

fn same_site(value: SameSite) -> JarSameSite {
    match value {
        SameSite::Strict => JarSameSite::Strict,
        SameSite::Lax => JarSameSite::Lax,
        SameSite::None => JarSameSite::None,
    }
}

fn offset_date_time(instant: DateTime<Utc>) -> Result<OffsetDateTime, AppError> {
    let nanos = instant
        .timestamp_nanos_opt()
        .ok_or_else(|| AppError::internal(format!("Cookie expiry out of range: {instant}")))?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))
        .map_err(|e| AppError::internal(format!("Cookie expiry out of range: {e}")))
}
