//! Read-only view over an inbound request's `Cookie` headers.

use ::cookie::Cookie;
use http::HeaderMap;
use http::header::COOKIE;

use super::CookieSource;

/// Cookie lookup over the `Cookie` headers of an HTTP request.
///
/// Every `Cookie` header is considered, in order, and values are
/// percent-decoded. When a name repeats, the last pair wins, matching how
/// `axum_extra`'s `CookieJar` fills itself from the same headers. Pairs that
/// fail to parse are skipped.
#[derive(Debug, Clone, Copy)]
pub struct RequestCookies<'a> {
    headers: &'a HeaderMap,
}

impl<'a> RequestCookies<'a> {
    /// Wraps a request's header map.
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl CookieSource for RequestCookies<'_> {
    fn get(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse_encoded)
            .filter_map(Result::ok)
            .filter(|cookie| cookie.name() == name)
            .last()
            .map(|cookie| cookie.value().to_string())
    }
}
