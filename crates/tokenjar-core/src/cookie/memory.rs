//! In-memory cookie jar.

use std::collections::HashMap;

use super::{CookieOptions, CookieSource, CookieTransport};
use crate::result::AppResult;

/// A cookie stored in a [`MemoryCookieJar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    /// Cookie value.
    pub value: String,
    /// Attributes the cookie was written with.
    pub options: CookieOptions,
}

/// A cookie transport backed by a `HashMap`.
///
/// Used by the CLI and by tests that exercise the session layer without an
/// HTTP runtime. Remembers the attributes each cookie was written with.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: HashMap<String, StoredCookie>,
}

impl MemoryCookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw cookie value with the given attributes, bypassing the
    /// session layer. Handy for planting foreign or tampered tokens.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>, options: CookieOptions) {
        self.cookies.insert(
            name.into(),
            StoredCookie {
                value: value.into(),
                options,
            },
        );
    }

    /// Returns the full stored cookie, including attributes.
    pub fn cookie(&self, name: &str) -> Option<&StoredCookie> {
        self.cookies.get(name)
    }

    /// Whether a cookie with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Number of cookies held.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the jar is empty.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieSource for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|c| c.value.clone())
    }
}

impl CookieTransport for MemoryCookieJar {
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> AppResult<()> {
        self.insert(name, value, options.clone());
        Ok(())
    }

    fn delete(&mut self, name: &str, _path: &str) {
        self.cookies.remove(name);
    }
}
