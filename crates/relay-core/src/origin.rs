//! # Origin Allow-List
//!
//! The set of front-end origins permitted to call the relay.
//! An empty list means open mode: every origin is admitted.

use serde::Serialize;

/// Ordered list of allowed origins, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    /// Open mode: admit everything
    pub fn open() -> Self {
        Self::default()
    }

    /// Build from explicit origins, keeping first-seen order and dropping
    /// blanks and duplicates
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for origin in origins {
            let origin: String = origin.into();
            let origin = origin.trim();
            if !origin.is_empty() && !list.iter().any(|o| o == origin) {
                list.push(origin.to_string());
            }
        }
        Self { origins: list }
    }

    /// Parse a comma-separated list (e.g. `https://a.app,https://b.app`)
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// True when no origin is configured
    pub fn is_open(&self) -> bool {
        self.origins.is_empty()
    }

    /// Decide admit/reject for a request's declared origin.
    ///
    /// Matching is exact and case-sensitive. A request without an origin is
    /// only admitted in open mode.
    pub fn admits(&self, origin: Option<&str>) -> bool {
        if self.is_open() {
            return true;
        }
        match origin {
            Some(origin) => self.origins.iter().any(|o| o == origin),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}
