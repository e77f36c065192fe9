#![forbid(unsafe_code)]

//! Gateway configuration.

use std::time::Duration;

/// Where and how the gateway talks to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Server origin, without a trailing slash.
    pub base_url: String,
    /// Hard per-request deadline. There is no transport default to fall
    /// back on: an exchange either settles within this window or fails.
    pub timeout: Duration,
    /// Name of the cookie carrying the CSRF token.
    pub csrf_cookie: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(10),
            csrf_cookie: "csrf_token".to_string(),
        }
    }
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_csrf_cookie(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie = name.into();
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_server_with_finite_timeout() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.csrf_cookie, "csrf_token");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = GatewayConfig::new("https://books.example/");
        assert_eq!(config.base_url, "https://books.example");
    }

    #[test]
    fn builder_overrides() {
        let config = GatewayConfig::new("https://books.example")
            .with_timeout(Duration::from_secs(3))
            .with_csrf_cookie("xsrf");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.csrf_cookie, "xsrf");
    }
}
