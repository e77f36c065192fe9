#![forbid(unsafe_code)]

//! The reading-list gateway.
//!
//! [`ReadingListGateway`] is the seam the application model talks through;
//! tests substitute a scripted implementation, production wires in
//! [`HttpGateway`]. The HTTP client enforces the configured timeout and
//! attaches the CSRF header whenever the cookie jar has a token — the
//! request is state-changing, so the header is not optional.

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::GatewayConfig;
use crate::cookie::cookie_value;
use crate::types::{ActionResponse, AddToReadingList};

/// Header carrying the CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

const ADD_TO_READING_LIST_PATH: &str = "/add-to-reading-list";

/// Why an exchange failed before producing a server verdict.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request did not settle within the configured deadline.
    #[error("request timed out")]
    Timeout,
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered, but not with the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// One request, one response, one verdict.
pub trait ReadingListGateway {
    /// Submit "start reading" for a book. `Ok` carries the server's
    /// verdict, including rejections; `Err` means the exchange itself
    /// failed.
    fn add_to_reading_list(
        &self,
        request: &AddToReadingList,
    ) -> Result<ActionResponse, GatewayError>;
}

/// Production gateway over HTTP.
pub struct HttpGateway {
    config: GatewayConfig,
    http: Client,
    /// Raw `Cookie:` header value the page session carries, if any.
    cookies: Option<String>,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;
        Ok(Self {
            config,
            http,
            cookies: None,
        })
    }

    /// Attach the session's cookie string; the CSRF token is read from it
    /// on every request.
    #[must_use]
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn csrf_token(&self) -> Option<&str> {
        self.cookies
            .as_deref()
            .and_then(|jar| cookie_value(jar, &self.config.csrf_cookie))
    }
}

impl ReadingListGateway for HttpGateway {
    fn add_to_reading_list(
        &self,
        request: &AddToReadingList,
    ) -> Result<ActionResponse, GatewayError> {
        let url = format!("{}{ADD_TO_READING_LIST_PATH}", self.config.base_url);
        debug!(%url, book_id = %request.book_id, "submitting reading-list request");

        let mut builder = self.http.post(&url).json(request);
        if let Some(token) = self.csrf_token() {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = builder.send().inspect_err(|err| {
            error!(%err, "reading-list request failed");
        })?;
        debug!(status = %response.status(), "reading-list response");
        let verdict: ActionResponse = response.json()?;
        Ok(verdict)
    }
}
