//! I/O boundary traits for testability
//!
//! The HTTP transport is abstracted so the client can be exercised
//! with a recording mock instead of the network.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

/// A fully built POST request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON body
    pub body: String,
    pub timeout: Duration,
}

/// Raw transport response, before status checking or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names lowercased; values that are not valid UTF-8 are skipped
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure: the request never produced an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("cannot connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// HTTP transport abstraction.
pub trait HttpTransport: Send + Sync {
    /// Send one POST request and return whatever the server answered.
    ///
    /// Non-2xx statuses are NOT errors at this level.
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Blocking transport on top of `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("goolabs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request {
                url: String::new(),
                message: format!("build http client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn map_error(url: &str, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
            }
        } else if e.is_connect() {
            TransportError::Connect {
                url: url.to_string(),
                message: e.to_string(),
            }
        } else {
            TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("POST {} ({} bytes)", request.url, request.body.len());

        let mut builder = self
            .client
            .post(request.url.as_str())
            .timeout(request.timeout)
            .body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .map_err(|e| Self::map_error(&request.url, e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .map_err(|e| Self::map_error(&request.url, e))?;
        trace!("response {}: {}", status, body);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
