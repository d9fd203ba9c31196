//! Dynamic API client
//!
//! One generic entry point, [`GoolabsClient::invoke`], turns an operation
//! name plus keyword parameters into a JSON POST against
//! `<base>/api/<operation>` and returns the decoded response. Unknown
//! operation names are rejected before anything touches the network.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{ApiResponse, ApplicationError, ApplicationResult};
use crate::domain::{Operation, Params, DEFAULT_BASE_URL};
use crate::infrastructure::{HttpRequest, HttpTransport, ReqwestTransport};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Construction-time overrides. Unset fields take the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub timeout: Option<Duration>,
    /// Merged over the default headers; a `content-type` entry here replaces the default
    pub headers: BTreeMap<String, String>,
    pub base_url: Option<String>,
}

impl ClientOptions {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Resolved, immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    app_id: String,
    base_url: String,
    timeout: Duration,
    headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// The credential is used as given; presence is the caller's concern.
    pub fn new(app_id: impl Into<String>, options: ClientOptions) -> Self {
        let mut headers =
            BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]);
        for (name, value) in options.headers {
            headers.insert(name.to_ascii_lowercase(), value);
        }

        Self {
            app_id: app_id.into(),
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            headers,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Header names are stored lowercased.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

// keep the credential out of logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .finish()
    }
}

/// Client for the goo labs API.
///
/// Holds no per-call state: every call returns its own [`ApiResponse`],
/// so one instance can be shared between threads.
pub struct GoolabsClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl GoolabsClient {
    /// Create a client backed by the real HTTP transport.
    pub fn new(app_id: impl Into<String>, options: ClientOptions) -> ApplicationResult<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(
            ClientConfig::new(app_id, options),
            Arc::new(transport),
        ))
    }

    /// Create a client with a custom transport (for testing).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Call an operation by name.
    ///
    /// Fails with `UnsupportedOperation` for names outside [`Operation::ALL`]
    /// without sending anything.
    pub fn invoke(&self, name: &str, params: Params) -> ApplicationResult<ApiResponse> {
        let operation: Operation = name.parse()?;
        self.call(operation, params)
    }

    /// Call an operation and return only the decoded body.
    pub fn invoke_json(&self, name: &str, params: Params) -> ApplicationResult<Value> {
        self.invoke(name, params).map(ApiResponse::into_json)
    }

    /// Call a known operation.
    ///
    /// Falsy parameters are dropped and the credential is injected under
    /// `app_id`. No shape validation happens here.
    #[instrument(level = "debug", skip(self, params))]
    pub fn call(&self, operation: Operation, params: Params) -> ApplicationResult<ApiResponse> {
        let payload = params.into_payload(&self.config.app_id);
        debug!("payload keys: {:?}", payload.keys().collect::<Vec<_>>());
        let body = serde_json::to_string(&payload).map_err(ApplicationError::Encode)?;

        let request = HttpRequest {
            url: operation.endpoint(&self.config.base_url),
            headers: self.config.headers.clone(),
            body,
            timeout: self.config.timeout,
        };

        let response = self.transport.post(&request)?;
        debug!("status: {}", response.status);

        if !response.is_success() {
            return Err(ApplicationError::HttpStatus {
                operation,
                status: response.status,
                body: response.body,
            });
        }

        let json = serde_json::from_str(&response.body)
            .map_err(|source| ApplicationError::Decode { operation, source })?;

        Ok(ApiResponse::new(operation, response, json))
    }

    pub fn morph(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Morph, params)
    }

    pub fn similarity(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Similarity, params)
    }

    pub fn hiragana(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Hiragana, params)
    }

    pub fn entity(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Entity, params)
    }

    pub fn shortsum(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Shortsum, params)
    }

    pub fn keyword(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Keyword, params)
    }

    pub fn chrono(&self, params: Params) -> ApplicationResult<ApiResponse> {
        self.call(Operation::Chrono, params)
    }
}
