//! Structured result of one API call

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::Operation;
use crate::infrastructure::HttpResponse;

/// Everything a successful call produced: the decoded body plus the raw
/// transport status, headers and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    operation: Operation,
    status: u16,
    headers: BTreeMap<String, String>,
    body: String,
    json: Value,
}

impl ApiResponse {
    pub(crate) fn new(operation: Operation, raw: HttpResponse, json: Value) -> Self {
        Self {
            operation,
            status: raw.status,
            headers: raw.headers,
            body: raw.body,
            json,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Header lookup by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Raw response body as received.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decoded response body.
    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn into_json(self) -> Value {
        self.json
    }

    /// `request_id` echoed back by the service, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.json.get("request_id").and_then(Value::as_str)
    }
}
