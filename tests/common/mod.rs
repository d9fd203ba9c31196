//! Shared test doubles for integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use goolabs::infrastructure::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Transport that records every request and replays queued outcomes.
///
/// With nothing queued, answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mock whose next response carries `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let mock = Self::default();
        mock.push_response(status, body);
        Arc::new(mock)
    }

    /// Mock whose next call fails at the network level.
    pub fn failing(error: TransportError) -> Arc<Self> {
        let mock = Self::default();
        mock.outcomes.lock().unwrap().push_back(Err(error));
        Arc::new(mock)
    }

    pub fn push_response(&self, status: u16, body: &str) {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        self.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers,
            body: body.to_string(),
        }));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    /// Decoded JSON body of the most recent request.
    pub fn last_payload(&self) -> Map<String, Value> {
        serde_json::from_str(&self.last_request().body).expect("request body is a JSON object")
    }
}

impl HttpTransport for MockTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    headers: BTreeMap::new(),
                    body: "{}".to_string(),
                })
            })
    }
}
