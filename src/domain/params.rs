//! Request parameters and payload filtering

use serde_json::{Map, Value};

/// Payload key the credential is always sent under.
pub const APP_ID_KEY: &str = "app_id";

/// Keyword parameters for one API call.
///
/// Entries keep insertion order. Values that are "falsy" (see [`is_falsy`])
/// may be inserted freely; they are dropped when the payload is built, so
/// callers can pass optional arguments straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. `None` becomes `null` and is later dropped.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Build the request body: drop falsy entries, then set the credential
    /// under [`APP_ID_KEY`], replacing any caller-supplied value.
    pub fn into_payload(self, app_id: &str) -> Map<String, Value> {
        let mut payload: Map<String, Value> = self
            .0
            .into_iter()
            .filter(|(_, value)| !is_falsy(value))
            .collect();
        payload.insert(APP_ID_KEY.to_string(), Value::String(app_id.to_string()));
        payload
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Values that are never sent: null, `false`, zero, and empty
/// strings, lists and objects.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
