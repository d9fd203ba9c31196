//! The fixed set of remote operations and their endpoints

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Base URL of the public goo labs service.
pub const DEFAULT_BASE_URL: &str = "https://labs.goo.ne.jp";

/// One named remote function exposed by the goo labs API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Morphological analysis
    Morph,
    /// Similarity score of two words
    Similarity,
    /// Hiragana / katakana conversion
    Hiragana,
    /// Named-entity extraction
    Entity,
    /// Review summarization
    Shortsum,
    /// Keyword extraction
    Keyword,
    /// Date/time expression normalization
    Chrono,
}

impl Operation {
    /// Every supported operation, in the order the service documents them.
    pub const ALL: [Operation; 7] = [
        Operation::Morph,
        Operation::Similarity,
        Operation::Hiragana,
        Operation::Entity,
        Operation::Shortsum,
        Operation::Keyword,
        Operation::Chrono,
    ];

    /// Wire name of the operation, as used in the endpoint path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Morph => "morph",
            Operation::Similarity => "similarity",
            Operation::Hiragana => "hiragana",
            Operation::Entity => "entity",
            Operation::Shortsum => "shortsum",
            Operation::Keyword => "keyword",
            Operation::Chrono => "chrono",
        }
    }

    /// Endpoint URL for this operation under `base_url`: `<base>/api/<name>`.
    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}/api/{}", base_url.trim_end_matches('/'), self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| DomainError::UnsupportedOperation(name.to_string()))
    }
}
