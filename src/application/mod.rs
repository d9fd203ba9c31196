//! Application layer: the API client
//!
//! This layer builds requests from domain values and depends on the
//! HTTP transport boundary trait.

pub mod client;
pub mod error;
pub mod response;

pub use client::{ClientConfig, ClientOptions, GoolabsClient, DEFAULT_TIMEOUT};
pub use error::{ApplicationError, ApplicationResult};
pub use response::ApiResponse;
