//! Infrastructure layer: I/O implementations
//!
//! This layer implements the HTTP transport boundary.

pub mod error;
pub mod traits;

pub use error::InfraError;
pub use traits::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
