//! Domain layer: operations and request parameters
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod operation;
pub mod params;

pub use error::DomainError;
pub use operation::{Operation, DEFAULT_BASE_URL};
pub use params::{is_falsy, Params, APP_ID_KEY};
