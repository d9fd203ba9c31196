//! goolabs: client library and command line tools for the goo labs
//! natural language API.
//!
//! Layers, inner to outer:
//! - `domain`: operations, parameter maps and falsy filtering
//! - `application`: the dynamic client and its response type
//! - `infrastructure`: the HTTP transport seam
//! - `cli`: argument parsing, input cleaning and output projection
//!
//! ```no_run
//! use goolabs::{ClientOptions, GoolabsClient, Params};
//!
//! let client = GoolabsClient::new("my-app-id", ClientOptions::default())?;
//! let response = client.invoke(
//!     "similarity",
//!     Params::new().with("query_pair", vec!["windows", "apple"]),
//! )?;
//! println!("{}", response.json()["score"]);
//! # Ok::<(), goolabs::application::ApplicationError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApiResponse, ClientConfig, ClientOptions, GoolabsClient};
pub use domain::{Operation, Params};
