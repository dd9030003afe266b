//! Synchronous client core for the AYLIEN Text Analysis API.
//!
//! # Overview
//! Every operation (sentiment, classify, extract, ...) is the same call: turn
//! the caller's input into form fields, check the operation's required
//! fields, POST them with the credential headers, and decode the JSON reply.
//! The per-operation differences live in one static table (`OPERATIONS`).
//!
//! # Design
//! - `TextApiClient` is stateless after construction. `build_request` and
//!   `parse_response` never touch the network, so callers can run the I/O
//!   themselves (host-does-IO).
//! - `TextApi` pairs a client with an `HttpTransport` and exposes one method
//!   per operation. `UreqTransport` (feature `ureq`, default) is the bundled
//!   blocking transport.
//! - Bare-string shorthand is an `Input` variant, not a runtime type check.
//!
//! ```no_run
//! use textapi_core::{Params, TextApi, TextApiClient};
//!
//! # fn main() -> textapi_core::Result<()> {
//! let api = TextApi::connect(TextApiClient::new("app-id", "app-key")?);
//! let sentiment = api.sentiment(Params::new().text("John is a very good football player!").mode("tweet"))?;
//! println!("{}", sentiment["polarity"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod http;
pub mod normalize;
pub mod operation;
pub mod request;
pub mod response;
pub mod types;

pub use client::TextApiClient;
pub use config::{ClientConfig, Credentials};
pub use error::{Result, TextApiError};
pub use facade::TextApi;
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use operation::{Operation, OperationSpec, Required, Shorthand, OPERATIONS};
pub use types::{Input, ParamValue, Params};
