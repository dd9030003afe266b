//! Error types for the text analysis API client.
//!
//! # Design
//! Three kinds of failure reach the caller. `MissingCredentials` and
//! `MissingParameter` are raised before anything touches the network.
//! `Http` covers every response the service sent back that could not be
//! turned into a result: a status of 300 or above, or a success status whose
//! body is not JSON. `Transport` is reserved for exchanges that never produced
//! a status code at all.
//!
//! Nothing here is retried or logged; errors go straight back to the caller.

use thiserror::Error;

/// Errors returned by `TextApiClient` and `TextApi`.
#[derive(Debug, Error)]
pub enum TextApiError {
    /// Both the application ID and the application key were empty.
    #[error("invalid application ID or application key")]
    MissingCredentials,

    /// None of the fields the operation requires were present after
    /// normalization. No request was built.
    #[error("{operation}: you must provide {}", .fields.join(" or "))]
    MissingParameter {
        operation: &'static str,
        fields: &'static [&'static str],
    },

    /// The service answered with an unusable response.
    ///
    /// `body` is the raw response text, kept verbatim for diagnostics.
    /// `detail` is the body for status failures and the decoder message when
    /// a success response was not valid JSON.
    #[error("HTTP {status} from {uri}: {detail}")]
    Http {
        status: u16,
        body: String,
        uri: String,
        detail: String,
    },

    /// The transport failed before a response was received.
    #[error("transport error for {uri}: {message}")]
    Transport { uri: String, message: String },
}

impl TextApiError {
    /// Status code of the failed exchange, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TextApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextApiError>;
