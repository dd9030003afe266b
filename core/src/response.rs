//! Translates a completed exchange into a result or an error.

use serde_json::Value;

use crate::error::{Result, TextApiError};
use crate::http::HttpResponse;

/// Decode a success response as JSON; anything at or above 300 is an error.
///
/// Error bodies are kept raw and never decoded.
pub fn parse_response(response: HttpResponse, uri: &str) -> Result<Value> {
    if response.status >= 300 {
        return Err(TextApiError::Http {
            status: response.status,
            detail: response.body.clone(),
            body: response.body,
            uri: uri.to_string(),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| TextApiError::Http {
        status: response.status,
        detail: format!("invalid JSON body: {e}"),
        body: response.body,
        uri: uri.to_string(),
    })
}
