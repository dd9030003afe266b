//! Builds the outbound request for one operation call.

use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest};
use crate::operation::Operation;
use crate::types::Params;

pub const HEADER_APPLICATION_ID: &str = "X-AYLIEN-TextAPI-Application-ID";
pub const HEADER_APPLICATION_KEY: &str = "X-AYLIEN-TextAPI-Application-Key";

/// Pure function of its inputs; performs no I/O.
pub fn build_request(operation: Operation, params: &Params, config: &ClientConfig) -> HttpRequest {
    let credentials = &config.credentials;
    HttpRequest {
        method: HttpMethod::Post,
        uri: config.endpoint_uri(operation.name()),
        headers: vec![
            ("Accept".to_string(), "application/json".to_string()),
            (
                "Content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            (HEADER_APPLICATION_ID.to_string(), credentials.app_id.clone()),
            (HEADER_APPLICATION_KEY.to_string(), credentials.app_key.clone()),
        ],
        body: encode_form(params),
    }
}

/// `application/x-www-form-urlencoded` body for `params`.
pub fn encode_form(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}
