//! Stateless request builder and response parser for the text analysis API.
//!
//! # Design
//! `TextApiClient` holds only construction-time configuration. A call is
//! split into `build_request`, which normalizes the input, checks the
//! operation's required fields and produces an `HttpRequest`, and
//! `parse_response`, which consumes the matching `HttpResponse`. Whoever sits
//! between the two performs the I/O: `TextApi` with an `HttpTransport`, or
//! the caller directly.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, TextApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize::Normalizer;
use crate::operation::{Operation, Required};
use crate::request;
use crate::response;
use crate::types::{Input, Params};

/// Synchronous, stateless client for the text analysis API.
///
/// Safe to share between threads; nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct TextApiClient {
    config: ClientConfig,
    normalizer: Normalizer,
}

impl TextApiClient {
    /// Client for the production service over HTTPS.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(app_id, app_key))
    }

    pub fn with_https(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        use_https: bool,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(app_id, app_key).use_https(use_https))
    }

    /// Fails with `MissingCredentials` only when both the ID and the key are
    /// empty. A single empty value is accepted and left for the service to
    /// reject.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        if config.credentials.is_empty() {
            return Err(TextApiError::MissingCredentials);
        }
        Ok(Self {
            config,
            normalizer: Normalizer::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve `input` into the fields `operation` will send.
    pub fn normalize(&self, operation: Operation, input: impl Into<Input>) -> Params {
        self.normalizer
            .normalize(input.into(), operation.spec().shorthand)
    }

    /// Normalize, validate and build the request for one call.
    ///
    /// Returns `MissingParameter` without building anything when the
    /// operation's required fields are absent.
    pub fn build_request(&self, operation: Operation, input: impl Into<Input>) -> Result<HttpRequest> {
        let spec = operation.spec();
        let params = self.normalize(operation, input);
        check_required(operation, spec.required, &params)?;

        let req = request::build_request(operation, &params, &self.config);
        tracing::debug!(
            operation = operation.name(),
            uri = %req.uri,
            fields = params.len(),
            "built request"
        );
        Ok(req)
    }

    pub fn parse_response(&self, request: &HttpRequest, response: HttpResponse) -> Result<Value> {
        response::parse_response(response, &request.uri)
    }
}

fn check_required(operation: Operation, required: Required, params: &Params) -> Result<()> {
    match required {
        Required::AnyOf(fields) if fields.iter().any(|f| params.contains(f)) => Ok(()),
        Required::AnyOf(fields) => Err(TextApiError::MissingParameter {
            operation: operation.name(),
            fields,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HEADER_APPLICATION_ID, HEADER_APPLICATION_KEY};
    use crate::types::ParamValue;

    fn client() -> TextApiClient {
        TextApiClient::new("app_id", "app_key").unwrap()
    }

    fn text(params: &Params, key: &str) -> Option<String> {
        params.get(key).map(ParamValue::to_string)
    }

    #[test]
    fn both_credentials_empty_is_rejected() {
        let err = TextApiClient::new("", "").unwrap_err();
        assert!(matches!(err, TextApiError::MissingCredentials));
        assert!(TextApiClient::with_https("", "", false).is_err());
    }

    #[test]
    fn one_credential_is_enough_to_construct() {
        assert!(TextApiClient::new("app_id", "").is_ok());
        assert!(TextApiClient::new("", "app_key").is_ok());
    }

    #[test]
    fn https_is_the_default() {
        assert!(client().config().use_https);
        let insecure = TextApiClient::with_https("app_id", "app_key", false).unwrap();
        let req = insecure.build_request(Operation::Language, "hello").unwrap();
        assert!(req.uri.starts_with("http://"));
    }

    #[test]
    fn empty_params_fail_before_building() {
        let c = client();
        for op in Operation::ALL {
            let err = c.build_request(op, Params::new()).unwrap_err();
            assert!(matches!(err, TextApiError::MissingParameter { .. }), "{op}");
        }
    }

    #[test]
    fn missing_parameter_names_the_fields() {
        let err = client().build_request(Operation::Summarize, Params::new().title("t")).unwrap_err();
        match err {
            TextApiError::MissingParameter { operation, fields } => {
                assert_eq!(operation, "summarize");
                assert_eq!(fields, &["text", "url"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn generic_operations_classify_shorthand() {
        let c = client();
        let params = c.normalize(Operation::Sentiment, "http://example.com/a");
        assert_eq!(text(&params, "url").as_deref(), Some("http://example.com/a"));
        let params = c.normalize(Operation::Classify, "hello world");
        assert_eq!(text(&params, "text").as_deref(), Some("hello world"));
    }

    #[test]
    fn extract_shorthand_is_always_url() {
        let c = client();
        let params = c.normalize(Operation::Extract, "http://x");
        assert_eq!(text(&params, "url").as_deref(), Some("http://x"));
        assert_eq!(params.len(), 1);

        let err = c
            .build_request(Operation::Extract, Params::new().text("body").best_image(true))
            .unwrap_err();
        assert!(matches!(err, TextApiError::MissingParameter { operation: "extract", .. }));
    }

    #[test]
    fn related_shorthand_is_always_phrase() {
        let c = client();
        let params = c.normalize(Operation::Related, "foo");
        assert_eq!(text(&params, "phrase").as_deref(), Some("foo"));

        let err = c.build_request(Operation::Related, Params::new()).unwrap_err();
        assert!(matches!(err, TextApiError::MissingParameter { operation: "related", .. }));
    }

    #[test]
    fn text_or_url_alone_satisfies_generic_operations() {
        let c = client();
        assert!(c.build_request(Operation::Hashtags, Params::new().url("invalid-url")).is_ok());
        assert!(c.build_request(Operation::Concepts, Params::new().text("x")).is_ok());
    }

    #[test]
    fn built_request_carries_constructor_credentials() {
        let c = TextApiClient::new("the-id", "the-key").unwrap();
        let req = c.build_request(Operation::Entities, "Barack Obama").unwrap();
        assert_eq!(req.header(HEADER_APPLICATION_ID), Some("the-id"));
        assert_eq!(req.header(HEADER_APPLICATION_KEY), Some("the-key"));
        assert_eq!(req.uri, "https://api.aylien.com/api/v1/entities");
        assert_eq!(req.body, "text=Barack+Obama");
    }

    #[test]
    fn parse_uses_request_uri_in_errors() {
        let c = client();
        let req = c.build_request(Operation::Language, "bonjour").unwrap();
        let err = c
            .parse_response(
                &req,
                HttpResponse {
                    status: 500,
                    headers: Vec::new(),
                    body: "boom".to_string(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, TextApiError::Http { status: 500, ref uri, .. } if uri == &req.uri));
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextApiClient>();
    }
}
