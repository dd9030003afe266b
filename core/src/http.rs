//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; an
//! `HttpTransport` carries one request to the service and hands back the
//! response. Callers who want to run the exchange themselves can skip the
//! trait entirely and use `TextApiClient::build_request` /
//! `TextApiClient::parse_response` directly.
//!
//! All fields use owned types so a request can be moved to another thread or
//! queued without lifetime concerns.

use crate::error::TextApiError;

/// HTTP method for a request. The service only accepts POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `uri` is absolute (scheme, host and path). `body` is already
/// form-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one request and returns the service's response.
///
/// Implementations must return non-2xx responses as `Ok`; status
/// interpretation belongs to the client. `Err` is for exchanges that produced
/// no response at all.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TextApiError>;
}

impl<F> HttpTransport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TextApiError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TextApiError> {
        self(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[cfg(feature = "ureq")]
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "ureq")]
impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data here, not errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

#[cfg(feature = "ureq")]
impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ureq")]
impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TextApiError> {
        let transport_error = |e: ureq::Error| TextApiError::Transport {
            uri: request.uri.clone(),
            message: e.to_string(),
        };

        let mut builder = match request.method {
            HttpMethod::Post => self.agent.post(&request.uri),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .send(request.body.as_bytes())
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        // Bodies need not be UTF-8 (e.g. Latin-1 error pages); status
        // interpretation must still see them.
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(transport_error)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(uri = %request.uri, status, body_len = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
