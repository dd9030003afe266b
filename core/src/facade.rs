//! One method per analysis operation, all routed through `TextApi::call`.

use serde_json::Value;

use crate::client::TextApiClient;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::operation::Operation;
use crate::types::Input;

/// A `TextApiClient` paired with the transport that executes its requests.
///
/// Each call is one blocking request/response cycle. No retries, no caching.
#[derive(Debug, Clone)]
pub struct TextApi<T> {
    client: TextApiClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl TextApi<crate::http::UreqTransport> {
    /// Use the bundled blocking `ureq` transport.
    pub fn connect(client: TextApiClient) -> Self {
        Self::new(client, crate::http::UreqTransport::new())
    }
}

impl<T: HttpTransport> TextApi<T> {
    pub fn new(client: TextApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TextApiClient {
        &self.client
    }

    /// Validate, send and decode a call to `operation`.
    ///
    /// The decoded JSON is returned as the service sent it.
    pub fn call(&self, operation: Operation, input: impl Into<Input>) -> Result<Value> {
        let request = self.client.build_request(operation, input)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_response(&request, response)
    }

    /// Main article body and media of the page at `url`.
    ///
    /// A bare string is always taken as the URL.
    pub fn extract(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Extract, input)
    }

    /// IPTC subject codes for a text or URL.
    pub fn classify(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Classify, input)
    }

    /// Concepts linked to DBpedia resources.
    pub fn concepts(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Concepts, input)
    }

    /// Named entities and values (people, places, amounts, ...).
    pub fn entities(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Entities, input)
    }

    pub fn hashtags(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Hashtags, input)
    }

    /// ISO 639-1 code of the main language, with confidence.
    pub fn language(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Language, input)
    }

    /// Phrases related to a unigram or bigram.
    ///
    /// A bare string is always taken as the phrase.
    pub fn related(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Related, input)
    }

    /// Polarity and subjectivity.
    pub fn sentiment(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Sentiment, input)
    }

    pub fn summarize(&self, input: impl Into<Input>) -> Result<Value> {
        self.call(Operation::Summarize, input)
    }
}
