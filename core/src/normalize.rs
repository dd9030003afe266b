//! Turns caller input into the `Params` an operation sends.

use std::sync::LazyLock;

use regex::Regex;

use crate::operation::Shorthand;
use crate::types::{Input, Params};

/// Matches strings that start with an http or https scheme.
const URL_PATTERN: &str = r"(?i)^https?://";

// Compiled once per process and shared by every client.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"));

/// Resolves shorthand string input into `Params`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Normalizer
    }

    /// Field name a bare string fills under the generic rule.
    pub fn classify(&self, input: &str) -> &'static str {
        if URL_REGEX.is_match(input) {
            "url"
        } else {
            "text"
        }
    }

    pub fn normalize(&self, input: Input, shorthand: Shorthand) -> Params {
        match input {
            Input::Params(params) => params,
            Input::Raw(value) => {
                let field = match shorthand {
                    Shorthand::Classify => self.classify(&value),
                    Shorthand::Field(field) => field,
                };
                Params::new().with(field, value)
            }
        }
    }
}
