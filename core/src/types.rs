//! Caller-facing parameter types.
//!
//! # Design
//! `Params` is the flat field-name → value mapping that ends up form-encoded
//! in the request body. `Input` is what operations accept: either a bare
//! string (shorthand, resolved per operation by the normalizer) or a
//! ready-made `Params`. Making this a sum type keeps the string-vs-mapping
//! decision in the type system instead of inspecting values at runtime.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parameter value. Only scalars; the service takes no nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Integer(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Integer(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// Named fields sent as the body of one request.
///
/// Keys are kept sorted so the encoded body is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    fields: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Document URL to analyze.
    pub fn url(self, url: impl Into<String>) -> Self {
        self.with("url", url.into())
    }

    /// Raw text to analyze.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.with("text", text.into())
    }

    /// ISO 639-1 code of the text, or `auto` to let the service detect it.
    pub fn language(self, language: impl Into<String>) -> Self {
        self.with("language", language.into())
    }

    /// Operation-specific mode, e.g. `tweet`/`document` for sentiment or
    /// `default`/`short` for summarize.
    pub fn mode(self, mode: impl Into<String>) -> Self {
        self.with("mode", mode.into())
    }

    pub fn phrase(self, phrase: impl Into<String>) -> Self {
        self.with("phrase", phrase.into())
    }

    /// Number of related phrases to return.
    pub fn count(self, count: u32) -> Self {
        self.with("count", count)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with("title", title.into())
    }

    /// Takes precedence over `sentences_percentage` on the service side.
    pub fn sentences_number(self, n: u32) -> Self {
        self.with("sentences_number", n)
    }

    pub fn sentences_percentage(self, pct: u32) -> Self {
        self.with("sentences_percentage", pct)
    }

    /// Sent as `true`/`false`. Older clients sent `True`; use
    /// `with("best_image", "True")` if a deployment only accepts that form.
    pub fn best_image(self, best_image: bool) -> Self {
        self.with("best_image", best_image)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// What an operation accepts from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Shorthand string; the operation decides which field it fills.
    Raw(String),
    /// Explicit fields, passed through untouched.
    Params(Params),
}

impl From<&str> for Input {
    fn from(v: &str) -> Self {
        Input::Raw(v.to_string())
    }
}

impl From<String> for Input {
    fn from(v: String) -> Self {
        Input::Raw(v)
    }
}

impl From<Params> for Input {
    fn from(v: Params) -> Self {
        Input::Params(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_setters_use_documented_field_names() {
        let params = Params::new()
            .url("http://example.com")
            .title("Title")
            .mode("short")
            .sentences_number(3)
            .sentences_percentage(40)
            .best_image(true);
        assert_eq!(params.get("url"), Some(&ParamValue::Text("http://example.com".to_string())));
        assert_eq!(params.get("title"), Some(&ParamValue::Text("Title".to_string())));
        assert_eq!(params.get("mode"), Some(&ParamValue::Text("short".to_string())));
        assert_eq!(params.get("sentences_number"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get("sentences_percentage"), Some(&ParamValue::Integer(40)));
        assert_eq!(params.get("best_image"), Some(&ParamValue::Bool(true)));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn best_image_can_be_sent_capitalized() {
        let params = Params::new().url("http://a").best_image(true);
        assert_eq!(params.get("best_image").map(ParamValue::to_string).as_deref(), Some("true"));
        let params = Params::new().url("http://a").with("best_image", "True");
        assert_eq!(params.get("best_image").map(ParamValue::to_string).as_deref(), Some("True"));
    }

    #[test]
    fn values_render_as_form_strings() {
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(false).to_string(), "false");
        assert_eq!(ParamValue::from(20u32).to_string(), "20");
        assert_eq!(ParamValue::from(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::from("a b").to_string(), "a b");
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let params = Params::new().text("t").language("en").count(5);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["count", "language", "text"]);
    }

    #[test]
    fn params_deserialize_from_flat_json() {
        let params: Params =
            serde_json::from_str(r#"{"phrase":"android","count":10,"best_image":false}"#).unwrap();
        assert_eq!(params.get("phrase"), Some(&ParamValue::Text("android".to_string())));
        assert_eq!(params.get("count"), Some(&ParamValue::Integer(10)));
        assert_eq!(params.get("best_image"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn params_collect_from_pairs() {
        let params: Params = [("text", "hello"), ("language", "auto")].into_iter().collect();
        assert!(params.contains("text"));
        assert!(params.contains("language"));
        assert!(!params.contains("url"));
    }

    #[test]
    fn strings_become_raw_input() {
        assert_eq!(Input::from("hello"), Input::Raw("hello".to_string()));
        let params = Params::new().text("x");
        assert_eq!(Input::from(params.clone()), Input::Params(params));
    }
}
