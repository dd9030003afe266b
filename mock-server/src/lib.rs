//! Stand-in for the text analysis service.
//!
//! Accepts the same calling convention as the real API (form-encoded POST,
//! credential headers, JSON replies) and answers with canned documents
//! shaped like the service's. Every request that gets past routing is
//! recorded so tests can inspect what a client actually sent.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const APPLICATION_ID_HEADER: &str = "x-aylien-textapi-application-id";
pub const APPLICATION_KEY_HEADER: &str = "x-aylien-textapi-application-key";

/// Largest `count` the related endpoint honours.
pub const MAX_RELATED: usize = 100;

pub const OPERATIONS: [&str; 9] = [
    "extract", "classify", "concepts", "entities", "hashtags", "language", "related", "sentiment",
    "summarize",
];

/// One request as seen by the server.
#[derive(Clone, Debug, Serialize)]
pub struct RecordedRequest {
    pub operation: String,
    pub application_id: Option<String>,
    pub application_key: Option<String>,
    pub accept: Option<String>,
    pub fields: HashMap<String, String>,
}

pub type Recorder = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    app_with_recorder(Recorder::default())
}

pub fn app_with_recorder(recorder: Recorder) -> Router {
    Router::new()
        .route("/api/v1/{operation}", post(analyze))
        .with_state(recorder)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_recorder(listener: TcpListener, recorder: Recorder) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_recorder(recorder)).await
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn analyze(
    State(recorder): State<Recorder>,
    Path(operation): Path<String>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    if !OPERATIONS.contains(&operation.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let recorded = RecordedRequest {
        operation: operation.clone(),
        application_id: header(&headers, APPLICATION_ID_HEADER),
        application_key: header(&headers, APPLICATION_KEY_HEADER),
        accept: header(&headers, "accept"),
        fields,
    };
    recorder.write().await.push(recorded.clone());
    tracing::info!(operation = %operation, fields = recorded.fields.len(), "request");

    let authenticated = [&recorded.application_id, &recorded.application_key]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()));
    if !authenticated {
        return (StatusCode::FORBIDDEN, "Authentication parameters missing").into_response();
    }

    if let Some(url) = recorded.fields.get("url") {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return (
                StatusCode::BAD_REQUEST,
                r#"{"error" : "requirement failed: provided url is not valid."}"#,
            )
                .into_response();
        }
    }

    Json(canned(&operation, &recorded.fields)).into_response()
}

/// Response document for `operation`, echoing the analyzed input.
pub fn canned(operation: &str, fields: &HashMap<String, String>) -> Value {
    let text = fields.get("text").cloned().unwrap_or_default();
    let language = fields
        .get("language")
        .filter(|l| l.as_str() != "auto")
        .cloned()
        .unwrap_or_else(|| "en".to_string());

    match operation {
        "extract" => {
            let image = if fields.get("best_image").is_some_and(|v| v == "true") {
                "http://example.com/best.jpg"
            } else {
                ""
            };
            json!({
                "title": "Mock article",
                "article": "Body of the mock article.",
                "image": image,
                "author": "Jane Doe",
                "videos": [],
                "feeds": [],
            })
        }
        "classify" => json!({
            "text": text,
            "language": language,
            "categories": [{ "label": "sport - soccer", "code": "15054000", "confidence": 1.0 }],
        }),
        "concepts" => json!({
            "text": text,
            "language": language,
            "concepts": {
                "http://dbpedia.org/resource/Apple_Inc.": {
                    "surfaceForms": [{ "string": "Apple", "score": 0.99, "offset": 0 }],
                    "types": ["http://schema.org/Organization"],
                    "support": 1000
                }
            },
        }),
        "entities" => json!({
            "text": text,
            "entities": { "person": ["Barack Obama"], "location": ["Hawaii"] },
        }),
        "hashtags" => json!({
            "text": text,
            "language": language,
            "hashtags": ["#Mock", "#TextAnalysis"],
        }),
        "language" => json!({
            "text": text,
            "lang": language,
            "confidence": 0.99,
        }),
        "related" => {
            let count = fields
                .get("count")
                .and_then(|c| c.parse::<usize>().ok())
                .unwrap_or(2)
                .min(MAX_RELATED);
            let related: Vec<Value> = (0..count)
                .map(|i| json!({ "phrase": format!("related {i}"), "distance": 0.1 * (i + 1) as f64 }))
                .collect();
            json!({ "phrase": fields.get("phrase").cloned().unwrap_or_default(), "related": related })
        }
        "sentiment" => json!({
            "text": text,
            "subjectivity": "subjective",
            "subjectivity_confidence": 0.9,
            "polarity": "positive",
            "polarity_confidence": 0.8,
        }),
        "summarize" => json!({
            "text": text,
            "sentences": ["First key sentence.", "Second key sentence."],
        }),
        _ => json!({}),
    }
}
