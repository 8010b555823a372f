//! Remote summarizer — the single point of entry for abstractive summarization calls.
//!
//! No other module may call the inference endpoint directly. Every failure mode
//! is reported as a `SummarizerError` and the caller falls back to the
//! rule-based generator; nothing here bubbles up to a handler.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
/// Characters of resume text sent to the model.
pub const MAX_INPUT_CHARS: usize = 2000;
const MAX_LENGTH: u32 = 150;
const MIN_LENGTH: u32 = 40;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("summarizer API key is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("summarizer timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("summarizer returned an empty summary")]
    Empty,
}

/// Anything that can turn resume text into a short abstractive summary.
///
/// Carried in `AppState` as `Arc<dyn Summarizer>` so tests can swap in a stub.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError>;
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Debug, Serialize)]
struct SummarizeParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

/// The inference API answers with either a bare object or a one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummarizeResponse {
    List(Vec<SummaryItem>),
    Single(SummaryItem),
}

impl SummarizeResponse {
    fn into_text(self) -> Option<String> {
        match self {
            SummarizeResponse::List(items) => items.into_iter().next().map(|i| i.summary_text),
            SummarizeResponse::Single(item) => Some(item.summary_text),
        }
    }
}

/// Hugging Face inference client for a BART-style summarization model.
#[derive(Clone)]
pub struct HuggingFaceSummarizer {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HuggingFaceSummarizer {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            timeout,
        })
    }

    async fn request(&self, api_key: &str, text: &str) -> Result<String, SummarizerError> {
        let body = SummarizeRequest {
            inputs: truncate_chars(text, MAX_INPUT_CHARS),
            parameters: SummarizeParameters {
                max_length: MAX_LENGTH,
                min_length: MIN_LENGTH,
                do_sample: false,
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let raw = response.text().await?;
        let parsed: SummarizeResponse = serde_json::from_str(&raw)
            .map_err(|e| SummarizerError::Malformed(e.to_string()))?;
        let summary = parsed
            .into_text()
            .ok_or_else(|| SummarizerError::Malformed("empty result list".to_string()))?;

        if summary.trim().is_empty() {
            return Err(SummarizerError::Empty);
        }

        debug!("Summarizer returned {} chars", summary.len());
        Ok(summary)
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummarizerError::NotConfigured)?;

        // The client timeout covers the request; this also bounds body reads.
        match tokio::time::timeout(self.timeout, self.request(api_key, text)).await {
            Ok(result) => result,
            Err(_) => Err(SummarizerError::Timeout(self.timeout)),
        }
    }
}

/// Returns at most `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serves `router` on an ephemeral local port and returns its URL.
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/summarize")
    }

    fn client(url: String, timeout: Duration) -> HuggingFaceSummarizer {
        HuggingFaceSummarizer::new(url, Some("test-key".to_string()), timeout).unwrap()
    }

    #[test]
    fn test_truncate_chars_short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_chars_respects_multibyte() {
        let text = "é".repeat(5);
        assert_eq!(truncate_chars(&text, 3), "ééé");
    }

    #[test]
    fn test_response_accepts_list_and_object_shapes() {
        let list: SummarizeResponse =
            serde_json::from_str(r#"[{"summary_text": "from list"}]"#).unwrap();
        assert_eq!(list.into_text().as_deref(), Some("from list"));

        let single: SummarizeResponse =
            serde_json::from_str(r#"{"summary_text": "from object"}"#).unwrap();
        assert_eq!(single.into_text().as_deref(), Some("from object"));

        let empty: SummarizeResponse = serde_json::from_str("[]").unwrap();
        assert!(empty.into_text().is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let body = SummarizeRequest {
            inputs: "text",
            parameters: SummarizeParameters {
                max_length: MAX_LENGTH,
                min_length: MIN_LENGTH,
                do_sample: false,
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "inputs": "text",
                "parameters": {"max_length": 150, "min_length": 40, "do_sample": false}
            })
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let summarizer = HuggingFaceSummarizer::new(
            "http://127.0.0.1:9/unused".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        let err = summarizer.summarize("text").await.unwrap_err();
        assert!(matches!(err, SummarizerError::NotConfigured));
    }

    #[tokio::test]
    async fn test_list_response_success_and_input_truncated() {
        let router = Router::new().route(
            "/summarize",
            post(|Json(body): Json<Value>| async move {
                let inputs = body["inputs"].as_str().unwrap_or_default();
                Json(json!([{ "summary_text": format!("len={}", inputs.chars().count()) }]))
            }),
        );
        let url = spawn_server(router).await;

        let text = "x".repeat(5000);
        let summary = client(url, Duration::from_secs(5))
            .summarize(&text)
            .await
            .unwrap();
        assert_eq!(summary, "len=2000");
    }

    #[tokio::test]
    async fn test_object_response_success() {
        let router = Router::new().route(
            "/summarize",
            post(|| async { Json(json!({ "summary_text": "A seasoned engineer." })) }),
        );
        let url = spawn_server(router).await;

        let summary = client(url, Duration::from_secs(5))
            .summarize("resume")
            .await
            .unwrap();
        assert_eq!(summary, "A seasoned engineer.");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/summarize",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        );
        let url = spawn_server(router).await;

        let err = client(url, Duration::from_secs(5))
            .summarize("resume")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let router = Router::new().route(
            "/summarize",
            post(|| async { Json(json!({ "generated_text": "wrong field" })) }),
        );
        let url = spawn_server(router).await;

        let err = client(url, Duration::from_secs(5))
            .summarize("resume")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_blank_summary_is_unavailable() {
        let router = Router::new().route(
            "/summarize",
            post(|| async { Json(json!([{ "summary_text": "   " }])) }),
        );
        let url = spawn_server(router).await;

        let err = client(url, Duration::from_secs(5))
            .summarize("resume")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Empty));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let router = Router::new().route(
            "/summarize",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([{ "summary_text": "too late" }]))
            }),
        );
        let url = spawn_server(router).await;

        let err = client(url, Duration::from_millis(200))
            .summarize("resume")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::Timeout(_) | SummarizerError::Http(_)
        ));
    }
}
