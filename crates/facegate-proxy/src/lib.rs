//! Query proxy — forwards one question to the downstream inference service
//! and relays its answer.

use facegate_core::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Expected shape of the inference service's reply.
#[derive(Debug, Deserialize)]
struct AnswerBody {
    answer: Option<String>,
}

/// Client for the downstream inference service. One instance is shared by
/// all requests; each call is a single attempt with no retries.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward one query and return the downstream `answer` field verbatim.
    ///
    /// Transport failures, non-2xx statuses, and replies without a string
    /// `answer` all map to [`Error::Proxy`]; the detail is meant for logs,
    /// not for the caller-facing message.
    pub async fn ask(&self, query: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, "Forwarding query to inference service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| Error::Proxy(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Proxy(format!(
                "inference service returned {}: {}",
                status, body
            )));
        }

        let body: AnswerBody = response
            .json()
            .await
            .map_err(|e| Error::Proxy(format!("malformed inference response: {}", e)))?;

        body.answer
            .ok_or_else(|| Error::Proxy("inference response missing 'answer' field".into()))
    }
}
