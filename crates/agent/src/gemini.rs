//! Gemini-backed insight source.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use stockpilot_core::config::InsightConfig;
use stockpilot_core::recommend::{Item, Recommendation};
use stockpilot_core::{InsightError, InsightSource};

use crate::prompt::insight_prompt;

/// Client for the Gemini `generateContent` endpoint.
///
/// One client is built at startup and shared across requests; the inner
/// HTTP client already pools connections.
pub struct GeminiInsightClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    max_retries: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiInsightClient {
    /// Build a client from config, or `None` when no API key is set.
    /// Callers fall back to disabled insights in that case.
    pub fn from_config(config: &InsightConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .ok()?;

        Some(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let mut last_error = InsightError("no generation attempt was made".to_string());
        for attempt in 0..=self.max_retries {
            match self.generate_once(&url, &body).await {
                Ok(text) => return Ok(text),
                Err(error) => {
                    debug!(event_name = "insight_attempt_failed", attempt, error = %error);
                    last_error = error;
                }
            }
        }
        Err(last_error)
    }

    async fn generate_once(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<String, InsightError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|error| InsightError(format!("request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError(format!("generation endpoint returned {status}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|error| InsightError(format!("malformed generation response: {error}")))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| InsightError("generation response contained no candidates".to_string()))
    }
}

#[async_trait]
impl InsightSource for GeminiInsightClient {
    async fn insights(
        &self,
        items: &[Item],
        recommendations: &[Recommendation],
    ) -> Result<Vec<String>, InsightError> {
        if recommendations.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = insight_prompt(items, recommendations);
        let text = self.generate(&prompt).await?;
        extract_insight_array(&text)
    }
}

/// Pull the JSON string array out of a model reply, tolerating markdown
/// code fences around it.
fn extract_insight_array(text: &str) -> Result<Vec<String>, InsightError> {
    let stripped = strip_code_fence(text);
    serde_json::from_str(stripped)
        .map_err(|error| InsightError(format!("insights were not a JSON string array: {error}")))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
