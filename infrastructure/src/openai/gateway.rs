//! OpenAI-compatible LLM gateway
//!
//! Implements [`LlmGateway`] over `POST {api_base}/chat/completions` with a
//! bounded retry loop:
//!
//! ```text
//! attempt 1 ──ok──▶ Success
//!    │ HTTP != 200 / transport error
//!    ▼  (warn, sleep backoff)
//! attempt 2 ... attempt max_retries ──fail──▶ Failure(last error)
//! ```

use super::error::AttemptError;
use super::protocol::{ChatCompletionBody, error_body, message_content};
use crate::config::FileEndpointConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use solver_application::ports::llm_gateway::LlmGateway;
use solver_domain::{CompletionOutcome, CompletionRequest};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway to an OpenAI-style chat completions endpoint.
pub struct OpenAiGateway {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    backoff: Duration,
}

impl OpenAiGateway {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: None,
            model: model.into(),
            max_tokens: 2048,
            backoff: Duration::from_secs(1),
        }
    }

    /// Build from the `[endpoint]` config section.
    pub fn from_config(config: &FileEndpointConfig) -> Self {
        let gateway = Self::new(&config.api_base, &config.model)
            .with_max_tokens(config.max_tokens)
            .with_backoff(config.backoff());
        match &config.api_key {
            Some(key) => gateway.with_api_key(key),
            None => gateway,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Fixed delay between attempts
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn headers(&self) -> Result<HeaderMap, AttemptError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|e| {
                AttemptError::InvalidRequest(format!("invalid authorization header: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// One HTTP round trip.
    async fn attempt(&self, request: &CompletionRequest) -> Result<CompletionOutcome, AttemptError> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        let body = ChatCompletionBody::new(
            model,
            &request.system,
            &request.prompt,
            request.temperature,
            self.max_tokens,
        );

        let response = self
            .http
            .post(self.endpoint_url())
            .headers(self.headers()?)
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let raw = response.text().await?;

        if status != StatusCode::OK {
            return Err(AttemptError::Http {
                status: status.as_u16(),
                body: error_body(&raw),
            });
        }

        let payload: serde_json::Value =
            serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);
        let text = message_content(&payload);

        Ok(CompletionOutcome::Success {
            text,
            raw_payload: payload,
            http_status: status.as_u16(),
            headers,
        })
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        let mut last_error: Option<AttemptError> = None;

        for attempt in 1..=request.max_retries {
            debug!(
                "POST {} (attempt {}/{})",
                self.endpoint_url(),
                attempt,
                request.max_retries
            );

            match self.attempt(request).await {
                Ok(outcome) => return outcome,
                Err(e) => {
                    warn!("Attempt {} failed: {}", attempt, e);
                    let retryable = !matches!(e, AttemptError::InvalidRequest(_));
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }

            if attempt < request.max_retries {
                tokio::time::sleep(self.backoff).await;
            }
        }

        match last_error {
            Some(e) => CompletionOutcome::failure(e.to_string(), e.http_status()),
            None => CompletionOutcome::failure("no attempts were made (max_retries = 0)", None),
        }
    }
}
