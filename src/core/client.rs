//! Model Service Module
//!
//! Abstract boundary to the hosted model plus the AWS Bedrock runtime
//! implementation. The pipeline only sees the `ModelService` trait; client
//! construction, region selection, and credentials are setup concerns
//! handled here and injected once (`Arc<dyn ModelService>`), then reused
//! across requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::ServiceConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Authentication with the model service failed: {0}")]
    Auth(String),

    #[error("Model service is rate limiting requests")]
    RateLimit,

    #[error("Model service request timed out")]
    Timeout,

    #[error("Model service error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from model service: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

// ============================================================================
// Model Service Trait
// ============================================================================

/// Abstract text-generation and embedding boundary.
///
/// Both calls present a blocking request-response contract to the
/// pipeline: the caller suspends until a response or error is available.
/// Implementations own timeouts; the pipeline treats a timeout like any
/// other call failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Complete a prompt, returning raw model text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Retrieve the embedding vector for a text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

// ============================================================================
// Bedrock Service
// ============================================================================

/// AWS Bedrock runtime client (Nova Lite for completion, Titan for
/// embeddings) using bearer API-key auth.
pub struct BedrockService {
    base_url: String,
    api_key: String,
    config: ServiceConfig,
    client: Client,
}

impl BedrockService {
    pub fn new(api_key: String, config: ServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = format!(
            "https://bedrock-runtime.{}.amazonaws.com",
            config.region
        );

        Self {
            base_url,
            api_key,
            config,
            client,
        }
    }

    /// Override the endpoint base URL (used by tests against a local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn invoke_url(&self, model_id: &str) -> String {
        format!("{}/model/{}/invoke", self.base_url, model_id)
    }

    /// POST a model invocation, retrying rate-limited calls with
    /// exponential backoff (1s, 2s, 4s).
    async fn invoke(
        &self,
        model_id: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = self.invoke_url(model_id);
        let mut attempt = 0u32;

        loop {
            let resp = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        ServiceError::Timeout
                    } else {
                        ServiceError::Http(e)
                    }
                })?;

            let status = resp.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt + 1 < self.config.max_request_retries {
                    let wait = Duration::from_secs(1 << attempt);
                    log::warn!(
                        "Model service throttled request to {model_id}, retrying in {wait:?}"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    continue;
                }
                return Err(ServiceError::RateLimit);
            }

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                let text = resp.text().await.unwrap_or_default();
                return Err(ServiceError::Auth(text));
            }

            if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
                return Err(ServiceError::Timeout);
            }

            if !status.is_success() {
                let text = resp.text().await.unwrap_or_default();
                return Err(ServiceError::Api {
                    status: status.as_u16(),
                    message: text,
                });
            }

            return Ok(resp.json().await?);
        }
    }
}

#[async_trait]
impl ModelService for BedrockService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "messages": [
                {
                    "role": "user",
                    "content": [{"text": prompt}]
                }
            ],
            "inferenceConfig": {
                "max_new_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
                "top_p": 0.9
            }
        });

        let json = self.invoke(&self.config.completion_model, &body).await?;

        json["output"]["message"]["content"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ServiceError::InvalidResponse("Missing text in completion response".to_string())
            })
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = serde_json::json!({ "inputText": text });

        let json = self.invoke(&self.config.embedding_model, &body).await?;

        let values = json["embedding"].as_array().ok_or_else(|| {
            ServiceError::InvalidResponse("Missing embedding in response".to_string())
        })?;

        if values.is_empty() {
            return Err(ServiceError::InvalidResponse(
                "Embedding vector is empty".to_string(),
            ));
        }

        Ok(values
            .iter()
            .filter_map(|v| v.as_f64())
            .map(|v| v as f32)
            .collect())
    }
}
