//! Name Generator Module
//!
//! Invokes the model with a generation prompt, normalizes the raw output
//! into a candidate name, and retries on empty or malformed responses up
//! to a fixed bound. Never returns an empty string: exhaustion surfaces as
//! a `GenerationError` for the orchestrator to handle via fallback.

use std::sync::Arc;

use thiserror::Error;

use crate::core::client::{ModelService, ServiceError};

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("model call failed after {attempts} attempts: {source}")]
    Service {
        attempts: u32,
        #[source]
        source: ServiceError,
    },

    #[error("no usable name after {attempts} attempts: {reason}")]
    Malformed { attempts: u32, reason: String },
}

/// Generates candidate elf names from a prompt
pub struct NameGenerator {
    service: Arc<dyn ModelService>,
    max_attempts: u32,
}

impl NameGenerator {
    pub fn new(service: Arc<dyn ModelService>, max_attempts: u32) -> Self {
        Self {
            service,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generate one candidate name for the given prompt.
    ///
    /// The same prompt is reused across retries; variation comes from the
    /// model, not from prompt mutation. A response with more than 3 words
    /// on the final attempt is repaired by keeping the first 3; anything
    /// shorter than 2 words is never returned.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut last_reason = String::new();

        for attempt in 1..=self.max_attempts {
            let raw = match self.service.complete(prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    if attempt == self.max_attempts {
                        return Err(GenerationError::Service {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    log::warn!("Name generation attempt {attempt} failed: {e}");
                    continue;
                }
            };

            let name = normalize_candidate(&raw);

            if name.is_empty() {
                last_reason = "generated name is empty".to_string();
                log::debug!("Attempt {attempt}: empty response");
                continue;
            }

            let words = name.split_whitespace().count();
            match words {
                2..=3 => return Ok(name),
                _ if words > 3 && attempt == self.max_attempts => {
                    // Light local repair instead of failing the whole run
                    let repaired = name
                        .split_whitespace()
                        .take(3)
                        .collect::<Vec<_>>()
                        .join(" ");
                    log::debug!("Truncated {words}-word candidate to \"{repaired}\"");
                    return Ok(repaired);
                }
                _ => {
                    last_reason = format!("generated name has {words} words (expected 2-3)");
                    log::debug!("Attempt {attempt}: {last_reason}");
                }
            }
        }

        Err(GenerationError::Malformed {
            attempts: self.max_attempts,
            reason: last_reason,
        })
    }
}

/// Normalize raw model output into a candidate name: keep the first
/// non-empty line, strip surrounding quotes and punctuation, collapse
/// internal whitespace.
fn normalize_candidate(raw: &str) -> String {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    let stripped =
        line.trim_matches(|c: char| c.is_whitespace() || "\"'`*.,!?:;“”‘’".contains(c));

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
