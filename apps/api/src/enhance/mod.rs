//! Content enhancement backend and its heuristic stand-in.
//!
//! `Enhancer` is the boundary: `improve(field, text) -> text`, async and
//! fallible. `HeuristicEnhancer` waits a fixed latency and then picks
//! between canned texts deterministically.

pub mod orchestrator;
pub mod prompts;
pub mod target;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::enhance::prompts::{
    DESCRIPTION_IMPROVEMENT, GENERIC_PREFIX, GENERIC_SUFFIX, SOFTWARE_IMPROVEMENT,
    SOFTWARE_KEYWORDS, SUMMARY_IMPROVEMENT,
};

pub use orchestrator::{EnhancementSession, EnhancementStatus, StartOutcome, TransitionError};
pub use target::EnhanceTarget;

/// Simulated round trip of the heuristic backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("enhancement backend failed: {0}")]
    Backend(String),

    #[error("enhancement timed out after {0:?}")]
    TimedOut(Duration),

    #[error("enhancement was cancelled")]
    Cancelled,
}

#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn improve(&self, field: &str, content: &str) -> Result<String, EnhanceError>;
}

/// Deterministic stub backend.
///
/// Selection, in order:
/// 1. content mentions "software" or "developer" (any case) → software text
/// 2. field is `summary` or `description` → that field's canned text
/// 3. otherwise → `"Enhanced version: " + content + suffix`
#[derive(Debug, Clone)]
pub struct HeuristicEnhancer {
    latency: Duration,
}

impl HeuristicEnhancer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for HeuristicEnhancer {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Enhancer for HeuristicEnhancer {
    async fn improve(&self, field: &str, content: &str) -> Result<String, EnhanceError> {
        tokio::time::sleep(self.latency).await;
        let improved = heuristic_improvement(field, content);
        debug!(
            "Heuristic enhancement for '{field}': {} chars in, {} chars out",
            content.len(),
            improved.len()
        );
        Ok(improved)
    }
}

pub fn heuristic_improvement(field: &str, content: &str) -> String {
    let lower = content.to_lowercase();
    if SOFTWARE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return SOFTWARE_IMPROVEMENT.to_string();
    }

    match field {
        "summary" => SUMMARY_IMPROVEMENT.to_string(),
        "description" => DESCRIPTION_IMPROVEMENT.to_string(),
        _ => format!("{GENERIC_PREFIX}{content}{GENERIC_SUFFIX}"),
    }
}
