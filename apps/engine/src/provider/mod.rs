//! Boundary to the external text-generation provider.
//!
//! The engine never talks to a concrete AI SDK: callers hand in any
//! `TextGenerator`, and `RotatingGenerator` adds the multi-key quota
//! rotation the hosted deployment relies on.

use async_trait::async_trait;
use thiserror::Error;

pub mod rotation;

pub use rotation::RotatingGenerator;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Quota or rate limit exhausted for the active key.
    #[error("provider quota exhausted: {0}")]
    Quota(String),

    #[error("provider unavailable: {0}")]
    Outage(String),

    #[error("provider returned empty content")]
    EmptyContent,

    #[error("no provider API keys configured")]
    NoKeysConfigured,
}

/// Text-generation seam. One implementation per concrete model client;
/// the engine only ever sees the trait object.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Human-readable model label for meta blocks.
    fn label(&self) -> &str {
        "unknown"
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"profession\": \"QA-инженер\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"profession\": \"QA-инженер\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"profession\": \"QA-инженер\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"profession\": \"QA-инженер\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"profession\": \"QA-инженер\"}";
        assert_eq!(strip_json_fences(input), "{\"profession\": \"QA-инженер\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"a\": 1}";
        assert_eq!(strip_json_fences(input), "{\"a\": 1}");
    }
}
