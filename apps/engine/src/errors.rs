#![allow(dead_code)]

use thiserror::Error;

use crate::provider::ProviderError;

/// Engine-level failures. Matcher and selector lookups stay total and
/// never produce these; only the provider-backed flows do.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("invalid provider response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
