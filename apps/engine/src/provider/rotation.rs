//! Multi-key quota rotation over the `TextGenerator` seam.

use async_trait::async_trait;
use tracing::warn;

use crate::provider::{ProviderError, TextGenerator};

/// Walks a ring of generators (one per configured API key) and advances
/// to the next only on a quota error. Any other failure propagates
/// immediately; exhausting the ring reports the final quota error.
pub struct RotatingGenerator {
    inner: Vec<Box<dyn TextGenerator>>,
}

impl RotatingGenerator {
    pub fn new(inner: Vec<Box<dyn TextGenerator>>) -> Self {
        Self { inner }
    }

    pub fn key_count(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl TextGenerator for RotatingGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.inner.is_empty() {
            return Err(ProviderError::NoKeysConfigured);
        }

        let total = self.inner.len();
        let mut last_quota = None;
        for (index, generator) in self.inner.iter().enumerate() {
            match generator.generate_text(prompt).await {
                Ok(text) => return Ok(text),
                Err(ProviderError::Quota(reason)) => {
                    warn!(key = index + 1, total, %reason, "provider key quota exceeded");
                    last_quota = Some(ProviderError::Quota(reason));
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_quota.unwrap_or(ProviderError::NoKeysConfigured))
    }

    fn label(&self) -> &str {
        self.inner.first().map(|g| g.label()).unwrap_or("unknown")
    }
}
