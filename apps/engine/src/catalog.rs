//! Catalog loading and process-wide caches.
//!
//! Both catalogs are read once and cached for the process lifetime. A
//! load failure is absorbed into an empty catalog: lookups degrade to
//! "no results" instead of surfacing an error.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::resource::LearningResource;
use crate::resources::ResourceCatalog;

/// Knowledge-base file name under the data directory.
pub const KNOWLEDGE_BASE_FILE: &str = "chat.json";
/// Resource-catalog file name under the data directory.
pub const RESOURCE_CATALOG_FILE: &str = "resources.json";

static KNOWLEDGE_BASE: OnceLock<KnowledgeBase> = OnceLock::new();
static RESOURCE_CATALOG: OnceLock<ResourceCatalog> = OnceLock::new();

/// Reads and parses the knowledge base at `path`.
pub fn load_knowledge_entries(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading knowledge base at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing knowledge base at {}", path.display()))
}

/// Reads and parses the resource catalog at `path`.
pub fn load_learning_resources(path: &Path) -> Result<Vec<LearningResource>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading resource catalog at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing resource catalog at {}", path.display()))
}

/// Process-wide knowledge base, loaded once from the configured data
/// directory. Concurrent first callers all observe the same value.
pub fn shared_knowledge_base() -> &'static KnowledgeBase {
    KNOWLEDGE_BASE.get_or_init(|| {
        let config = Config::from_env();
        let path = config.data_dir.join(KNOWLEDGE_BASE_FILE);
        match load_knowledge_entries(&path) {
            Ok(entries) => {
                info!(count = entries.len(), "knowledge base loaded");
                KnowledgeBase::new(entries)
            }
            Err(err) => {
                error!("error loading knowledge base: {err:#}");
                KnowledgeBase::default()
            }
        }
    })
}

/// Process-wide resource catalog, loaded once. Same degradation rules.
pub fn shared_resource_catalog() -> &'static ResourceCatalog {
    RESOURCE_CATALOG.get_or_init(|| {
        let config = Config::from_env();
        let path = config.data_dir.join(RESOURCE_CATALOG_FILE);
        match load_learning_resources(&path) {
            Ok(resources) => {
                info!(count = resources.len(), "resource catalog loaded");
                ResourceCatalog::new(resources)
            }
            Err(err) => {
                error!("error loading resource catalog: {err:#}");
                ResourceCatalog::default()
            }
        }
    })
}
