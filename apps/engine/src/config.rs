use std::path::PathBuf;

/// Engine configuration loaded from environment variables. Every value
/// has a default: a bare environment never aborts the engine, it only
/// degrades it (empty catalogs, no provider keys).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `chat.json` and `resources.json`.
    pub data_dir: PathBuf,
    /// Provider API keys in rotation order. May be empty.
    pub api_keys: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            data_dir: std::env::var("FOCUS_DATA_DIR")
                .unwrap_or_else(|_| "data".into())
                .into(),
            api_keys: parse_api_keys(
                std::env::var("GEMINI_API_KEYS").ok().as_deref(),
                std::env::var("GEMINI_API_KEY").ok().as_deref(),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        }
    }
}

/// `GEMINI_API_KEYS` holds a comma-separated list and wins whenever it
/// is set, even if every segment is blank; `GEMINI_API_KEY` is the
/// single-key fallback.
fn parse_api_keys(multi: Option<&str>, single: Option<&str>) -> Vec<String> {
    if let Some(list) = multi.filter(|list| !list.is_empty()) {
        return list
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
    }
    single
        .filter(|key| !key.is_empty())
        .map(|key| vec![key.to_string()])
        .unwrap_or_default()
}
