use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initializes structured logging for embedders that don't bring their
/// own subscriber. `RUST_LOG` wins; otherwise the configured level is
/// applied to this crate only. Safe to call more than once.
pub fn init(config: &Config) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
