use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    ///
    /// Environment variables:
    /// - RUST_LOG: `tracing_subscriber` filter directives (default: "info")
    pub fn from_env() -> Self {
        let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self { filter }
    }

    /// Filter built from the directives, falling back to "info" when they do not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }

    /// Installs the global subscriber. Later calls keep the first one.
    pub fn init_tracing(&self) {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .try_init();

        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}
