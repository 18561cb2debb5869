use dotenvy::dotenv;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

/// Storefront entry point
///
/// Loads `.env`, reads configuration, installs tracing and wires a session.
pub fn bootstrap() -> anyhow::Result<DependencyContainer> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = AppConfig::from_env();

    // 3. Initialize tracing with the configured filter
    config.logging.init_tracing();

    // 4. Wire dependencies
    let container = DependencyContainer::from_config(&config.catalog)?;

    tracing::info!(catalog = ?config.catalog.path, "Storefront session ready");
    Ok(container)
}
