use super::{catalog_config::CatalogConfig, logging_config::LoggingConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            logging: LoggingConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
