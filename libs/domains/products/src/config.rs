use core_config::{env_parse, ConfigError, FromEnv};

/// Catalog store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Seed the demo catalog on startup
    pub seed_sample_data: bool,
    /// Upper bound applied to page sizes
    pub max_page_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            max_page_limit: 100,
        }
    }
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let seed_sample_data = env_parse("CATALOG_SEED_SAMPLE_DATA", defaults.seed_sample_data)?;
        let max_page_limit = env_parse("CATALOG_MAX_PAGE_LIMIT", defaults.max_page_limit)?;

        if max_page_limit == 0 {
            return Err(ConfigError::ParseError {
                key: "CATALOG_MAX_PAGE_LIMIT".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            seed_sample_data,
            max_page_limit,
        })
    }
}
