//! Application state management.
//!
//! The state is cloned for each handler; the product store clone shares
//! the same catalog.

use domain_products::InMemoryProductRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// In-memory product store, constructed once per process
    pub products: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let products = InMemoryProductRepository::from_config(&config.catalog);
        Self { config, products }
    }
}
