use axum_helpers::{create_cors_layer, create_permissive_cors_layer};
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_products::CatalogConfig;
use tower_http::cors::CorsLayer;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let catalog = CatalogConfig::from_env()?; // Seeds sample data unless disabled

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }

    /// CORS layer for the configured origins.
    ///
    /// Without `CORS_ALLOWED_ORIGIN`, development allows any origin and
    /// production refuses to start.
    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        let origins = &self.server.cors_allowed_origins;

        if origins.is_empty() {
            if self.environment.is_production() {
                eyre::bail!("CORS_ALLOWED_ORIGIN must be set in production");
            }
            tracing::warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
            return Ok(create_permissive_cors_layer());
        }

        Ok(create_cors_layer(origins.as_slice())?)
    }
}
