//! Products Domain
//!
//! In-memory product catalog with search, pagination and CRUD over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Store contract (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, search criteria
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_sample_data();
//! let service = ProductService::new(repository);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod sample;
pub mod service;

// Re-export commonly used types
pub use config::CatalogConfig;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, PageQuery, Product, ProductSearch, UpdateProduct};
pub use pagination::Paginated;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use sample::sample_catalog;
pub use service::ProductService;
