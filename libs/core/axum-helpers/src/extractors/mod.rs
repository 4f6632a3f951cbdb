//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reduce boilerplate and keep rejections in the
//! standard [`ErrorResponse`](crate::ErrorResponse) shape.

pub mod id_path;
pub mod query_params;
pub mod validated_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use validated_json::ValidatedJson;
