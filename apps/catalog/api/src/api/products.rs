use axum::Router;
use domain_products::{ProductService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = ProductService::new(state.products.clone());
    handlers::router(service)
}
