use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

pub mod health;
pub mod products;

/// Greeting served at the API root
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// API welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "Catalog",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Product Catalog API",
    })
}

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint that reads from the store.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
