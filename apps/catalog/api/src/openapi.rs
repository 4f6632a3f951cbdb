use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::welcome),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::WelcomeResponse)
    ),
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "In-memory product catalog with search, pagination and CRUD"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "API root")
    )
)]
pub struct ApiDoc;
