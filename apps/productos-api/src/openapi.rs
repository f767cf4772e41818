//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Productos API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Productos API",
        version = "0.1.0",
        description = "API REST para la gestión de un catálogo de productos",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/productos", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "productos", description = "Operaciones sobre el catálogo de productos")
    )
)]
pub struct ApiDoc;
