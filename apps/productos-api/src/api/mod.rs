use axum::Router;

use crate::state::AppState;

mod health;
mod products;

/// Assemble all API routes. These are nested under `/api` by the server
/// scaffolding, so the catalog lives at `/api/productos`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/productos", products::router(state))
        .merge(health::router(state.clone()))
}
