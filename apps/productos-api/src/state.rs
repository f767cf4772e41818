use database::postgres::DatabaseConnection;

use crate::config::Config;

/// Shared application state, cloned into each router.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
