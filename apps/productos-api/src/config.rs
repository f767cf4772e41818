use core_config::{AppInfo, FromEnv, app_info};
use core_config::server::ServerConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let postgres = PostgresConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            postgres,
        })
    }
}
