//! Configuration for Products API

use core_config::{
    AppInfo, FromEnv, app_info, cors::CorsConfig, env_optional, env_parse, server::ServerConfig,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub cors: CorsConfig,
    /// `None` when `DATABASE_URL` is unset or empty; products are then kept in memory
    pub database: Option<PostgresConfig>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        let database = match env_optional("DATABASE_URL")? {
            Some(_) => Some(PostgresConfig::from_env()?),
            None => None,
        };

        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors,
            database,
            run_migrations,
        })
    }
}
