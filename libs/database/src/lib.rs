//! PostgreSQL connectivity for the products service.
//!
//! Connection pooling and retry, migrations and readiness checks on top of
//! SeaORM. The migration files themselves live in the `migration` crate.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::default())).await?;
//! postgres::run_migrations::<Migrator>(&db, "products-api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
