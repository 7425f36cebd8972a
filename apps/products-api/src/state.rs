//! Application state management

use database::postgres::DatabaseConnection;
use domain_products::InMemoryProductRepository;

/// Where products are stored for this process.
#[derive(Clone)]
pub enum Storage {
    Postgres(DatabaseConnection),
    InMemory(InMemoryProductRepository),
}

/// Shared application state
///
/// Cloned per router; both storage variants share their pool or map.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub storage: Storage,
}
