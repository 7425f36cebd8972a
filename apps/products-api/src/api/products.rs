//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductController, ProductService, handlers};

use crate::state::{AppState, Storage};

/// Create products router over the configured storage
pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::Postgres(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductController::new(ProductService::new(repository)))
        }
        Storage::InMemory(repository) => {
            handlers::router(ProductController::new(ProductService::new(repository.clone())))
        }
    }
}
