//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::{create_cors_layer, create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Complete application: API, docs, middleware, `/health` and `/ready`
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let cors = create_cors_layer(&state.config.cors, &state.config.environment)?;

    Ok(create_router::<ApiDoc>(routes(state), cors)
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone())))
}
