use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, cors::CorsConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates the CORS layer for API services.
///
/// Configured origins are always used as an explicit allow-list with
/// credentials enabled. With no origins configured, production refuses to
/// start and development falls back to [`create_permissive_cors_layer`].
///
/// # Errors
/// Returns `InvalidInput` when an origin is not a valid header value, or when
/// no origins are configured in production.
pub fn create_cors_layer(config: &CorsConfig, environment: &Environment) -> io::Result<CorsLayer> {
    if !config.is_configured() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin (development only)");
        return Ok(create_permissive_cors_layer());
    }

    let allowed_origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(
        "CORS configured with allowed origins: {}",
        config.allowed_origins.join(",")
    );

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
