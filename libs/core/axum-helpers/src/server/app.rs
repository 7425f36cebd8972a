use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI document at `/api-docs/openapi.json`
/// - ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and Scalar (`/scalar`) viewers
/// - API routes nested under `/api`
/// - Tracing, security headers, CORS and response compression
/// - JSON 404 and 405 fallbacks
///
/// Health endpoints are not included; merge [`health_router`] and the app's
/// own readiness route into the result.
///
/// Domain routers are expected to carry their state already, so `apis` is a
/// plain `Router`.
///
/// [`health_router`]: super::health::health_router
///
/// # Example
/// ```ignore
/// use axum_helpers::http::create_cors_layer;
/// use axum_helpers::server::create_router;
///
/// let api_routes = Router::new().nest("/products", domain_products::router(controller));
/// let cors = create_cors_layer(&config.cors, &config.environment)?;
/// let router = create_router::<ApiDoc>(api_routes, cors);
/// ```
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", T::openapi()).path("/rapidoc"))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis.method_not_allowed_fallback(method_not_allowed))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        // gzip, br, deflate and zstd based on Accept-Encoding
        .layer(CompressionLayer::new())
}

/// Serves `router` until SIGINT or SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained by axum's graceful shutdown. The cleanup
/// future (closing pools and similar) is bounded by `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener cannot bind to the configured address or
/// the server fails while running.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        signal_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>(apis, CorsLayer::permissive())
    }

    async fn get_status(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_api() {
        assert_eq!(get_status("/api/ping").await, StatusCode::OK);
        assert_eq!(get_status("/ping").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        assert_eq!(get_status("/api-docs/openapi.json").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_error() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
