//! Products Domain
//!
//! Catalog of products with create, read, update, delete and list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (axum + OpenAPI)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Controller  │  ← Caller-facing operations, resolves ids
//! └──────┬──────┘
//!        │ ProductCatalog
//! ┌──────▼──────┐
//! │   Service   │  ← DTO to Product mapping, not-found rules
//! └──────┬──────┘
//!        │ ProductRepository
//! ┌──────▼──────┐
//! │ Repository  │  ← In-memory or PostgreSQL (SeaORM)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     InMemoryProductRepository, ProductController, ProductService, handlers,
//! };
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router: axum::Router = handlers::router(ProductController::new(service));
//! ```

pub mod controller;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use controller::ProductController;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{Product, ProductDto};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::{ProductCatalog, ProductService};
