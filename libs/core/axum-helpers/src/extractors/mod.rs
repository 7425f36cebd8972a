//! Custom extractors for Axum handlers.
//!
//! These reduce boilerplate and make rejections render through [`AppError`]
//! so clients always receive the standard error envelope.
//!
//! [`AppError`]: crate::errors::AppError

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
