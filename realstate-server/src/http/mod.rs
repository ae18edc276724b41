//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing and a per-request timeout
//! - CORS (localhost only by default)
//! - Graceful shutdown
//! - JSON error bodies

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody, ErrorCode};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
