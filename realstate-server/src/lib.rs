//! realstate-server: HTTP CRUD service for real-estate listings
//!
//! Three thin layers, leaves first:
//! - [`db`]: `real_states` table access through a connection pool
//! - [`service`]: the update existence check and id assignment
//! - [`http`]: axum routes, JSON extraction and error bodies

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AppConfig, ConfigError, DatabaseConfig, RestConfig};
pub use error::RealStateError;
pub use models::RealState;
