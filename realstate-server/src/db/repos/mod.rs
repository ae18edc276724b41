//! Repository implementations for database access

pub mod real_states;

pub use real_states::{PgRealStateRepository, RealStateRepository};
