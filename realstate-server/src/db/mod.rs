//! Database layer - connection pool and repositories
//!
//! - One statement per operation, no transactions
//! - Every value is bound as a parameter, never interpolated

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
