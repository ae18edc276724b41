//! Domain models

pub mod real_state;

pub use real_state::RealState;
