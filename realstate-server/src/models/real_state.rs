//! Real-estate listing record

use serde::{Deserialize, Serialize};

/// A real-estate listing.
///
/// Every field defaults to its zero value when absent from a request body.
/// `id` is assigned by the store and is left out of the JSON form while it
/// is still zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealState {
    #[serde(skip_serializing_if = "is_unassigned")]
    pub id: u64,
    pub registration: u64,
    pub address: String,
    pub size: u64,
    pub price: f64,
    pub state: String,
}

impl RealState {
    /// Return the same listing carrying `id`.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

fn is_unassigned(id: &u64) -> bool {
    *id == 0
}
