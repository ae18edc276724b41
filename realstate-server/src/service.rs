//! Real-state service
//!
//! Orchestration between the HTTP layer and the repository. Errors from the
//! repository are returned as-is.

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::repos::RealStateRepository;
use crate::error::RealStateResult;
use crate::models::RealState;

/// Operations the HTTP layer calls
#[async_trait]
pub trait RealStateService: Send + Sync {
    async fn create(&self, real_state: RealState) -> RealStateResult<RealState>;

    async fn get(&self, id: u64) -> RealStateResult<RealState>;

    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState>;

    async fn delete(&self, id: u64) -> RealStateResult<()>;
}

/// Service over any [`RealStateRepository`]
#[derive(Clone)]
pub struct RealStateSvc {
    repository: Arc<dyn RealStateRepository>,
}

impl RealStateSvc {
    pub fn new(repository: Arc<dyn RealStateRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RealStateService for RealStateSvc {
    /// Store the listing and return it with its generated id. Any id in the
    /// input is replaced.
    async fn create(&self, real_state: RealState) -> RealStateResult<RealState> {
        let id = self.repository.create(&real_state).await?;
        tracing::debug!(id, "real state created");
        Ok(real_state.with_id(id))
    }

    async fn get(&self, id: u64) -> RealStateResult<RealState> {
        self.repository.get(id).await
    }

    /// Overwrite an existing listing. The row must exist: the read fails
    /// with `NotFound` before any write is issued.
    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState> {
        self.repository.get(id).await?;
        self.repository.update(real_state, id).await
    }

    /// Delete without an existence check; removing a missing id succeeds.
    async fn delete(&self, id: u64) -> RealStateResult<()> {
        self.repository.delete(id).await
    }
}
