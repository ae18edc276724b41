//! Test doubles for the repository and service traits

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::pool::StoreHealth;
use crate::db::repos::RealStateRepository;
use crate::error::{RealStateError, RealStateResult};
use crate::models::RealState;
use crate::service::RealStateService;

/// The listing used across tests
pub fn listing() -> RealState {
    RealState {
        registration: 987654321,
        address: "456 Elm St".into(),
        size: 200,
        price: 250000.5,
        state: "CA".into(),
        ..Default::default()
    }
}

/// In-memory repository with auto-increment ids
#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<BTreeMap<u64, RealState>>,
    next_id: Mutex<u64>,
    update_calls: AtomicUsize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `update` reached the store
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RealStateRepository for MemoryRepository {
    async fn create(&self, real_state: &RealState) -> RealStateResult<u64> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.rows
            .lock()
            .unwrap()
            .insert(id, real_state.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: u64) -> RealStateResult<RealState> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RealStateError::NotFound)
    }

    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let updated = real_state.with_id(id);
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            *row = updated.clone();
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> RealStateResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Repository whose store is always down
pub struct FailingRepository;

#[async_trait]
impl RealStateRepository for FailingRepository {
    async fn create(&self, _: &RealState) -> RealStateResult<u64> {
        Err(RealStateError::Internal(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _: u64) -> RealStateResult<RealState> {
        Err(RealStateError::Internal(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _: RealState, _: u64) -> RealStateResult<RealState> {
        Err(RealStateError::Internal(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _: u64) -> RealStateResult<()> {
        Err(RealStateError::Internal(sqlx::Error::PoolTimedOut))
    }
}

/// Service that fails with an error nobody classified
pub struct UnclassifiedService;

#[async_trait]
impl RealStateService for UnclassifiedService {
    async fn create(&self, _: RealState) -> RealStateResult<RealState> {
        Err(RealStateError::Unclassified("boom".into()))
    }

    async fn get(&self, _: u64) -> RealStateResult<RealState> {
        Err(RealStateError::Unclassified("boom".into()))
    }

    async fn update(&self, _: RealState, _: u64) -> RealStateResult<RealState> {
        Err(RealStateError::Unclassified("boom".into()))
    }

    async fn delete(&self, _: u64) -> RealStateResult<()> {
        Err(RealStateError::Unclassified("boom".into()))
    }
}

/// Service that records whether it was reached
#[derive(Default)]
pub struct CountingService {
    calls: AtomicUsize,
}

impl CountingService {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RealStateService for CountingService {
    async fn create(&self, real_state: RealState) -> RealStateResult<RealState> {
        self.hit();
        Ok(real_state.with_id(1))
    }

    async fn get(&self, id: u64) -> RealStateResult<RealState> {
        self.hit();
        Ok(listing().with_id(id))
    }

    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState> {
        self.hit();
        Ok(real_state.with_id(id))
    }

    async fn delete(&self, _: u64) -> RealStateResult<()> {
        self.hit();
        Ok(())
    }
}

/// Repository whose reads fail while writes are counted
#[derive(Default)]
pub struct BrokenReadRepository {
    update_calls: AtomicUsize,
}

impl BrokenReadRepository {
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RealStateRepository for BrokenReadRepository {
    async fn create(&self, _: &RealState) -> RealStateResult<u64> {
        Ok(1)
    }

    async fn get(&self, _: u64) -> RealStateResult<RealState> {
        Err(RealStateError::Internal(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Ok(real_state.with_id(id))
    }

    async fn delete(&self, _: u64) -> RealStateResult<()> {
        Ok(())
    }
}

/// Store that always answers
pub struct StoreUp;

#[async_trait]
impl StoreHealth for StoreUp {
    async fn check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Store that never answers
pub struct StoreDown;

#[async_trait]
impl StoreHealth for StoreDown {
    async fn check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
