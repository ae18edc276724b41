//! Real-state repository
//!
//! Maps driver outcomes onto [`RealStateError`]:
//! - get: no row → `NotFound`
//! - everything else that fails → `Internal`, logged with the driver error
//!
//! PostgreSQL has no unsigned integers. u64 values are stored in BIGINT
//! columns by reinterpreting their bits, so the full u64 range survives a
//! round trip; values above `i64::MAX` read back as negative numbers in SQL.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::error::{RealStateError, RealStateResult};
use crate::models::RealState;

const INSERT_REAL_STATE: &str = r#"
    INSERT INTO real_states
        (real_state_registration, real_state_address, real_state_size, real_state_price, real_state_state)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING real_state_id
"#;

const SELECT_REAL_STATE: &str = r#"
    SELECT real_state_id, real_state_registration, real_state_address,
           real_state_size, real_state_price, real_state_state
    FROM real_states
    WHERE real_state_id = $1
"#;

const UPDATE_REAL_STATE: &str = r#"
    UPDATE real_states
    SET real_state_registration = $1,
        real_state_address = $2,
        real_state_size = $3,
        real_state_price = $4,
        real_state_state = $5
    WHERE real_state_id = $6
"#;

const DELETE_REAL_STATE: &str = "DELETE FROM real_states WHERE real_state_id = $1";

/// Storage contract for real-state rows.
#[async_trait]
pub trait RealStateRepository: Send + Sync {
    /// Insert every field except the id and return the generated id.
    async fn create(&self, real_state: &RealState) -> RealStateResult<u64>;

    async fn get(&self, id: u64) -> RealStateResult<RealState>;

    /// Overwrite every field except the id. Does not check that the row exists.
    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState>;

    /// Remove the row. A missing row is not an error.
    async fn delete(&self, id: u64) -> RealStateResult<()>;
}

/// Row shape of the `real_states` table
#[derive(Debug, FromRow)]
struct RealStateRow {
    real_state_id: i64,
    real_state_registration: i64,
    real_state_address: String,
    real_state_size: i64,
    real_state_price: f64,
    real_state_state: String,
}

impl From<RealStateRow> for RealState {
    fn from(row: RealStateRow) -> Self {
        Self {
            id: from_column(row.real_state_id),
            registration: from_column(row.real_state_registration),
            address: row.real_state_address,
            size: from_column(row.real_state_size),
            price: row.real_state_price,
            state: row.real_state_state,
        }
    }
}

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgRealStateRepository {
    pool: PgPool,
}

impl PgRealStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RealStateRepository for PgRealStateRepository {
    async fn create(&self, real_state: &RealState) -> RealStateResult<u64> {
        let id = sqlx::query_scalar::<_, i64>(INSERT_REAL_STATE)
            .bind(to_column(real_state.registration))
            .bind(real_state.address.as_str())
            .bind(to_column(real_state.size))
            .bind(real_state.price)
            .bind(real_state.state.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal("create", e))?;

        Ok(from_column(id))
    }

    async fn get(&self, id: u64) -> RealStateResult<RealState> {
        let row = sqlx::query_as::<_, RealStateRow>(SELECT_REAL_STATE)
            .bind(to_column(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal("get", e))?
            .ok_or(RealStateError::NotFound)?;

        Ok(RealState::from(row))
    }

    async fn update(&self, real_state: RealState, id: u64) -> RealStateResult<RealState> {
        sqlx::query(UPDATE_REAL_STATE)
            .bind(to_column(real_state.registration))
            .bind(real_state.address.as_str())
            .bind(to_column(real_state.size))
            .bind(real_state.price)
            .bind(real_state.state.as_str())
            .bind(to_column(id))
            .execute(&self.pool)
            .await
            .map_err(|e| internal("update", e))?;

        Ok(real_state.with_id(id))
    }

    async fn delete(&self, id: u64) -> RealStateResult<()> {
        sqlx::query(DELETE_REAL_STATE)
            .bind(to_column(id))
            .execute(&self.pool)
            .await
            .map_err(|e| internal("delete", e))?;

        Ok(())
    }
}

fn internal(operation: &'static str, e: sqlx::Error) -> RealStateError {
    tracing::error!(operation, error = %e, "real_states statement failed");
    RealStateError::Internal(e)
}

fn to_column(value: u64) -> i64 {
    value as i64
}

fn from_column(value: i64) -> u64 {
    value as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_conversion_keeps_full_u64_range() {
        assert_eq!(to_column(42), 42);
        assert_eq!(to_column(u64::MAX), -1);
        for value in [0, 1, i64::MAX as u64, 1 << 63, u64::MAX] {
            assert_eq!(from_column(to_column(value)), value);
        }
    }

    #[test]
    fn high_values_survive_row_conversion() {
        let row = RealStateRow {
            real_state_id: 1,
            real_state_registration: to_column(u64::MAX),
            real_state_address: String::new(),
            real_state_size: to_column(1 << 63),
            real_state_price: 0.0,
            real_state_state: String::new(),
        };

        let listing = RealState::from(row);
        assert_eq!(listing.registration, u64::MAX);
        assert_eq!(listing.size, 1 << 63);
    }

    #[test]
    fn row_converts_to_listing() {
        let row = RealStateRow {
            real_state_id: 7,
            real_state_registration: 987654321,
            real_state_address: "456 Elm St".into(),
            real_state_size: 200,
            real_state_price: 250000.5,
            real_state_state: "CA".into(),
        };

        let listing = RealState::from(row);
        assert_eq!(listing.id, 7);
        assert_eq!(listing.registration, 987654321);
        assert_eq!(listing.state, "CA");
    }

    // Integration tests - run against a database holding sql/schema.sql
    // DATABASE_URL=postgres://... cargo test -p realstate-server -- --ignored

    async fn repo() -> PgRealStateRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        PgRealStateRepository::new(pool)
    }

    fn listing() -> RealState {
        RealState {
            registration: 987654321,
            address: "456 Elm St".into(),
            size: 200,
            price: 250000.5,
            state: "CA".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let repo = repo().await;
        let id = repo.create(&listing()).await.unwrap();
        assert!(id > 0);

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored, listing().with_id(id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_is_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.get(i64::MAX as u64).await,
            Err(RealStateError::NotFound)
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn max_u64_fields_round_trip() {
        let repo = repo().await;
        let huge = RealState {
            registration: u64::MAX,
            size: 1 << 63,
            ..listing()
        };

        let id = repo.create(&huge).await.unwrap();
        assert_eq!(repo.get(id).await.unwrap(), huge.clone().with_id(id));

        let bumped = RealState {
            size: u64::MAX,
            ..huge
        };
        repo.update(bumped.clone(), id).await.unwrap();
        assert_eq!(repo.get(id).await.unwrap(), bumped.with_id(id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn id_above_i64_max_is_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.get(u64::MAX).await,
            Err(RealStateError::NotFound)
        ));
        repo.delete(u64::MAX).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_fields() {
        let repo = repo().await;
        let id = repo.create(&listing()).await.unwrap();

        let changed = RealState {
            price: 199999.0,
            state: "NV".into(),
            ..listing()
        };
        let updated = repo.update(changed.clone(), id).await.unwrap();
        assert_eq!(updated, changed.with_id(id));
        assert_eq!(repo.get(id).await.unwrap().state, "NV");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_is_idempotent() {
        let repo = repo().await;
        let id = repo.create(&listing()).await.unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(matches!(repo.get(id).await, Err(RealStateError::NotFound)));
    }
}
