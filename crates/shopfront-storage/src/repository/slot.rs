//! # Slot Repository
//!
//! SQLite-backed [`SlotStorage`]. Each slot is one row of `storage_slots`.
//!
//! ## Write Semantics
//! ```text
//! INSERT INTO storage_slots (key, value, updated_at) VALUES (?, ?, ?)
//! ON CONFLICT(key) DO UPDATE SET value = excluded.value, ...
//!
//! • One statement, so a write is atomic: a reader sees the old value or
//!   the new one, never a mix
//! • No version check: the last write wins
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageResult;
use crate::slot::SlotStorage;

/// Repository for slot rows.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// When the slot was last written, if ever.
    pub async fn updated_at(&self, key: &str) -> StorageResult<Option<DateTime<Utc>>> {
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT updated_at FROM storage_slots WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated_at)
    }

    /// Deletes a slot.
    ///
    /// ## Returns
    /// `true` if a row was removed.
    pub async fn delete(&self, key: &str) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM storage_slots WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SlotStorage for SlotRepository {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let value = sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM storage_slots WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key, found = value.is_some(), "Read storage slot");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(key, bytes = value.len(), "Wrote storage slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> (Database, SlotRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.slots();
        (db, repo)
    }

    #[tokio::test]
    async fn test_get_missing_slot() {
        let (_db, repo) = repo().await;

        assert_eq!(repo.get("shop-state:v1").await.unwrap(), None);
        assert_eq!(repo.updated_at("shop-state:v1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let (_db, repo) = repo().await;

        repo.set("shop-state:v1", br#"{"cart":{"a":2},"favorites":[]}"#)
            .await
            .unwrap();

        let raw = repo.get("shop-state:v1").await.unwrap().unwrap();
        assert_eq!(raw, br#"{"cart":{"a":2},"favorites":[]}"#.to_vec());
        assert!(repo.updated_at("shop-state:v1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_set_overwrites_whole_value() {
        let (_db, repo) = repo().await;

        repo.set("k", b"a much longer first value").await.unwrap();
        repo.set("k", b"short").await.unwrap();

        assert_eq!(repo.get("k").await.unwrap(), Some(b"short".to_vec()));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let (_db, repo) = repo().await;

        repo.set("shop-state:v1", b"one").await.unwrap();
        repo.set("shop-state:v2", b"two").await.unwrap();

        assert!(repo.delete("shop-state:v1").await.unwrap());
        assert!(!repo.delete("shop-state:v1").await.unwrap());
        assert_eq!(repo.get("shop-state:v1").await.unwrap(), None);
        assert_eq!(repo.get("shop-state:v2").await.unwrap(), Some(b"two".to_vec()));
    }

    #[tokio::test]
    async fn test_closed_pool_fails_write() {
        let (db, repo) = repo().await;
        db.close().await;

        let err = repo.set("k", b"v").await.unwrap_err();
        assert!(matches!(err, StorageError::ConnectionFailed(_)));
    }
}
