//! 동기화 설정 저장 (SyncStore 포트 구현).
//!
//! 설정 키-값 upsert 및 조회. 값은 `"true"`/`"false"` 같은 문자열 리터럴.

use async_trait::async_trait;
use restbench_core::error::CoreError;
use restbench_core::ports::sync_store::SyncStore;
use rusqlite::OptionalExtension;
use tracing::debug;

use super::SqliteStore;

#[async_trait]
impl SyncStore for SqliteStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        conn.execute(
            "INSERT INTO sync_settings (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value],
        )
        .map_err(|e| CoreError::Storage(format!("설정 저장 실패: {e}")))?;

        debug!("설정 저장: {key}={value}");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        let value = conn
            .query_row(
                "SELECT value FROM sync_settings WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| CoreError::Storage(format!("설정 조회 실패: {e}")))?;

        Ok(value)
    }
}

// ============================================================
// 테스트
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get_roundtrip() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.set("history", "true").await.unwrap();

        let value = store.get("history").await.unwrap();
        assert_eq!(value, Some("true".to_string()));
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();

        let value = store.get("magic-vars-enabled").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.set("debug", "true").await.unwrap();
        store.set("debug", "false").await.unwrap();

        let value = store.get("debug").await.unwrap();
        assert_eq!(value, Some("false".to_string()));

        // upsert이므로 행은 하나만 존재
        let conn = store.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sync_settings WHERE key = 'debug'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
