//! 요청 히스토리 저장 (HistoryStore 포트 구현).
//!
//! 히스토리 기록, 전체 삭제, 건수 조회.

use async_trait::async_trait;
use restbench_core::error::CoreError;
use restbench_core::models::history::HistoryEntry;
use restbench_core::ports::history_store::HistoryStore;
use tracing::{debug, info};

use super::SqliteStore;

#[async_trait]
impl HistoryStore for SqliteStore {
    async fn record(&self, entry: &HistoryEntry) -> Result<(), CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        conn.execute(
            "INSERT OR IGNORE INTO request_history (entry_id, method, url, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                entry.id.to_string(),
                entry.method,
                entry.url,
                entry.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| CoreError::Storage(format!("히스토리 저장 실패: {e}")))?;

        debug!("히스토리 기록: {} {}", entry.method, entry.url);
        Ok(())
    }

    async fn clear(&self) -> Result<bool, CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        let deleted = conn
            .execute("DELETE FROM request_history", [])
            .map_err(|e| CoreError::Storage(format!("히스토리 삭제 실패: {e}")))?;

        info!("히스토리 삭제: {deleted}건");
        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<u64, CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM request_history", [], |row| row.get(0))
            .map_err(|e| CoreError::Storage(format!("히스토리 건수 조회 실패: {e}")))?;

        Ok(count as u64)
    }
}

// ============================================================
// 테스트
// ============================================================
