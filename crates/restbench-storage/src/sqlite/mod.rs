//! SQLite 저장소 어댑터.
//!
//! `SyncStore` + `HistoryStore` 포트 구현.
//!
//! # 모듈 구조
//! - `settings`: 동기화 설정 key-value 저장 (SyncStore 포트)
//! - `history`: 요청 히스토리 저장 (HistoryStore 포트)

mod history;
mod settings;

use restbench_core::error::CoreError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use crate::migration;

/// SQLite 저장소 — `SyncStore` + `HistoryStore` 포트 구현
#[derive(Debug)]
pub struct SqliteStore {
    pub(super) conn: Mutex<Connection>,
}

impl SqliteStore {
    /// 파일 기반 SQLite 저장소 생성
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path)
            .map_err(|e| CoreError::Internal(format!("SQLite 열기 실패: {e}")))?;

        // 성능 최적화 PRAGMA 설정
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA busy_timeout=5000;
            PRAGMA temp_store=MEMORY;
            ",
        )
        .map_err(|e| CoreError::Internal(format!("PRAGMA 설정 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Internal(format!("마이그레이션 실패: {e}")))?;

        info!("SQLite 저장소 초기화: {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// 인메모리 SQLite 저장소 생성 (테스트용)
    pub fn open_in_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CoreError::Internal(format!("인메모리 SQLite 생성 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Internal(format!("마이그레이션 실패: {e}")))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

// ============================================================
// 테스트
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use restbench_core::models::history::HistoryEntry;
    use restbench_core::ports::history_store::HistoryStore;
    use restbench_core::ports::sync_store::SyncStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn settings_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            store.set("debug", "true").await.unwrap();
        }

        // 재오픈 후에도 값 유지
        let store = SqliteStore::open(&db_path).unwrap();
        let value = store.get("debug").await.unwrap();
        assert_eq!(value, Some("true".to_string()));
    }

    #[tokio::test]
    async fn history_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            let entry = HistoryEntry::new("GET", "https://api.example.org/ping");
            store.record(&entry).await.unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
