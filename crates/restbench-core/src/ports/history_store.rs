//! 요청 히스토리 저장소 포트.
//!
//! 구현: `restbench-storage` crate (rusqlite)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::history::HistoryEntry;

/// 요청 히스토리 저장소
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 히스토리 항목 기록
    async fn record(&self, entry: &HistoryEntry) -> Result<(), CoreError>;

    /// 전체 히스토리 일괄 삭제. 삭제된 항목이 있었으면 true.
    async fn clear(&self) -> Result<bool, CoreError>;

    /// 저장된 항목 수
    async fn count(&self) -> Result<u64, CoreError>;
}
