//! 요청 히스토리 모델.
//!
//! 실행된 요청의 기록 항목. "Clear history" 일괄 삭제의 대상이다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 저장된 요청 히스토리 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 항목 고유 ID
    pub id: Uuid,
    /// HTTP 메서드
    pub method: String,
    /// 요청 URL
    pub url: String,
    /// 기록 시각
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// 새 히스토리 항목 생성 (ID와 시각 자동 부여)
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method: method.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}
