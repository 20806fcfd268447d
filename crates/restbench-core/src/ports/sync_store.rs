//! 동기화 키-값 저장소 포트.
//!
//! 구현: `restbench-storage` crate (rusqlite)

use async_trait::async_trait;

use crate::error::CoreError;

/// 기기 간 동기화되는 키-값 저장소.
///
/// 설정 값은 불리언의 문자열 표현("true"/"false")으로 기록된다.
/// 쓰기는 키 하나 단위이며 키 간 트랜잭션은 없다.
#[async_trait]
pub trait SyncStore: Send + Sync {
    /// 키 하나를 비동기로 기록
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// 키 하나를 조회 (미저장이면 None)
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
}
