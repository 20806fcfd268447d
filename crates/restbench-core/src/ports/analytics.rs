//! 사용량 분석 싱크 포트.
//!
//! 구현: `restbench-app`의 로컬 싱크 (tracing, 파일 스풀)

use async_trait::async_trait;

use crate::error::CoreError;

/// 사용량 이벤트를 수신하는 싱크.
///
/// 전송은 fire-and-forget — 실패는 디스패처가 debug 로그로만 남긴다.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// 카테고리/액션/라벨 3요소 이벤트 전송
    async fn send_event(&self, category: &str, action: &str, label: &str)
        -> Result<(), CoreError>;
}
