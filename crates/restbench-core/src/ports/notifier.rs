//! 상태 토스트 알림 포트.
//!
//! 구현: `restbench-app` (notify-rust)

use async_trait::async_trait;

use crate::error::CoreError;

/// 토스트 표시 시간 힌트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    /// 짧게 표시 후 자동 소멸
    Short,
    /// 사용자가 닫을 때까지 유지
    Persistent,
}

/// 사용자에게 일시적 상태 메시지를 표시하는 알림기.
///
/// 표시 실패는 호출 측에서 로깅만 하고 흐름을 바꾸지 않는다.
#[async_trait]
pub trait StatusNotifier: Send + Sync {
    /// 토스트 메시지 표시
    async fn notify(&self, message: &str, duration: ToastDuration) -> Result<(), CoreError>;
}
