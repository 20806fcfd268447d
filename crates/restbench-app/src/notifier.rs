//! 데스크톱 토스트 알림 어댑터.
//!
//! `StatusNotifier` 포트 구현. notify-rust 기반.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};
use restbench_core::error::CoreError;
use restbench_core::ports::notifier::{StatusNotifier, ToastDuration};
use tracing::debug;

/// 짧은 토스트의 표시 시간 (밀리초)
const SHORT_TOAST_MS: u32 = 4000;

/// 데스크톱 토스트 알림 어댑터 — `StatusNotifier` 포트 구현
pub struct ToastNotifier;

impl ToastNotifier {
    /// 새 알림 어댑터 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusNotifier for ToastNotifier {
    async fn notify(&self, message: &str, duration: ToastDuration) -> Result<(), CoreError> {
        let timeout = match duration {
            ToastDuration::Short => Timeout::Milliseconds(SHORT_TOAST_MS),
            ToastDuration::Persistent => Timeout::Never,
        };

        debug!("토스트: {message} ({duration:?})");

        Notification::new()
            .summary("RESTBENCH")
            .body(message)
            .appname("RESTBENCH")
            .timeout(timeout)
            .show()
            .map_err(|e| CoreError::Internal(format!("알림 표시 실패: {e}")))?;

        Ok(())
    }
}
