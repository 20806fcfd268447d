//! 앱 전역 이벤트 버스.
//!
//! `tokio::broadcast` 기반 내부 이벤트 라우팅.
//! 설정 변경처럼 여러 컴포넌트가 관심을 갖는 상태 변화를 전파한다.

use tokio::sync::broadcast;
use tracing::debug;

/// 내부 앱 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// 데스크톱 알림 설정 변경 (구독자: 알림 발송 영역)
    NotificationsStateChanged {
        /// 새 설정 값
        enabled: bool,
    },
}

/// 내부 이벤트 버스.
///
/// 구독자가 없어도 publish는 실패하지 않는다.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 이벤트 발행
    pub fn publish(&self, event: AppEvent) {
        debug!("이벤트 발행: {:?}", event);
        let _ = self.tx.send(event);
    }

    /// 구독자 생성
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(128)
    }
}
