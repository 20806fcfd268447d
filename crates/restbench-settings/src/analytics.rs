//! 사용 통계 디스패처.
//!
//! 등록된 모든 사용 통계 싱크로 하나의 이벤트를 팬아웃한다.
//! 호출부마다 싱크를 직접 호출하던 중복을 제거한 구조.

use futures::future::join_all;
use restbench_core::ports::analytics::AnalyticsSink;
use std::sync::Arc;
use tracing::debug;

/// 설정 화면 사용 통계 카테고리
pub const USAGE_CATEGORY: &str = "Settings usage";

/// 사용 통계 디스패처
///
/// 싱크 실패는 debug 로그로만 남기고 호출 흐름에 전파하지 않는다.
#[derive(Clone, Default)]
pub struct AnalyticsDispatcher {
    sinks: Vec<Arc<dyn AnalyticsSink>>,
}

impl AnalyticsDispatcher {
    /// 빈 디스패처 생성
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// 싱크 등록
    pub fn register(&mut self, sink: Arc<dyn AnalyticsSink>) {
        self.sinks.push(sink);
    }

    /// 등록된 싱크 수
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// 모든 싱크로 이벤트 전달
    pub async fn report(&self, category: &str, action: &str, label: &str) {
        let sends = self.sinks.iter().map(|sink| {
            let sink = sink.clone();
            async move {
                if let Err(e) = sink.send_event(category, action, label).await {
                    debug!("사용 통계 전송 실패: {e}");
                }
            }
        });
        join_all(sends).await;
    }
}

// ============================================================
// 테스트
// ============================================================
