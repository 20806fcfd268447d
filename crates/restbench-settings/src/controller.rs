//! 설정 화면 컨트롤러.
//!
//! 토글 영속화, 키별 부수효과, 토스트 알림, 사용 통계 보고를 조율한다.
//! 활성화 시 뷰는 메모리에 캐시된 플래그 값으로 채워진다 (저장소 왕복 없음).

use restbench_core::event_bus::{AppEvent, EventBus};
use restbench_core::ports::history_store::HistoryStore;
use restbench_core::ports::notifier::{StatusNotifier, ToastDuration};
use restbench_core::ports::sync_store::SyncStore;
use restbench_core::ports::view::{MenuView, SettingsView};
use restbench_core::settings::{SettingKey, SettingToggle, SettingsState};
use std::sync::Arc;
use tracing::{debug, info};

use crate::analytics::{AnalyticsDispatcher, USAGE_CATEGORY};

/// 네비게이션 메뉴에서 히스토리 항목의 고정 위치
pub const HISTORY_MENU_ITEM_INDEX: usize = 2;

/// 설정 저장 성공 토스트
const MSG_SETTINGS_SAVED: &str = "Settings saved.";
/// 히스토리 삭제 성공 토스트
const MSG_HISTORY_CLEARED: &str = "History cleared.";
/// 히스토리 삭제 실패 토스트
const MSG_HISTORY_CLEAR_FAILED: &str = "Unable to clear History Store.";

/// 설정 화면 컨트롤러
pub struct SettingsController {
    sync_store: Arc<dyn SyncStore>,
    history_store: Arc<dyn HistoryStore>,
    state: SettingsState,
    event_bus: EventBus,
    analytics: AnalyticsDispatcher,
    notifier: Arc<dyn StatusNotifier>,
    menu: Arc<dyn MenuView>,
}

impl SettingsController {
    /// 새 컨트롤러 생성
    pub fn new(
        sync_store: Arc<dyn SyncStore>,
        history_store: Arc<dyn HistoryStore>,
        state: SettingsState,
        event_bus: EventBus,
        analytics: AnalyticsDispatcher,
        notifier: Arc<dyn StatusNotifier>,
        menu: Arc<dyn MenuView>,
    ) -> Self {
        Self {
            sync_store,
            history_store,
            state,
            event_bus,
            analytics,
            notifier,
            menu,
        }
    }

    /// 뷰 활성화: 캐시된 현재 플래그 값으로 뷰를 채운다
    ///
    /// 플래그는 프로세스 시작 시 이미 로드되어 있으므로
    /// 저장소를 다시 읽지 않는다.
    pub fn activate(&self, view: &dyn SettingsView) {
        let snapshot = self.state.snapshot();
        view.set_debug_enabled(snapshot.debug);
        view.set_history_enabled(snapshot.history);
        view.set_notifications_enabled(snapshot.notifications);
        view.set_magic_vars_enabled(snapshot.magic_vars);
        view.set_codemirror_headers_enabled(snapshot.codemirror_headers);
        view.set_codemirror_payload_enabled(snapshot.codemirror_payload);
        debug!("설정 뷰 활성화");
    }

    /// 설정 변경: 새 값을 영속화하고 키별 부수효과를 적용한다
    ///
    /// 저장 실패 시 메모리 플래그는 변경되지 않고 에러 토스트만 표시된다.
    /// 사용 통계는 저장 결과와 무관하게 항상 1회 보고된다.
    pub async fn change_setting(&self, toggle: SettingToggle) {
        let literal = toggle.literal();

        match self.sync_store.set(toggle.key.as_str(), literal).await {
            Ok(()) => {
                self.show_toast(MSG_SETTINGS_SAVED, ToastDuration::Short).await;
                self.apply_side_effect(toggle.key, toggle.value);
                info!("설정 저장 완료: {}={literal}", toggle.key);
            }
            Err(e) => {
                self.show_toast(&format!("Save error: {e}"), ToastDuration::Persistent)
                    .await;
                debug!("설정 저장 실패: {}: {e}", toggle.key);
            }
        }

        self.analytics
            .report(USAGE_CATEGORY, toggle.key.usage_action(), literal)
            .await;
    }

    /// 히스토리 전체 삭제
    ///
    /// 사용 통계는 삭제 결과와 무관하게 항상 1회 보고된다.
    pub async fn clear_history(&self) {
        match self.history_store.clear().await {
            Ok(removed) => {
                info!("히스토리 삭제 완료 (삭제된 항목 있음: {removed})");
                self.show_toast(MSG_HISTORY_CLEARED, ToastDuration::Short).await;
            }
            Err(e) => {
                debug!("히스토리 삭제 실패: {e}");
                self.show_toast(MSG_HISTORY_CLEAR_FAILED, ToastDuration::Persistent)
                    .await;
            }
        }

        self.analytics
            .report(USAGE_CATEGORY, "Clear history", "")
            .await;
    }

    /// 키별 부수효과: 플래그 갱신, 메뉴 토글, 이벤트 발행
    fn apply_side_effect(&self, key: SettingKey, value: bool) {
        self.state.apply(key, value);

        match key {
            SettingKey::History => {
                if value {
                    self.menu.show_item(HISTORY_MENU_ITEM_INDEX);
                } else {
                    self.menu.hide_item(HISTORY_MENU_ITEM_INDEX);
                }
            }
            SettingKey::Notifications => {
                self.event_bus
                    .publish(AppEvent::NotificationsStateChanged { enabled: value });
            }
            _ => {}
        }
    }

    /// 토스트 표시 (알림 실패는 흐름에 영향을 주지 않음)
    async fn show_toast(&self, message: &str, duration: ToastDuration) {
        if let Err(e) = self.notifier.notify(message, duration).await {
            debug!("토스트 표시 실패: {e}");
        }
    }
}

// ============================================================
// 테스트
// ============================================================
