//! 설정 플로우 통합 테스트.
//!
//! SQLite 저장소 + 컨트롤러 + 공유 상태 + 이벤트 버스 cross-crate 연동.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use restbench_core::error::CoreError;
use restbench_core::event_bus::{AppEvent, EventBus};
use restbench_core::models::history::HistoryEntry;
use restbench_core::ports::analytics::AnalyticsSink;
use restbench_core::ports::history_store::HistoryStore;
use restbench_core::ports::notifier::{StatusNotifier, ToastDuration};
use restbench_core::ports::sync_store::SyncStore;
use restbench_core::ports::view::{MenuView, SettingsView};
use restbench_core::settings::{SettingKey, SettingToggle, SettingsSnapshot, SettingsState};
use restbench_settings::analytics::AnalyticsDispatcher;
use restbench_settings::bootstrap;
use restbench_settings::controller::{SettingsController, HISTORY_MENU_ITEM_INDEX};
use restbench_storage::sqlite::SqliteStore;
use tempfile::TempDir;

// ── 테스트 더블 ──

struct RecordingNotifier {
    messages: Mutex<Vec<(String, ToastDuration)>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    fn messages(&self) -> Vec<(String, ToastDuration)> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusNotifier for RecordingNotifier {
    async fn notify(&self, message: &str, duration: ToastDuration) -> Result<(), CoreError> {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), duration));
        Ok(())
    }
}

struct RecordingMenu {
    shown: Mutex<Vec<usize>>,
    hidden: Mutex<Vec<usize>>,
}

impl RecordingMenu {
    fn new() -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
            hidden: Mutex::new(Vec::new()),
        }
    }
}

impl MenuView for RecordingMenu {
    fn show_item(&self, index: usize) {
        self.shown.lock().unwrap().push(index);
    }

    fn hide_item(&self, index: usize) {
        self.hidden.lock().unwrap().push(index);
    }
}

struct RecordingSink {
    events: Mutex<Vec<(String, String, String)>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<(String, String, String)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingSink {
    async fn send_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
    ) -> Result<(), CoreError> {
        self.events.lock().unwrap().push((
            category.to_string(),
            action.to_string(),
            label.to_string(),
        ));
        Ok(())
    }
}

struct CapturingView {
    snapshot: Mutex<SettingsSnapshot>,
}

impl CapturingView {
    fn new() -> Self {
        Self {
            snapshot: Mutex::new(SettingsSnapshot::default()),
        }
    }

    fn snapshot(&self) -> SettingsSnapshot {
        *self.snapshot.lock().unwrap()
    }
}

impl SettingsView for CapturingView {
    fn set_debug_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().debug = enabled;
    }

    fn set_history_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().history = enabled;
    }

    fn set_notifications_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().notifications = enabled;
    }

    fn set_magic_vars_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().magic_vars = enabled;
    }

    fn set_codemirror_headers_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().codemirror_headers = enabled;
    }

    fn set_codemirror_payload_enabled(&self, enabled: bool) {
        self.snapshot.lock().unwrap().codemirror_payload = enabled;
    }
}

// ── 와이어링 헬퍼 ──

struct TestRig {
    controller: SettingsController,
    sync_store: Arc<dyn SyncStore>,
    history_store: Arc<dyn HistoryStore>,
    state: SettingsState,
    event_bus: EventBus,
    notifier: Arc<RecordingNotifier>,
    menu: Arc<RecordingMenu>,
    sink: Arc<RecordingSink>,
}

/// 실제 SQLite 저장소를 붙인 전체 와이어링
fn wire(store: Arc<SqliteStore>, state: SettingsState) -> TestRig {
    let sync_store: Arc<dyn SyncStore> = store.clone();
    let history_store: Arc<dyn HistoryStore> = store;

    let event_bus = EventBus::default();
    let notifier = Arc::new(RecordingNotifier::new());
    let menu = Arc::new(RecordingMenu::new());
    let sink = Arc::new(RecordingSink::new());

    let mut analytics = AnalyticsDispatcher::new();
    analytics.register(sink.clone());

    let controller = SettingsController::new(
        sync_store.clone(),
        history_store.clone(),
        state.clone(),
        event_bus.clone(),
        analytics,
        notifier.clone(),
        menu.clone(),
    );

    TestRig {
        controller,
        sync_store,
        history_store,
        state,
        event_bus,
        notifier,
        menu,
        sink,
    }
}

fn wire_in_memory() -> TestRig {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    wire(store, SettingsState::default())
}

// ── 테스트 ──

#[tokio::test]
async fn toggle_persists_and_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("restbench.db");

    {
        let store = Arc::new(SqliteStore::open(&db_path).unwrap());
        let rig = wire(store, SettingsState::default());

        rig.controller
            .change_setting(SettingToggle::new(SettingKey::Debug, true))
            .await;

        let messages = rig.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], ("Settings saved.".to_string(), ToastDuration::Short));
    }

    // 프로세스 재시작을 흉내: 새로 열고 부트스트랩으로 복원
    let store = SqliteStore::open(&db_path).unwrap();
    let snapshot = bootstrap::load_snapshot(&store).await.unwrap();

    assert!(snapshot.debug);
    assert!(snapshot.history); // 나머지는 기본값 유지
}

#[tokio::test]
async fn all_keys_round_trip_through_bootstrap() {
    let rig = wire_in_memory();

    // 여섯 키 전부 기본값의 반대로 뒤집는다
    let defaults = SettingsSnapshot::default();
    for key in SettingKey::ALL {
        rig.controller
            .change_setting(SettingToggle::new(key, !defaults.get(key)))
            .await;
    }

    let restored = bootstrap::load_snapshot(rig.sync_store.as_ref()).await.unwrap();
    for key in SettingKey::ALL {
        assert_eq!(
            restored.get(key),
            !defaults.get(key),
            "키 {key}가 복원되지 않음"
        );
    }
}

#[tokio::test]
async fn stored_literals_are_exactly_true_and_false() {
    let rig = wire_in_memory();

    rig.controller
        .change_setting(SettingToggle::new(SettingKey::Debug, true))
        .await;
    rig.controller
        .change_setting(SettingToggle::new(SettingKey::History, false))
        .await;

    let debug = rig.sync_store.get("debug").await.unwrap();
    let history = rig.sync_store.get("history").await.unwrap();
    assert_eq!(debug.as_deref(), Some("true"));
    assert_eq!(history.as_deref(), Some("false"));
}

#[tokio::test]
async fn notifications_toggle_publishes_event() {
    let rig = wire_in_memory();
    let mut rx = rig.event_bus.subscribe();

    rig.controller
        .change_setting(SettingToggle::new(SettingKey::Notifications, true))
        .await;

    let event = rx.recv().await.unwrap();
    assert_eq!(event, AppEvent::NotificationsStateChanged { enabled: true });
    assert!(rig.state.get(SettingKey::Notifications));
}

#[tokio::test]
async fn history_toggle_drives_menu_item() {
    let rig = wire_in_memory();

    rig.controller
        .change_setting(SettingToggle::new(SettingKey::History, false))
        .await;
    assert_eq!(*rig.menu.hidden.lock().unwrap(), vec![HISTORY_MENU_ITEM_INDEX]);

    rig.controller
        .change_setting(SettingToggle::new(SettingKey::History, true))
        .await;
    assert_eq!(*rig.menu.shown.lock().unwrap(), vec![HISTORY_MENU_ITEM_INDEX]);
}

#[tokio::test]
async fn clear_history_end_to_end() {
    let rig = wire_in_memory();

    for i in 0..3 {
        let entry = HistoryEntry::new("GET", format!("https://api.example.org/items/{i}"));
        rig.history_store.record(&entry).await.unwrap();
    }
    assert_eq!(rig.history_store.count().await.unwrap(), 3);

    rig.controller.clear_history().await;

    assert_eq!(rig.history_store.count().await.unwrap(), 0);
    let messages = rig.notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], ("History cleared.".to_string(), ToastDuration::Short));

    let events = rig.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        (
            "Settings usage".to_string(),
            "Clear history".to_string(),
            String::new()
        )
    );
}

#[tokio::test]
async fn activation_shows_hydrated_values() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());

    // 이전 실행이 남긴 값처럼 저장소를 미리 채운다
    {
        let sync: &dyn SyncStore = store.as_ref();
        sync.set("debug", "true").await.unwrap();
        sync.set("history", "false").await.unwrap();
    }

    let snapshot = bootstrap::load_snapshot(store.as_ref()).await.unwrap();
    let rig = wire(store, SettingsState::new(snapshot));

    let view = CapturingView::new();
    rig.controller.activate(&view);

    let shown = view.snapshot();
    assert!(shown.debug);
    assert!(!shown.history);
    assert!(!shown.notifications); // 저장된 적 없는 키는 기본값
}

#[tokio::test]
async fn usage_events_reach_every_registered_sink() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let sync_store: Arc<dyn SyncStore> = store.clone();
    let history_store: Arc<dyn HistoryStore> = store;

    let first = Arc::new(RecordingSink::new());
    let second = Arc::new(RecordingSink::new());
    let mut analytics = AnalyticsDispatcher::new();
    analytics.register(first.clone());
    analytics.register(second.clone());

    let controller = SettingsController::new(
        sync_store,
        history_store,
        SettingsState::default(),
        EventBus::default(),
        analytics,
        Arc::new(RecordingNotifier::new()),
        Arc::new(RecordingMenu::new()),
    );

    controller
        .change_setting(SettingToggle::new(SettingKey::MagicVars, false))
        .await;

    let expected = (
        "Settings usage".to_string(),
        "MagicVars enabled".to_string(),
        "false".to_string(),
    );
    assert_eq!(first.events(), vec![expected.clone()]);
    assert_eq!(second.events(), vec![expected]);
}
