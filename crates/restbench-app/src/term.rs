//! 터미널 어댑터.
//!
//! CLI 표면의 `SettingsView` / `MenuView` 포트 구현.

use parking_lot::Mutex;
use restbench_core::ports::view::{MenuView, SettingsView};
use restbench_core::settings::{SettingKey, SettingsSnapshot};
use tracing::debug;

/// 터미널 설정 뷰.
///
/// 활성화 시 컨트롤러가 채워 준 플래그를 모아 두었다가 표로 출력한다.
#[derive(Default)]
pub struct TermSettingsView {
    snapshot: Mutex<SettingsSnapshot>,
}

impl TermSettingsView {
    /// 새 터미널 뷰 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 표시 상태 스냅샷
    pub fn snapshot(&self) -> SettingsSnapshot {
        *self.snapshot.lock()
    }

    /// 설정 표 출력
    pub fn render(&self) {
        let snapshot = self.snapshot();
        println!("┌────────────────────────────┬───────┐");
        for key in SettingKey::ALL {
            println!("│ {:<26} │ {:<5} │", key.as_str(), snapshot.get(key));
        }
        println!("└────────────────────────────┴───────┘");
    }
}

impl SettingsView for TermSettingsView {
    fn set_debug_enabled(&self, enabled: bool) {
        self.snapshot.lock().debug = enabled;
    }

    fn set_history_enabled(&self, enabled: bool) {
        self.snapshot.lock().history = enabled;
    }

    fn set_notifications_enabled(&self, enabled: bool) {
        self.snapshot.lock().notifications = enabled;
    }

    fn set_magic_vars_enabled(&self, enabled: bool) {
        self.snapshot.lock().magic_vars = enabled;
    }

    fn set_codemirror_headers_enabled(&self, enabled: bool) {
        self.snapshot.lock().codemirror_headers = enabled;
    }

    fn set_codemirror_payload_enabled(&self, enabled: bool) {
        self.snapshot.lock().codemirror_payload = enabled;
    }
}

/// 터미널 메뉴 어댑터.
///
/// CLI에는 상주 메뉴가 없으므로 항목 전환을 로그로만 기록한다.
pub struct TermMenu;

impl TermMenu {
    /// 새 메뉴 어댑터 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuView for TermMenu {
    fn show_item(&self, index: usize) {
        debug!("메뉴 항목 표시: {index}");
    }

    fn hide_item(&self, index: usize) {
        debug!("메뉴 항목 숨김: {index}");
    }
}
