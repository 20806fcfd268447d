//! 설정 키 집합과 프로세스 전역 설정 상태.
//!
//! 여섯 개의 불리언 설정이 기기 간 동기화 저장소에 문자열
//! ("true"/"false")로 보존되고, 메모리에는 `SettingsState`로 캐시된다.
//! 앰비언트 전역 플래그 대신 `SettingsState` 핸들을 소비자에게 주입한다.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 설정 키 (고정 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// 디버그 모드
    Debug,
    /// 요청 히스토리 기록
    History,
    /// 데스크톱 알림
    Notifications,
    /// 매직 변수 치환
    MagicVars,
    /// 헤더 편집기 (CodeMirror)
    CodeMirrorHeaders,
    /// 페이로드 편집기 (CodeMirror)
    CodeMirrorPayload,
}

impl SettingKey {
    /// 전체 키 목록 (하이드레이션 순회용)
    pub const ALL: [SettingKey; 6] = [
        SettingKey::Debug,
        SettingKey::History,
        SettingKey::Notifications,
        SettingKey::MagicVars,
        SettingKey::CodeMirrorHeaders,
        SettingKey::CodeMirrorPayload,
    ];

    /// 저장소에 기록되는 키 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Debug => "debug",
            SettingKey::History => "history",
            SettingKey::Notifications => "notifications-enabled",
            SettingKey::MagicVars => "magic-vars-enabled",
            SettingKey::CodeMirrorHeaders => "codemirror-headers-enabled",
            SettingKey::CodeMirrorPayload => "codemirror-payload-enabled",
        }
    }

    /// 사용량 이벤트의 액션 라벨
    pub fn usage_action(&self) -> &'static str {
        match self {
            SettingKey::Debug => "Debug enabled",
            SettingKey::History => "History enabled",
            SettingKey::Notifications => "Notifications enabled",
            SettingKey::MagicVars => "MagicVars enabled",
            SettingKey::CodeMirrorHeaders => "CM headers enabled",
            SettingKey::CodeMirrorPayload => "CM values enabled",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(SettingKey::Debug),
            "history" => Ok(SettingKey::History),
            "notifications-enabled" => Ok(SettingKey::Notifications),
            "magic-vars-enabled" => Ok(SettingKey::MagicVars),
            "codemirror-headers-enabled" => Ok(SettingKey::CodeMirrorHeaders),
            "codemirror-payload-enabled" => Ok(SettingKey::CodeMirrorPayload),
            other => Err(CoreError::UnknownSettingKey(other.to_string())),
        }
    }
}

/// 사용자 조작 한 번에 해당하는 설정 변경 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingToggle {
    /// 변경 대상 키
    pub key: SettingKey,
    /// 새 값
    pub value: bool,
}

impl SettingToggle {
    /// 새 변경 요청 생성
    pub fn new(key: SettingKey, value: bool) -> Self {
        Self { key, value }
    }

    /// 저장소에 기록되는 값 리터럴
    pub fn literal(&self) -> &'static str {
        if self.value {
            "true"
        } else {
            "false"
        }
    }
}

/// 여섯 플래그의 스냅샷 (값 복사)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// 디버그 모드
    pub debug: bool,
    /// 요청 히스토리 기록
    pub history: bool,
    /// 데스크톱 알림
    pub notifications: bool,
    /// 매직 변수 치환
    pub magic_vars: bool,
    /// 헤더 편집기 활성화
    pub codemirror_headers: bool,
    /// 페이로드 편집기 활성화
    pub codemirror_payload: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            debug: false,
            history: true,
            notifications: false,
            magic_vars: true,
            codemirror_headers: true,
            codemirror_payload: true,
        }
    }
}

impl SettingsSnapshot {
    /// 키에 해당하는 플래그 값
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Debug => self.debug,
            SettingKey::History => self.history,
            SettingKey::Notifications => self.notifications,
            SettingKey::MagicVars => self.magic_vars,
            SettingKey::CodeMirrorHeaders => self.codemirror_headers,
            SettingKey::CodeMirrorPayload => self.codemirror_payload,
        }
    }

    /// 키에 해당하는 플래그 값 변경
    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Debug => self.debug = value,
            SettingKey::History => self.history = value,
            SettingKey::Notifications => self.notifications = value,
            SettingKey::MagicVars => self.magic_vars = value,
            SettingKey::CodeMirrorHeaders => self.codemirror_headers = value,
            SettingKey::CodeMirrorPayload => self.codemirror_payload = value,
        }
    }
}

/// 프로세스 전역 설정 상태.
///
/// 핸들을 clone해 소비자에게 주입한다. 쓰기 경로는 `apply` 하나뿐이며
/// 마지막으로 저장에 성공한 값만 반영된다. 락은 복사/필드 쓰기 동안만
/// 잡고 await 지점을 넘기지 않는다.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    inner: Arc<RwLock<SettingsSnapshot>>,
}

impl SettingsState {
    /// 초기 스냅샷으로 상태 생성
    pub fn new(initial: SettingsSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// 현재 플래그 사본
    pub fn snapshot(&self) -> SettingsSnapshot {
        *self.inner.read()
    }

    /// 단일 플래그 값 조회
    pub fn get(&self, key: SettingKey) -> bool {
        self.inner.read().get(key)
    }

    /// 단일 플래그 갱신 (유일한 쓰기 경로)
    pub fn apply(&self, key: SettingKey, value: bool) {
        self.inner.write().set(key, value);
    }

    /// 시작 시 저장소에서 읽은 값으로 전체 교체
    pub fn hydrate(&self, snapshot: SettingsSnapshot) {
        *self.inner.write() = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_defaults() {
        let snapshot = SettingsSnapshot::default();
        assert!(!snapshot.debug);
        assert!(snapshot.history);
        assert!(!snapshot.notifications);
        assert!(snapshot.magic_vars);
        assert!(snapshot.codemirror_headers);
        assert!(snapshot.codemirror_payload);
    }

    #[test]
    fn snapshot_get_set_by_key() {
        let mut snapshot = SettingsSnapshot::default();
        for key in SettingKey::ALL {
            snapshot.set(key, true);
            assert!(snapshot.get(key));
            snapshot.set(key, false);
            assert!(!snapshot.get(key));
        }
    }

    #[test]
    fn toggle_literal_matches_stored_format() {
        let on = SettingToggle::new(SettingKey::Debug, true);
        let off = SettingToggle::new(SettingKey::Debug, false);
        assert_eq!(on.literal(), "true");
        assert_eq!(off.literal(), "false");
    }

    #[test]
    fn unknown_key_is_error() {
        let result = "telemetry".parse::<SettingKey>();
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("telemetry"));
    }

    #[test]
    fn state_apply_visible_to_clones() {
        let state = SettingsState::default();
        let handle = state.clone();

        state.apply(SettingKey::Debug, true);
        assert!(handle.get(SettingKey::Debug));
        assert!(handle.snapshot().debug);
    }

    #[test]
    fn state_hydrate_replaces_all_flags() {
        let state = SettingsState::default();
        let snapshot = SettingsSnapshot {
            debug: true,
            history: false,
            notifications: true,
            magic_vars: false,
            codemirror_headers: false,
            codemirror_payload: false,
        };

        state.hydrate(snapshot);
        assert_eq!(state.snapshot(), snapshot);
    }
}
