//! 설정 화면 뷰 포트.
//!
//! 구현: GUI 셸 또는 `restbench-app`의 터미널 어댑터

/// 설정 화면 렌더 계약.
///
/// 여섯 토글의 표시 상태를 갱신한다. 사용자 조작은 뷰가
/// 컨트롤러의 `change_setting` 호출로 위임한다.
pub trait SettingsView: Send + Sync {
    /// 디버그 모드 토글 표시 갱신
    fn set_debug_enabled(&self, enabled: bool);

    /// 요청 히스토리 토글 표시 갱신
    fn set_history_enabled(&self, enabled: bool);

    /// 데스크톱 알림 토글 표시 갱신
    fn set_notifications_enabled(&self, enabled: bool);

    /// 변수 템플릿 토글 표시 갱신
    fn set_magic_vars_enabled(&self, enabled: bool);

    /// 헤더 에디터 토글 표시 갱신
    fn set_codemirror_headers_enabled(&self, enabled: bool);

    /// 페이로드 에디터 토글 표시 갱신
    fn set_codemirror_payload_enabled(&self, enabled: bool);
}

/// 내비게이션 메뉴 계약
pub trait MenuView: Send + Sync {
    /// 지정 위치의 메뉴 항목 표시
    fn show_item(&self, index: usize);

    /// 지정 위치의 메뉴 항목 숨김
    fn hide_item(&self, index: usize);
}
