//! 시작 시 설정 하이드레이션.
//!
//! 동기화 저장소에서 여섯 개 설정 키를 읽어 기본값 위에 덮어쓴다.
//! 컨트롤러 활성화 시점에는 저장소를 다시 읽지 않으므로,
//! 이 로드는 프로세스 시작 시 한 번만 수행된다.

use restbench_core::error::CoreError;
use restbench_core::ports::sync_store::SyncStore;
use restbench_core::settings::{SettingKey, SettingsSnapshot};
use tracing::{debug, warn};

/// 저장소에서 설정 스냅샷 로드
///
/// 저장된 값이 없거나 `"true"`/`"false"` 리터럴이 아니면
/// 해당 키는 기본값을 유지한다. 저장소 에러는 전파한다.
pub async fn load_snapshot(store: &dyn SyncStore) -> Result<SettingsSnapshot, CoreError> {
    let mut snapshot = SettingsSnapshot::default();

    for key in SettingKey::ALL {
        match store.get(key.as_str()).await? {
            Some(raw) => match parse_flag(&raw) {
                Some(value) => snapshot.set(key, value),
                None => {
                    warn!("설정 값 파싱 불가, 기본값 유지: {key}={raw}");
                }
            },
            None => {
                debug!("저장된 설정 없음, 기본값 사용: {key}");
            }
        }
    }

    Ok(snapshot)
}

/// `"true"`/`"false"` 리터럴만 유효한 플래그로 인정
fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

// ============================================================
// 테스트
// ============================================================
