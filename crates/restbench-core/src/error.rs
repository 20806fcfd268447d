//! RESTBENCH 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 드라이버 에러를 `CoreError`로 래핑해 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 저장소, 직렬화, 설정 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 저장소 읽기/쓰기 실패
    #[error("스토리지 에러: {0}")]
    Storage(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 인식할 수 없는 설정 키
    #[error("알 수 없는 설정 키: {0}")]
    UnknownSettingKey(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
