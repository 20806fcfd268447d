//! 애플리케이션 설정 구조체.
//!
//! 저장소 경로, 사용 통계, 로그 레벨 등 런타임 설정을 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드/저장.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 로컬 저장소 설정
    pub storage: StorageConfig,
    /// 사용 통계(텔레메트리) 설정
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// 로그 설정
    #[serde(default)]
    pub log: LogConfig,
}

// ============================================================
// 저장소 설정
// ============================================================

/// 로컬 저장소 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 데이터 디렉토리 (None이면 플랫폼 기본 경로)
    pub data_dir: Option<PathBuf>,
    /// SQLite DB 파일 이름
    #[serde(default = "default_db_file")]
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            db_file: default_db_file(),
        }
    }
}

// ============================================================
// 사용 통계 설정
// ============================================================

/// 사용 통계 설정 — 기능 사용 이벤트 기록 제어
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// 사용 통계 기록 활성화 여부
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 이벤트 기록 파일 경로 (None이면 DB와 같은 디렉토리의 usage_events.jsonl)
    #[serde(default)]
    pub events_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            events_file: None,
        }
    }
}

// ============================================================
// 로그 설정
// ============================================================

/// 로그 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 기본 로그 레벨 (RUST_LOG 환경 변수가 우선)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            storage: StorageConfig::default(),
            telemetry: TelemetryConfig::default(),
            log: LogConfig::default(),
        }
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_true() -> bool {
    true
}

fn default_db_file() -> String {
    "restbench.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
