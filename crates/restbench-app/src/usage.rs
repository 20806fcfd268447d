//! 사용 통계 싱크 어댑터.
//!
//! `AnalyticsSink` 포트 구현 두 가지: tracing 로그 싱크, JSONL 파일 스풀 싱크.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use restbench_core::error::CoreError;
use restbench_core::ports::analytics::AnalyticsSink;
use serde::Serialize;
use tracing::info;

/// tracing 로그로 사용 이벤트를 남기는 싱크
pub struct TracingUsageSink;

impl TracingUsageSink {
    /// 새 싱크 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingUsageSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for TracingUsageSink {
    async fn send_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
    ) -> Result<(), CoreError> {
        info!("사용 이벤트: {category} / {action} / {label}");
        Ok(())
    }
}

/// JSONL 파일에 사용 이벤트를 추가 기록하는 싱크.
///
/// 한 줄에 이벤트 하나. 네트워크 없이도 유실 없이 쌓인다.
pub struct FileUsageSink {
    path: PathBuf,
}

/// 스풀 파일의 한 줄
#[derive(Serialize)]
struct UsageRecord<'a> {
    timestamp: DateTime<Utc>,
    category: &'a str,
    action: &'a str,
    label: &'a str,
}

impl FileUsageSink {
    /// 지정 경로에 기록하는 싱크 생성
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AnalyticsSink for FileUsageSink {
    async fn send_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
    ) -> Result<(), CoreError> {
        let record = UsageRecord {
            timestamp: Utc::now(),
            category,
            action,
            label,
        };
        let line = serde_json::to_string(&record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        Ok(())
    }
}
