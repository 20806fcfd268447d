//! # restbench-storage
//!
//! 로컬 저장소 어댑터.
//! SQLite 기반으로 동기화 설정(key-value)과 요청 히스토리를 저장하고,
//! 버전 기반 스키마 마이그레이션을 관리한다.
//!
//! ## 모듈
//! - `sqlite`: 동기화 설정 + 요청 히스토리 저장소 (SyncStore / HistoryStore 구현)
//! - `migration`: 스키마 마이그레이션

pub mod migration;
pub mod sqlite;
