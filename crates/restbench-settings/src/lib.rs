//! # restbench-settings
//!
//! 설정 화면 기능 크레이트.
//! 토글 영속화와 키별 부수효과를 조율하는 `SettingsController`,
//! N개 싱크로 팬아웃하는 `AnalyticsDispatcher`,
//! 프로세스 시작 시 저장소에서 플래그를 읽어오는 하이드레이션을 제공한다.
//!
//! ## 모듈
//! - [`controller`] — 설정 화면 컨트롤러 (활성화 / 토글 / 히스토리 삭제)
//! - [`analytics`] — 사용 통계 디스패처
//! - [`bootstrap`] — 시작 시 설정 하이드레이션

pub mod analytics;
pub mod bootstrap;
pub mod controller;
