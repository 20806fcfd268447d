//! # restbench-app
//!
//! RESTBENCH 클라이언트 진입점.
//! CLI 파싱, 설정 파일 로드, 어댑터 생성(DI 와이어링), 명령 디스패치를 담당한다.

mod notifier;
mod term;
mod usage;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use restbench_core::config::AppConfig;
use restbench_core::config_manager::ConfigManager;
use restbench_core::event_bus::{AppEvent, EventBus};
use restbench_core::ports::history_store::HistoryStore;
use restbench_core::ports::notifier::StatusNotifier;
use restbench_core::ports::sync_store::SyncStore;
use restbench_core::ports::view::MenuView;
use restbench_core::settings::{SettingKey, SettingToggle, SettingsSnapshot, SettingsState};
use restbench_settings::analytics::AnalyticsDispatcher;
use restbench_settings::bootstrap;
use restbench_settings::controller::SettingsController;
use restbench_storage::sqlite::SqliteStore;

use crate::notifier::ToastNotifier;
use crate::term::{TermMenu, TermSettingsView};
use crate::usage::{FileUsageSink, TracingUsageSink};

/// RESTBENCH 데스크톱 클라이언트
#[derive(Parser, Debug)]
#[command(
    name = "restbench",
    version,
    about = "동기화 설정과 요청 히스토리를 관리하는 RESTBENCH 클라이언트"
)]
struct Args {
    /// 데이터 디렉토리 경로 (기본값: 플랫폼 데이터 디렉토리)
    #[arg(long)]
    data_dir: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error) — 설정 파일보다 우선
    #[arg(long, short = 'l')]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// 최상위 명령
#[derive(Subcommand, Debug)]
enum Command {
    /// 동기화 설정 관리
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// 요청 히스토리 관리
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// 로컬 설정 파일 관리
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// 설정 하위 명령
#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// 저장된 설정 전체 출력
    List {
        /// JSON 형식으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 설정 키 하나를 변경
    Set {
        /// 설정 키 (debug, history, notifications-enabled, magic-vars-enabled,
        /// codemirror-headers-enabled, codemirror-payload-enabled)
        key: String,
        /// 새 값 (true 또는 false)
        value: String,
    },
}

/// 히스토리 하위 명령
#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// 히스토리 저장소 전체 비우기
    Clear,
    /// 저장된 히스토리 항목 수 출력
    Count,
}

/// 설정 파일 하위 명령
#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// 현재 설정 파일 내용 출력
    Show,
    /// 기본 로그 레벨 변경 후 저장
    SetLogLevel {
        /// 새 로그 레벨 (trace, debug, info, warn, error)
        level: String,
    },
    /// 사용 통계 수집 켬/끔
    Telemetry {
        /// 새 값 (true 또는 false)
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 설정 파일은 tracing 초기화 전에 로드한다 (로그 레벨 출처)
    let config_manager = ConfigManager::new().context("설정 관리자 초기화 실패")?;
    let config = config_manager.get();

    // 로그 필터 우선순위: RUST_LOG 환경 변수 > --log-level 플래그 > 설정 파일
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.log.level.clone());
    let log_filter = format!(
        "restbench_app={},restbench_core={},restbench_storage={},restbench_settings={}",
        log_level, log_level, log_level, log_level
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!(
        "RESTBENCH 클라이언트 시작 (버전: {})",
        env!("CARGO_PKG_VERSION")
    );
    debug!("설정 파일: {}", config_manager.config_path().display());

    // config 명령은 저장소 어댑터 없이 설정 관리자만으로 처리한다
    let command = match args.command {
        Command::Config { action } => return run_config_command(action, &config_manager),
        command => command,
    };

    // ── 어댑터 생성 (DI 와이어링) ──

    // 1. SQLite 저장소 (동기화 설정 + 요청 히스토리)
    let db_path = resolve_db_path(args.data_dir.as_deref(), &config);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("데이터 디렉토리 생성 실패: {}", parent.display()))?;
    }
    let store = Arc::new(SqliteStore::open(&db_path)?);
    let sync_store: Arc<dyn SyncStore> = store.clone();
    let history_store: Arc<dyn HistoryStore> = store;

    // 2. 저장된 설정으로 메모리 상태 하이드레이션
    let snapshot = match bootstrap::load_snapshot(sync_store.as_ref()).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("저장된 설정 로드 실패, 기본값 사용: {e}");
            SettingsSnapshot::default()
        }
    };
    let state = SettingsState::new(snapshot);

    // 3. 이벤트 버스 + 알림 상태 변경 구독자
    let event_bus = EventBus::default();
    let mut notification_rx = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = notification_rx.recv().await {
            match event {
                AppEvent::NotificationsStateChanged { enabled } => {
                    info!("알림 기능 상태 변경: {enabled}");
                }
            }
        }
    });

    // 4. 데스크톱 토스트 알림
    let toast: Arc<dyn StatusNotifier> = Arc::new(ToastNotifier::new());

    // 5. 사용 통계 디스패처 (tracing 싱크 + 파일 스풀 싱크)
    let mut analytics = AnalyticsDispatcher::new();
    if config.telemetry.enabled {
        analytics.register(Arc::new(TracingUsageSink::new()));
        let events_path = config
            .telemetry
            .events_file
            .clone()
            .unwrap_or_else(|| db_path.with_file_name("usage_events.jsonl"));
        debug!("사용 이벤트 스풀: {}", events_path.display());
        analytics.register(Arc::new(FileUsageSink::new(events_path)));
    }

    // 6. 터미널 메뉴 어댑터
    let menu: Arc<dyn MenuView> = Arc::new(TermMenu::new());

    // 7. 설정 컨트롤러
    let controller = SettingsController::new(
        sync_store,
        history_store.clone(),
        state,
        event_bus,
        analytics,
        toast,
        menu,
    );

    run_command(command, &controller, history_store.as_ref()).await
}

/// 파싱된 서브커맨드 실행
async fn run_command(
    command: Command,
    controller: &SettingsController,
    history_store: &dyn HistoryStore,
) -> anyhow::Result<()> {
    match command {
        Command::Settings { action } => match action {
            SettingsAction::List { json } => {
                let view = TermSettingsView::new();
                controller.activate(&view);
                if json {
                    println!("{}", serde_json::to_string_pretty(&view.snapshot())?);
                } else {
                    view.render();
                }
            }
            SettingsAction::Set { key, value } => {
                let key: SettingKey = key.parse()?;
                let value = parse_bool_literal(&value)?;
                controller.change_setting(SettingToggle::new(key, value)).await;
            }
        },
        Command::History { action } => match action {
            HistoryAction::Clear => controller.clear_history().await,
            HistoryAction::Count => {
                let count = history_store.count().await?;
                println!("{count}");
            }
        },
        // main에서 와이어링 전에 처리된다
        Command::Config { .. } => unreachable!("config 명령은 어댑터 와이어링 없이 처리된다"),
    }

    Ok(())
}

/// config 하위 명령 실행. 변경은 `update_with`를 통해 파일로 저장된다.
fn run_config_command(action: ConfigAction, manager: &ConfigManager) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(&manager.get())?);
        }
        ConfigAction::SetLogLevel { level } => {
            let updated = manager.update_with(|c| c.log.level = level)?;
            println!("log.level = {}", updated.log.level);
        }
        ConfigAction::Telemetry { value } => {
            let enabled = parse_bool_literal(&value)?;
            let updated = manager.update_with(|c| c.telemetry.enabled = enabled)?;
            println!("telemetry.enabled = {}", updated.telemetry.enabled);
        }
    }

    Ok(())
}

/// "true"/"false" 리터럴 파싱. 저장 형식과 같은 두 값만 허용한다.
fn parse_bool_literal(raw: &str) -> anyhow::Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => anyhow::bail!("잘못된 값: {other} (true 또는 false만 허용)"),
    }
}

/// DB 파일 경로 결정.
///
/// 우선순위: `--data-dir` 플래그 > 설정 파일의 `storage.data_dir` > 플랫폼 데이터 디렉토리.
///
/// 플랫폼 기본 경로:
/// - Linux: `~/.local/share/restbench/restbench.db`
/// - macOS: `~/Library/Application Support/org.restbench.restbench/restbench.db`
/// - Windows: `%APPDATA%\restbench\restbench\data\restbench.db`
fn resolve_db_path(data_dir: Option<&str>, config: &AppConfig) -> PathBuf {
    let dir = data_dir
        .map(PathBuf::from)
        .or_else(|| config.storage.data_dir.clone())
        .or_else(|| {
            ProjectDirs::from("org", "restbench", "restbench")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(&config.storage.db_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn db_path_prefers_cli_flag() {
        let config = AppConfig::default_config();
        let path = resolve_db_path(Some("/tmp/rb-data"), &config);
        assert_eq!(path, PathBuf::from("/tmp/rb-data").join("restbench.db"));
    }

    #[test]
    fn db_path_uses_config_data_dir_without_flag() {
        let mut config = AppConfig::default_config();
        config.storage.data_dir = Some(PathBuf::from("/var/lib/restbench"));
        let path = resolve_db_path(None, &config);
        assert_eq!(path, PathBuf::from("/var/lib/restbench").join("restbench.db"));
    }

    #[test]
    fn db_path_honors_configured_file_name() {
        let mut config = AppConfig::default_config();
        config.storage.db_file = "bench.db".to_string();
        let path = resolve_db_path(Some("/tmp/rb-data"), &config);
        assert_eq!(path, PathBuf::from("/tmp/rb-data").join("bench.db"));
    }

    #[test]
    fn bool_literal_accepts_exactly_two_values() {
        assert!(parse_bool_literal("true").unwrap());
        assert!(!parse_bool_literal("false").unwrap());
        assert!(parse_bool_literal("TRUE").is_err());
        assert!(parse_bool_literal("1").is_err());
        assert!(parse_bool_literal("").is_err());
    }

    #[test]
    fn config_set_log_level_persists_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let manager = ConfigManager::with_path(config_path.clone()).unwrap();

        run_config_command(
            ConfigAction::SetLogLevel {
                level: "debug".to_string(),
            },
            &manager,
        )
        .unwrap();

        // 새 관리자로 다시 열어 파일에 반영됐는지 확인
        let reopened = ConfigManager::with_path(config_path).unwrap();
        assert_eq!(reopened.get().log.level, "debug");
    }

    #[test]
    fn config_telemetry_rejects_non_literal_values() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.json")).unwrap();

        run_config_command(
            ConfigAction::Telemetry {
                value: "false".to_string(),
            },
            &manager,
        )
        .unwrap();
        assert!(!manager.get().telemetry.enabled);

        // 리터럴이 아닌 값은 거부되고 설정은 그대로
        let result = run_config_command(
            ConfigAction::Telemetry {
                value: "off".to_string(),
            },
            &manager,
        );
        assert!(result.is_err());
        assert!(!manager.get().telemetry.enabled);
    }
}
