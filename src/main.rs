use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use stride_core::config::AppConfig;
use stride_core::models::AppStartTime;
use stride_core::models::users::entities::Section;
use stride_core::runtime::lifetime;
use stride_core::services::{ServiceContext, StatsService};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_core_startup().await;
    let ctx = ServiceContext::from(&startup);

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    if let Some(user) = startup.store.session_user() {
        info!("Restored session for {} ({})", user.name, user.role);
    }

    // 输出各分组提交统计概览
    let stats = StatsService::new(ctx.clone());
    for section in Section::cohorts() {
        let s = stats.section_stats(*section);
        info!(
            "Section {}: {} expected, {} on time, {} late, completion {}%",
            section.label(),
            s.expected,
            s.on_time,
            s.late,
            s.rate
        );
    }

    warn!(
        "{} core ready, state resident in memory",
        config.app.system_name
    );

    // 等待停机信号；停机前整体回写一次全部状态
    lifetime::shutdown::listen_for_shutdown().await;
    startup.sync.flush(&startup.store).await;
    warn!("Graceful shutdown: state flushed");

    Ok(())
}
