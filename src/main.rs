use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use campus_connect::api::{HttpPortalApi, PortalApi};
use campus_connect::config::AppConfig;
use campus_connect::directory::{AssignmentDirectory, DirectorySnapshot};
use campus_connect::errors::Result;
use campus_connect::guard::AccessGuard;
use campus_connect::models::auth::AdminLoginRequest;
use campus_connect::session::{Session, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init()?;
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
        "Starting {}...
        Project: {}
        Version: {}
        Service: {}",
        config.app.portal_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.service.base_url
    );

    // 组装核心组件
    let sessions = Arc::new(SessionStore::new());
    let api: Arc<dyn PortalApi> =
        Arc::new(HttpPortalApi::new(config, Arc::clone(&sessions))?);
    let access_guard = AccessGuard::new(Arc::clone(&sessions));
    let directory = Arc::new(AssignmentDirectory::new(
        Arc::clone(&api),
        access_guard,
        Arc::clone(&sessions),
    ));

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time)
            .num_milliseconds()
    );

    // 预处理完成 //

    // 冒烟流程：用环境变量提供的管理员凭证登录，拉取目录并打印派生状态
    let credentials = std::env::var("PORTAL_ADMIN_NAME")
        .ok()
        .zip(std::env::var("PORTAL_ADMIN_PASSWORD").ok());
    let Some((name, password)) = credentials else {
        warn!("PORTAL_ADMIN_NAME / PORTAL_ADMIN_PASSWORD not set, nothing to do");
        return Ok(());
    };

    let login = api.admin_login(AdminLoginRequest { name, password }).await?;
    sessions.establish(Session::admin(login.token, login.name));
    info!("Admin session established");

    directory.refresh().await?;
    let now = chrono::Utc::now();
    match directory.snapshot() {
        DirectorySnapshot::Admin(assignments) => {
            info!("Directory holds {} assignment(s)", assignments.len());
            for assignment in assignments {
                info!(
                    "{} (due {}): {} submission(s), {} graded",
                    assignment.title,
                    assignment.due_date,
                    assignment.submissions.len(),
                    assignment
                        .submissions
                        .iter()
                        .filter(|sub| sub.grade.is_some())
                        .count()
                );
                for submission in &assignment.submissions {
                    info!(
                        "  {} -> {}",
                        submission.student.name,
                        assignment.status_for(&submission.student.id, now)
                    );
                }
            }
        }
        _ => warn!("Directory snapshot is empty"),
    }

    Ok(())
}
