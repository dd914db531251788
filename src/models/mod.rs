pub mod assignments;
pub mod auth;
pub mod files;
pub mod stats;
pub mod submissions;
pub mod users;

/// 应用启动时间（用于统计预处理耗时）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
