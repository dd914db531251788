use tracing::info;

use super::UserService;
use crate::errors::Result;

pub async fn delete_user(service: &UserService, user_id: &str) -> Result<()> {
    // 不存在的 ID 静默无操作；删除不级联作业与提交
    if service.store().delete_user(user_id) {
        service.sync().persist_users(service.store());
        info!("User {} deleted", user_id);
    }
    Ok(())
}
