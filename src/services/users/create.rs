use tracing::info;

use super::UserService;
use crate::errors::{Result, StrideError};
use crate::models::users::entities::{Section, User, UserRole};
use crate::models::users::requests::CreateUserRequest;

/// 由展示姓名派生登录用户名（小写、空白替换为下划线）
fn derive_username(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub async fn create_user(service: &UserService, mut user_data: CreateUserRequest) -> Result<User> {
    // 1. 必填字段校验（先于任何存储变更）
    if user_data.name.trim().is_empty() {
        return Err(StrideError::validation("Full name is required"));
    }
    if user_data.password.is_empty() {
        return Err(StrideError::validation("Initial password is required"));
    }

    // 2. 角色相关字段规整：管理员不属于任何分组，科目仅教师保留
    if user_data.role == Some(UserRole::Admin) {
        user_data.section = Some(Section::None);
    }
    if user_data.role != Some(UserRole::Teacher) {
        user_data.subject = None;
    }
    if user_data.username.is_none() {
        user_data.username = Some(derive_username(&user_data.name));
    }

    let user = service.store().add_user(user_data);
    service.sync().persist_users(service.store());

    info!("User {} ({}) created", user.username, user.role);
    Ok(user)
}
