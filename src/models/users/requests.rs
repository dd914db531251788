use super::entities::{Section, UserRole};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户创建请求（缺省字段由存储层补全）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    // 未提供时由姓名派生（小写、空白替换为下划线）
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub section: Option<Section>,
    pub subject: Option<String>,
}

// 用户更新请求（字段级合并）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub section: Option<Section>,
    pub subject: Option<String>,
}
