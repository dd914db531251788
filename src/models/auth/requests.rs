use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录请求：以展示姓名而非用户名匹配账号
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}
