//! 持久化存储适配层
//!
//! 面向键值的本地持久化抽象。读取失败（I/O 或解码）在内部记录日志并按
//! 「值缺失」处理，永不向调用方抛错；写入为即发即弃，失败同样只记录日志。
//! 后端以插件形式自注册，按配置选择，创建失败时回退到内存后端。

pub mod backends;
pub mod register;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

/// 读取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Found(String),
    NotFound,
}

#[async_trait::async_trait]
pub trait StateStore: Send + Sync {
    // 读取原始值；缺失或失败均为 NotFound
    async fn load_raw(&self, key: &str) -> LoadResult;
    // 写入原始值；失败内部记录
    async fn save_raw(&self, key: String, value: String);
}

/// 持久化使用的逻辑键
pub mod keys {
    // 当前会话用户
    pub const SESSION_USER: &str = "user";
    pub const USERS: &str = "users";
    pub const ASSIGNMENTS: &str = "assignments";
    pub const SUBMISSIONS: &str = "submissions";
}

/// 读取并反序列化一个逻辑键；缺失或损坏一律返回 None
pub async fn load<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    match store.load_raw(key).await {
        LoadResult::Found(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Failed to decode persisted key '{}': {}", key, e);
                None
            }
        },
        LoadResult::NotFound => None,
    }
}

/// 序列化并写入一个逻辑键；编码失败只记录日志
pub async fn save<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.save_raw(key.to_string(), raw).await,
        Err(e) => {
            error!("Failed to encode key '{}' for persistence: {}", key, e);
        }
    }
}
