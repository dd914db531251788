use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub store: StoreConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Mustang Stride".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 持久化存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(rename = "type")]
    pub backend: String, // 后端插件名称（json_file/memory）
    pub key_prefix: String, // 逻辑键前缀
    pub file: FileStoreConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "json_file".to_string(),
            key_prefix: "stride_".to_string(),
            file: FileStoreConfig::default(),
        }
    }
}

/// JSON 文件后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub dir: String, // 状态文件目录
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            dir: "./data".to_string(),
        }
    }
}
