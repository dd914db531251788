use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::declare_state_store_plugin;
use crate::persist::{LoadResult, StateStore};

declare_state_store_plugin!("json_file", JsonFileStateStore);

/// JSON 文件后端：每个逻辑键对应目录下一个 `<前缀><键>.json` 文件
pub struct JsonFileStateStore {
    dir: PathBuf,
    key_prefix: String,
}

impl JsonFileStateStore {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Self::with_dir(&config.store.file.dir, &config.store.key_prefix)
    }

    /// 指定目录创建（测试或嵌入场景）
    pub fn with_dir(dir: impl AsRef<Path>, key_prefix: &str) -> Result<Self, String> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create store dir {}: {e}", dir.display()))?;

        debug!(
            "JsonFileStateStore initialized at {} with prefix '{}'",
            dir.display(),
            key_prefix
        );
        Ok(Self {
            dir,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}.json", self.key_prefix, key))
    }
}

#[async_trait]
impl StateStore for JsonFileStateStore {
    async fn load_raw(&self, key: &str) -> LoadResult {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                debug!("Loaded key '{}' from {}", key, path.display());
                LoadResult::Found(raw)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No persisted value for key '{}'", key);
                LoadResult::NotFound
            }
            Err(e) => {
                error!("Failed to read key '{}' from {}: {}", key, path.display(), e);
                LoadResult::NotFound
            }
        }
    }

    async fn save_raw(&self, key: String, value: String) {
        let path = self.path_for(&key);
        // 先写临时文件再改名，避免进程中断留下半截 JSON
        let tmp = path.with_extension("json.tmp");

        if let Err(e) = tokio::fs::write(&tmp, &value).await {
            error!("Failed to write key '{}' to {}: {}", key, tmp.display(), e);
            return;
        }
        match tokio::fs::rename(&tmp, &path).await {
            Ok(()) => {
                debug!("Persisted key '{}' ({} bytes)", key, value.len());
            }
            Err(e) => {
                error!(
                    "Failed to move key '{}' into place at {}: {}",
                    key,
                    path.display(),
                    e
                );
            }
        }
    }
}
