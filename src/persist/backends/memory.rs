use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::declare_state_store_plugin;
use crate::persist::{LoadResult, StateStore};

declare_state_store_plugin!("memory", MemoryStateStore);

/// 内存后端：进程退出即丢失，作为回退方案与测试替身
#[derive(Default)]
pub struct MemoryStateStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Result<Self, String> {
        Ok(Self::default())
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load_raw(&self, key: &str) -> LoadResult {
        if let Some(value) = self.inner.read().await.get(key) {
            debug!("Successfully retrieved key: {}", key);
            LoadResult::Found(value.clone())
        } else {
            debug!("Key not found in memory store: {}", key);
            LoadResult::NotFound
        }
    }

    async fn save_raw(&self, key: String, value: String) {
        self.inner.write().await.insert(key, value);
    }
}
