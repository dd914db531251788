//! 状态回写控制器
//!
//! 水合完成后，每次实体变更都触发受影响集合整体的异步回写（非增量）。
//! 回写不被调用方等待，跨集合之间没有事务性：级联删除后的两次回写之间
//! 进程崩溃会让持久层短暂不一致，由下一次整体回写自愈。

use std::sync::Arc;

use serde::Serialize;

use crate::persist::{self, StateStore, keys};
use crate::store::EntityStore;

pub struct StateSync {
    backend: Arc<dyn StateStore>,
}

impl StateSync {
    pub fn new(backend: Arc<dyn StateStore>) -> Self {
        Self { backend }
    }

    /// 即发即弃地回写一个逻辑键（序列化在当前快照上立即完成）
    fn spawn_save<T: Serialize + Send + Sync + 'static>(&self, key: &'static str, value: T) {
        let backend = self.backend.clone();
        tokio::spawn(async move {
            persist::save(backend.as_ref(), key, &value).await;
        });
    }

    pub fn persist_users(&self, store: &EntityStore) {
        self.spawn_save(keys::USERS, store.users());
    }

    pub fn persist_assignments(&self, store: &EntityStore) {
        self.spawn_save(keys::ASSIGNMENTS, store.assignments());
    }

    pub fn persist_submissions(&self, store: &EntityStore) {
        self.spawn_save(keys::SUBMISSIONS, store.submissions());
    }

    /// 会话用户回写；登出后写入 null
    pub fn persist_session_user(&self, store: &EntityStore) {
        self.spawn_save(keys::SESSION_USER, store.session_user());
    }

    /// 等待式整体回写（优雅停机时使用）
    pub async fn flush(&self, store: &EntityStore) {
        persist::save(
            self.backend.as_ref(),
            keys::SESSION_USER,
            &store.session_user(),
        )
        .await;
        persist::save(self.backend.as_ref(), keys::USERS, &store.users()).await;
        persist::save(
            self.backend.as_ref(),
            keys::ASSIGNMENTS,
            &store.assignments(),
        )
        .await;
        persist::save(
            self.backend.as_ref(),
            keys::SUBMISSIONS,
            &store.submissions(),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;
    use crate::persist::LoadResult;
    use crate::persist::backends::memory::MemoryStateStore;

    async fn drain_spawned_tasks() {
        // 即发即弃任务没有句柄，让出调度直至其全部完成
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_persist_users_writes_whole_collection() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let store = EntityStore::new();
        let sync = StateSync::new(backend.clone());

        store.add_user(CreateUserRequest {
            name: "Jane Doe".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        });
        sync.persist_users(&store);
        drain_spawned_tasks().await;

        match backend.load_raw(keys::USERS).await {
            LoadResult::Found(raw) => {
                assert!(raw.contains("Jane Doe"));
                assert!(raw.starts_with('['));
            }
            LoadResult::NotFound => panic!("users collection should be persisted"),
        }
    }

    #[tokio::test]
    async fn test_session_key_null_after_logout() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let store = EntityStore::new();
        let sync = StateSync::new(backend.clone());

        store.set_session_user(None);
        sync.persist_session_user(&store);
        drain_spawned_tasks().await;

        assert_eq!(
            backend.load_raw(keys::SESSION_USER).await,
            LoadResult::Found("null".to_string())
        );
    }

    #[tokio::test]
    async fn test_flush_writes_all_keys() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let store = EntityStore::new();
        let sync = StateSync::new(backend.clone());

        sync.flush(&store).await;

        for key in [
            keys::SESSION_USER,
            keys::USERS,
            keys::ASSIGNMENTS,
            keys::SUBMISSIONS,
        ] {
            assert!(
                matches!(backend.load_raw(key).await, LoadResult::Found(_)),
                "key '{key}' should be written by flush"
            );
        }
    }
}
