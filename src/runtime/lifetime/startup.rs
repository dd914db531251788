//! 启动生命周期：后端创建、状态水合与初始管理员
//!
//! `prepare_core_startup` 在水合完成后才返回上下文，
//! 在此之前外界拿不到存储句柄，也就无法读取或变更状态。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::{Section, User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::persist::{self, StateStore, keys, register::get_state_store_plugin};
use crate::runtime::sync::StateSync;
use crate::store::EntityStore;

pub struct StartupContext {
    pub store: Arc<EntityStore>,
    pub sync: Arc<StateSync>,
}

/// 创建持久化后端实例
async fn create_state_store() -> Result<Arc<dyn StateStore>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let backend_type = &config.store.backend;

    warn!("Attempting to create {} state store backend", backend_type);

    // 根据配置选择持久化后端
    if let Some(constructor) = get_state_store_plugin(backend_type) {
        match constructor().await {
            Ok(store) => {
                warn!("Successfully created {} state store backend", backend_type);
                return Ok(Arc::from(store));
            }
            Err(e) => {
                warn!("Failed to create {} state store: {}", backend_type, e);
            }
        }
    } else {
        warn!("State store backend '{}' not found in registry", backend_type);
    }

    // 配置的后端不可用时回退到内存后端（状态不落盘，仅保证本次会话可用）
    if backend_type != "memory" {
        warn!("Falling back to in-memory state store");
        if let Some(fallback_constructor) = get_state_store_plugin("memory") {
            match fallback_constructor().await {
                Ok(store) => {
                    warn!("Successfully created fallback in-memory state store backend");
                    return Ok(Arc::from(store));
                }
                Err(fallback_e) => {
                    warn!("Failed to create fallback memory store: {}", fallback_e);
                }
            }
        }
    }

    Err(format!("No state store backend available (tried: {backend_type})").into())
}

/// 水合：并发读取四个逻辑键，只用有值的键覆盖内存缺省值。
/// 单个键的读取失败或解码失败按缺失处理，不影响其余键。
pub async fn hydrate(store: &EntityStore, backend: &dyn StateStore) {
    let (session_user, users, assignments, submissions) = tokio::join!(
        persist::load::<Option<User>>(backend, keys::SESSION_USER),
        persist::load::<Vec<User>>(backend, keys::USERS),
        persist::load::<Vec<Assignment>>(backend, keys::ASSIGNMENTS),
        persist::load::<Vec<Submission>>(backend, keys::SUBMISSIONS),
    );

    if let Some(session_user) = session_user {
        store.set_session_user(session_user);
    }
    if let Some(users) = users {
        store.replace_users(users);
    }
    if let Some(assignments) = assignments {
        store.replace_assignments(assignments);
    }
    if let Some(submissions) = submissions {
        store.replace_submissions(submissions);
    }

    info!(
        "State hydrated: {} user(s), {} assignment(s), {} submission(s)",
        store.users().len(),
        store.assignments().len(),
        store.submissions().len()
    );
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 如果水合后没有任何用户，则创建一个默认的 admin 账号
async fn seed_admin(store: &EntityStore, sync: &StateSync) {
    let count = store.users().len();
    if count > 0 {
        debug!("Store already has {} user(s), skipping admin seed", count);
        return;
    }
    info!("No users found after hydration, creating default admin account...");

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let admin = store.add_user(CreateUserRequest {
        name: "Administrator".to_string(),
        password,
        username: Some("admin".to_string()),
        role: Some(UserRole::Admin),
        section: Some(Section::None),
        subject: None,
    });
    sync.persist_users(store);

    info!(
        "Default admin account created successfully (ID: {}, username: {})",
        admin.id, admin.username
    );
}

/// 准备核心启动的上下文
/// 包括持久化后端、状态水合与初始账号
pub async fn prepare_core_startup() -> StartupContext {
    if cfg!(debug_assertions) {
        crate::persist::register::debug_state_store_registry();
        debug!("Debug mode: state store registry is enabled");
    }

    let backend = create_state_store()
        .await
        .expect("Failed to create state store backend");

    let store = Arc::new(EntityStore::new());
    hydrate(&store, backend.as_ref()).await;
    warn!("State store hydrated, accepting reads and mutations");

    let sync = Arc::new(StateSync::new(backend));

    // 初始化默认管理员账号（如果需要）
    seed_admin(&store, &sync).await;

    StartupContext { store, sync }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;
    use crate::persist::backends::memory::MemoryStateStore;

    fn seeded_defaults() -> EntityStore {
        let store = EntityStore::new();
        store.add_user(CreateUserRequest {
            name: "Default User".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        });
        store
    }

    #[tokio::test]
    async fn test_partial_hydration_keeps_unrelated_defaults() {
        let backend = MemoryStateStore::new().unwrap();
        // 持久层只有 assignments 一个键
        backend
            .save_raw(
                keys::ASSIGNMENTS.to_string(),
                serde_json::json!([{
                    "id": "a-1",
                    "title": "Lab Report #1",
                    "description": "",
                    "due_date": "2026-05-01T17:00:00Z",
                    "section": "einstein_g11",
                    "teacher_id": "u-t1",
                    "teacher_name": "Ada Lovelace",
                    "subject": "Physics",
                    "attachments": [],
                    "created_at": "2026-04-01T08:00:00Z"
                }])
                .to_string(),
            )
            .await;

        let store = seeded_defaults();
        hydrate(&store, &backend).await;

        // assignments 被持久值覆盖，users/submissions 保持水合前缺省值
        assert_eq!(store.assignments().len(), 1);
        assert_eq!(store.assignments()[0].id, "a-1");
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].name, "Default User");
        assert!(store.submissions().is_empty());
        assert!(store.session_user().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_key_does_not_abort_other_keys() {
        let backend = MemoryStateStore::new().unwrap();
        backend
            .save_raw(keys::USERS.to_string(), "{broken".to_string())
            .await;
        backend
            .save_raw(keys::SUBMISSIONS.to_string(), "[]".to_string())
            .await;

        let store = seeded_defaults();
        hydrate(&store, &backend).await;

        // 损坏键按缺失处理，其余键正常水合
        assert_eq!(store.users().len(), 1);
        assert!(store.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_restores_session_user() {
        let backend = MemoryStateStore::new().unwrap();
        backend
            .save_raw(
                keys::SESSION_USER.to_string(),
                serde_json::json!({
                    "id": "u-1",
                    "username": "jane_doe",
                    "password": "secret",
                    "name": "Jane Doe",
                    "role": "student",
                    "section": "galilei_g12",
                    "subject": null
                })
                .to_string(),
            )
            .await;

        let store = EntityStore::new();
        hydrate(&store, &backend).await;

        let session = store.session_user().expect("session user should hydrate");
        assert_eq!(session.id, "u-1");
        assert_eq!(session.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_seed_admin_only_when_empty() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let sync = StateSync::new(backend);

        let empty = EntityStore::new();
        seed_admin(&empty, &sync).await;
        let users = empty.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert_eq!(users[0].role, UserRole::Admin);
        assert_eq!(users[0].section, Section::None);

        let populated = seeded_defaults();
        seed_admin(&populated, &sync).await;
        assert_eq!(populated.users().len(), 1);
        assert_ne!(populated.users()[0].username, "admin");
    }
}
