pub mod assignments;
pub mod auth;
pub mod stats;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use stats::StatsService;
pub use submissions::SubmissionService;
pub use users::UserService;

use std::sync::Arc;

use crate::runtime::StateSync;
use crate::runtime::lifetime::startup::StartupContext;
use crate::store::EntityStore;

/// 业务层共享上下文
///
/// 存储与回写句柄显式传递给各个服务，不依赖全局单例。
#[derive(Clone)]
pub struct ServiceContext {
    pub store: Arc<EntityStore>,
    pub sync: Arc<StateSync>,
}

impl ServiceContext {
    pub fn new(store: Arc<EntityStore>, sync: Arc<StateSync>) -> Self {
        Self { store, sync }
    }
}

impl From<&StartupContext> for ServiceContext {
    fn from(startup: &StartupContext) -> Self {
        Self {
            store: startup.store.clone(),
            sync: startup.sync.clone(),
        }
    }
}
