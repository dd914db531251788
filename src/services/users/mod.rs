pub mod create;
pub mod delete;
pub mod update;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::users::entities::User;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::runtime::StateSync;
use crate::store::EntityStore;

pub struct UserService {
    ctx: ServiceContext,
}

impl UserService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    pub(crate) fn sync(&self) -> &StateSync {
        &self.ctx.sync
    }

    // 创建用户
    pub async fn create_user(&self, user_data: CreateUserRequest) -> Result<User> {
        create::create_user(self, user_data).await
    }

    // 删除用户
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        delete::delete_user(self, user_id).await
    }

    // 更新用户信息（含管理员重置密码）
    pub async fn update_user(
        &self,
        user_id: &str,
        update_data: UpdateUserRequest,
    ) -> Result<Option<User>> {
        update::update_user(self, user_id, update_data).await
    }
}
