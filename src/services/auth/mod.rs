pub mod login;
pub mod logout;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::auth::requests::LoginRequest;
use crate::models::users::entities::User;
use crate::runtime::StateSync;
use crate::store::EntityStore;

/// 登录失败提示的固定展示时长（秒），超时清除由展示层负责
pub const LOGIN_ERROR_DISPLAY_SECS: u64 = 3;

pub struct AuthService {
    ctx: ServiceContext,
}

impl AuthService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    pub(crate) fn sync(&self) -> &StateSync {
        &self.ctx.sync
    }

    // 登录
    pub async fn login(&self, request: LoginRequest) -> Result<User> {
        login::handle_login(self, request).await
    }

    // 登出
    pub async fn logout(&self) {
        logout::handle_logout(self).await
    }
}
