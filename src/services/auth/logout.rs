use tracing::info;

use super::AuthService;

pub async fn handle_logout(service: &AuthService) {
    // 清除会话用户（临时登录表单状态随之作废）并回写会话键
    service.store().set_session_user(None);
    service.sync().persist_session_user(service.store());
    info!("Session cleared");
}

#[cfg(test)]
mod tests {
    use crate::models::auth::requests::LoginRequest;
    use crate::models::users::requests::CreateUserRequest;
    use crate::persist::StateStore;
    use crate::persist::backends::memory::MemoryStateStore;
    use crate::runtime::StateSync;
    use crate::services::ServiceContext;
    use crate::services::auth::AuthService;
    use crate::store::EntityStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_logout_clears_session() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let ctx = ServiceContext::new(
            Arc::new(EntityStore::new()),
            Arc::new(StateSync::new(backend)),
        );
        let service = AuthService::new(ctx);

        service.store().add_user(CreateUserRequest {
            name: "Jane Doe".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        });
        service
            .login(LoginRequest {
                name: "Jane Doe".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert!(service.store().session_user().is_some());

        service.logout().await;
        assert!(service.store().session_user().is_none());
    }
}
