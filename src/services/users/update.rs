use tracing::info;

use super::UserService;
use crate::errors::Result;
use crate::models::users::entities::User;
use crate::models::users::requests::UpdateUserRequest;

pub async fn update_user(
    service: &UserService,
    user_id: &str,
    update_data: UpdateUserRequest,
) -> Result<Option<User>> {
    // 字段级合并；不存在的 ID 静默无操作（不回写）
    let updated = service.store().update_user(user_id, update_data);
    if let Some(user) = &updated {
        service.sync().persist_users(service.store());
        info!("User {} updated", user.id);
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;
    use crate::persist::StateStore;
    use crate::persist::backends::memory::MemoryStateStore;
    use crate::runtime::StateSync;
    use crate::services::ServiceContext;
    use crate::store::EntityStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_password_reset_via_update() {
        let backend: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new().unwrap());
        let ctx = ServiceContext::new(
            Arc::new(EntityStore::new()),
            Arc::new(StateSync::new(backend)),
        );
        let service = UserService::new(ctx);

        let user = service.store().add_user(CreateUserRequest {
            name: "Jane Doe".to_string(),
            password: "old".to_string(),
            ..Default::default()
        });

        let updated = service
            .update_user(
                &user.id,
                UpdateUserRequest {
                    password: Some("fresh".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(updated.password, "fresh");

        // 不存在的 ID 静默无操作
        let missing = service
            .update_user("u-missing", UpdateUserRequest::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
