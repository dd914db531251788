use tracing::info;

use super::AuthService;
use crate::errors::{Result, StrideError};
use crate::models::auth::requests::LoginRequest;
use crate::models::users::entities::User;
use crate::utils::password::verify_password;

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<User> {
    let wanted = request.name.trim().to_lowercase();
    let users = service.store().users();

    // 1. 按展示姓名查找候选：大小写不敏感、忽略首尾空白，重名时首个匹配生效
    let candidate = users.iter().find(|u| u.name.trim().to_lowercase() == wanted);

    match candidate {
        Some(user) if verify_password(&request.password, &user.password) => {
            // 2. 建立会话并回写会话键
            service.store().set_session_user(Some(user.clone()));
            service.sync().persist_session_user(service.store());
            info!("User {} logged in successfully", user.username);
            Ok(user.clone())
        }
        // 不透露姓名与密码哪个有误
        _ => Err(StrideError::authentication("sorry, wrong credentials")),
    }
}
