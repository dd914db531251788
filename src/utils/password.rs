//! 凭证校验
//!
//! 历史客户端数据以明文存储密码，这里保持明文等值比较以兼容存量数据。
//! 所有调用方统一经由本接口校验，替换校验方式不影响调用点。

/// 校验密码
pub fn verify_password(supplied: &str, stored: &str) -> bool {
    supplied == stored
}
