//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_stride_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum StrideError {
            $($variant(String),)*
        }

        impl StrideError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StrideError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StrideError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StrideError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StrideError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StrideError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_stride_errors! {
    StoreOperation("E001", "Store Operation Error"),
    StorePluginNotFound("E002", "Store Plugin Not Found"),
    FileOperation("E003", "File Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Authentication("E008", "Authentication Error"),
}

impl StrideError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StrideError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for StrideError {
    fn from(err: std::io::Error) -> Self {
        StrideError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for StrideError {
    fn from(err: serde_json::Error) -> Self {
        StrideError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for StrideError {
    fn from(err: chrono::ParseError) -> Self {
        StrideError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StrideError::store_operation("test").code(), "E001");
        assert_eq!(StrideError::validation("test").code(), "E004");
        assert_eq!(StrideError::not_found("test").code(), "E005");
        assert_eq!(StrideError::authentication("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            StrideError::store_plugin_not_found("test").error_type(),
            "Store Plugin Not Found"
        );
        assert_eq!(
            StrideError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = StrideError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StrideError = io.into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("missing"));
    }

    #[test]
    fn test_format_simple() {
        let err = StrideError::authentication("sorry, wrong credentials");
        let formatted = err.format_simple();
        assert!(formatted.contains("Authentication Error"));
        assert!(formatted.contains("wrong credentials"));
    }
}
