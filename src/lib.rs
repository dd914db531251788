//! Stride Core - Mustang Stride 学业跟踪平台状态核心
//!
//! 基于 Tokio 构建的客户端本地状态与持久化同步层。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `persist`: 持久化存储适配层（JSON 文件/内存）
//! - `runtime`: 运行时生命周期管理（水合与回写）
//! - `services`: 业务逻辑层
//! - `store`: 内存实体存储
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod persist;
pub mod runtime;
pub mod services;
pub mod store;
pub mod utils;
