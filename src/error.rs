//! 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! `SyncOp` 把底层错误映射成 UI 上显示的那一行错误文案。

use std::io;
use thiserror::Error;

/// Todo 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（配置文件、日志文件等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 网络层错误（连接失败、超时、响应体无法解码）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回非 2xx
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status {
        status: u16,
        /// 服务端 `{message}` 字段（如果有）
        message: Option<String>,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Transport 错误
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// 远端同步操作类型，决定失败时展示给用户的文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOp {
    Fetch,
    Create,
    Update,
    Delete,
}

impl SyncOp {
    /// 把一次失败映射成 error slot 中显示的文本
    pub fn user_message(&self, err: &TodoError) -> String {
        match self {
            SyncOp::Fetch => "An unexpected error occurred while fetching the todos.".to_string(),
            SyncOp::Create => match err {
                TodoError::Status {
                    message: Some(message),
                    ..
                } if !message.is_empty() => message.clone(),
                TodoError::Status { .. } => "Failed to create todo".to_string(),
                _ => "An unexpected error occurred while creating the todo.".to_string(),
            },
            SyncOp::Update => "Failed to update todo".to_string(),
            SyncOp::Delete => "Failed to delete todo".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncOp::Fetch => "fetch",
            SyncOp::Create => "create",
            SyncOp::Update => "update",
            SyncOp::Delete => "delete",
        }
    }
}
