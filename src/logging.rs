//! tracing 初始化
//!
//! TUI 模式写入 `~/.todo/todo.log`，避免日志打乱终端画面；
//! `serve` 模式写 stderr。级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::storage;

const DEFAULT_LEVEL: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// 日志文件路径
pub fn log_path() -> Result<PathBuf> {
    Ok(storage::ensure_todo_dir()?.join("todo.log"))
}

/// 日志追加写入文件，返回文件路径
pub fn init_file() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // 重复初始化（例如测试里）时忽略
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .try_init();

    Ok(path)
}

/// 日志写入 stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
