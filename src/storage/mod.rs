pub mod config;

use std::path::PathBuf;

use crate::error::{Result, TodoError};

/// 获取 ~/.todo/ 目录路径
pub fn todo_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".todo"))
        .ok_or_else(|| TodoError::config("Cannot find home directory"))
}

/// 确保 ~/.todo/ 目录存在
pub fn ensure_todo_dir() -> Result<PathBuf> {
    let dir = todo_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
