//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::todo_dir;
use crate::error::{Result, TodoError};

/// 未配置时使用的后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// 覆盖后端地址的环境变量（只在启动时读取一次）
pub const API_URL_ENV: &str = "TODO_API_URL";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 后端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 单个请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(todo_dir()?.join("config.toml"))
}

/// 从指定路径加载配置（不存在则返回默认值）
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 加载配置；读取或解析失败时退回默认值并记录警告
pub fn load_config() -> Config {
    let loaded = config_path().and_then(|path| load_config_from(&path));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            Config::default()
        }
    }
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// 解析后端地址：命令行参数 > 环境变量 > 配置文件
///
/// 返回去掉末尾 `/` 的地址；结果为空时报错。
pub fn resolve_base_url(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> Result<String> {
    let chosen = [cli_value, env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(config.api.base_url.trim());

    let url = chosen.trim_end_matches('/');
    if url.is_empty() {
        return Err(TodoError::config("API base URL is empty"));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(TodoError::config(format!(
            "API base URL must start with http:// or https://, got '{}'",
            url
        )));
    }
    Ok(url.to_string())
}
