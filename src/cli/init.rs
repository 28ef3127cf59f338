//! 写入默认配置文件

use std::path::Path;

use crate::error::Result;
use crate::storage::config::{config_path, save_config_to, Config};

/// 写入默认配置；文件已存在且未指定 `force` 时不覆盖
///
/// 返回是否写入了文件。
pub fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    save_config_to(path, &Config::default())?;
    Ok(true)
}

pub fn execute(force: bool) {
    let result = config_path().and_then(|path| {
        let written = write_default_config(&path, force)?;
        Ok((path, written))
    });

    match result {
        Ok((path, true)) => {
            tracing::info!(path = %path.display(), "wrote default config");
            println!("Wrote {}", path.display());
        }
        Ok((path, false)) => {
            println!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        Err(e) => {
            eprintln!("Failed to write config: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::load_config_from;

    #[test]
    fn test_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_default_config(&path, false).unwrap());
        assert_eq!(load_config_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"Light\"\n").unwrap();

        assert!(!write_default_config(&path, false).unwrap());
        assert_eq!(load_config_from(&path).unwrap().theme.name, "Light");

        assert!(write_default_config(&path, true).unwrap());
        assert_eq!(load_config_from(&path).unwrap().theme.name, "Dark");
    }
}
