// ============================================================================
// LingoX - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::Config;
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Configuration file path
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    if args.config.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.config.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    match Config::create_default_config_file(&args.config) {
        Ok(_) => {
            Logger::success(tf!("init.config_created", args.config.display()));
            Logger::info(t!("init.next_steps"));
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        handle_init(InitArgs { config: path.clone(), force: false }).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        handle_init(InitArgs { config: path.clone(), force: true }).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}
