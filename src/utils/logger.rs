// ============================================================================
// LingoX - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的控制台输出
// 边界:
//   - ✅ 日志级别前缀和颜色
//   - ✅ 彩色输出开关
//   - ✅ 诊断日志 (tracing) 初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含日志内容生成
//
// ============================================================================

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use super::constants::APP_NAME;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    /// 根据配置和终端类型决定是否着色
    pub fn init_colors(colored: bool) {
        let enabled = colored && atty::is(atty::Stream::Stdout);
        colored::control::set_override(enabled);
    }

    /// 初始化 tracing 诊断输出 (stderr)，RUST_LOG 优先
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "lingox=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    pub fn get_prefix(level: &str) -> String {
        match level {
            "WARN" => "[WARN]".yellow().to_string(),
            "ERROR" => "[ERROR]".red().to_string(),
            "SUCCESS" => format!("[{}]", APP_NAME).green().to_string(),
            _ => format!("[{}]", APP_NAME).cyan().to_string(),
        }
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("INFO"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("WARN"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Self::get_prefix("ERROR"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("SUCCESS"), msg.as_ref());
    }
}
