// ============================================================================
// LingoX - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 加载配置并启动命令行
//
// ============================================================================

use lingox::cli::run_cli;
use lingox::models::config::Config;
use lingox::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = Config::initialize() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }

    if let Err(e) = run_cli().await {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
