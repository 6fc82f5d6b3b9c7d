// ============================================================================
// LingoX - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 命令共用的加载与输出辅助
//   - ❌ 不应包含 TS 解析逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod fmt;
pub mod init;
pub mod langs;
pub mod lookup;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::loader::{CatalogLoader, LoadReport};
use crate::models::config::{Config, RuntimeArgs};
use crate::ui::progress::LoadProgress;
use crate::utils::logger::Logger;
use crate::{t, tf};
use check::{handle_check, CheckArgs};
use fmt::{handle_fmt, FmtArgs};
use init::{handle_init, InitArgs};
use langs::{handle_langs, LangsArgs};
use lookup::{handle_lookup, LookupArgs};
use stats::{handle_stats, StatsArgs};

/// LingoX - Qt Linguist translation catalog tool
#[derive(Debug, Parser)]
#[command(name = "lingox")]
#[command(about = "Qt Linguist .ts translation catalog tool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Workspace root directory
    #[arg(short = 'C', long, global = true)]
    pub workspace_root: Option<String>,

    /// Maximum number of catalogs loaded concurrently
    #[arg(short = 'j', long, global = true)]
    pub max_concurrency: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check catalogs for unfinished, duplicate and inconsistent entries
    Check(CheckArgs),
    /// Show translation progress per catalog
    Stats(StatsArgs),
    /// Look up the translation of a source text
    Lookup(LookupArgs),
    /// Rewrite catalogs in the canonical layout
    Fmt(FmtArgs),
    /// List available languages and resolve a requested one
    Langs(LangsArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let runtime_args = build_runtime_args(&cli);
    Config::merge_runtime_args(runtime_args)?;

    Logger::init_colors(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());

    match cli.command {
        Commands::Check(args) => handle_check(args).await,
        Commands::Stats(args) => handle_stats(args).await,
        Commands::Lookup(args) => handle_lookup(args),
        Commands::Fmt(args) => handle_fmt(args).await,
        Commands::Langs(args) => handle_langs(args).await,
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        max_concurrency: cli.max_concurrency,
        workspace_root: cli.workspace_root.clone(),
        language: cli.language.clone(),
    }
}

/// 解析路径并加载目录，逐个报告失败的文件
pub(crate) async fn load_catalogs(paths: &[PathBuf]) -> Result<LoadReport> {
    let loader = CatalogLoader::from_config();
    let files = loader.resolve(paths)?;

    if files.is_empty() {
        Logger::warn(tf!("load.none_found", loader.root().display()));
        return Ok(LoadReport::default());
    }
    if Config::get_verbose() {
        Logger::info(tf!("load.found", files.len()));
    }

    let progress = LoadProgress::from_config(files.len(), t!("load.progress"));
    let report = loader.load_all(files, progress.callback()).await;
    progress.finish();

    for failure in &report.failures {
        Logger::error(tf!("load.failed", failure.path.display(), failure.error));
    }
    Ok(report)
}

/// 按格式输出结果
pub(crate) fn output_results<T, F>(format: &str, data: &T, detail: bool, print_table: F) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T, bool) -> Result<()>,
{
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        _ => {
            print_table(data, detail)?;
        }
    }
    Ok(())
}
