// ============================================================================
// LingoX - 检查命令处理
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 处理目录检查命令
// 边界:
//   - ✅ 检查命令参数解析
//   - ✅ 检查结果汇总和退出码
//   - ❌ 不应包含具体检查规则
//   - ❌ 不应包含表格渲染细节
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{load_catalogs, output_results};
use crate::core::checker::{CatalogChecker, Severity};
use crate::models::config::Config;
use crate::ui::summary::{self, FileIssues};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查命令参数
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog files or directories (defaults to the workspace root)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Show locations and details for each issue
    #[arg(short, long)]
    pub detail: bool,
}

/// 处理检查命令
pub async fn handle_check(args: CheckArgs) -> Result<()> {
    if args.format != "json" {
        Logger::info(t!("check.start"));
    }

    let report = load_catalogs(&args.paths).await?;
    let checker = CatalogChecker::new(Config::get_check_options());

    let results: Vec<FileIssues> = report
        .catalogs
        .iter()
        .map(|loaded| FileIssues {
            path: loaded.path.clone(),
            issues: checker.check(&loaded.catalog),
        })
        .collect();

    let errors: usize = results.iter().map(|r| r.count(Severity::Error)).sum();
    let warnings: usize = results.iter().map(|r| r.count(Severity::Warning)).sum();

    output_results(&args.format, &results[..], args.detail, summary::print_issues_table)?;

    let failed = errors > 0 || (args.strict && warnings > 0) || !report.failures.is_empty();
    if args.format != "json" {
        if errors == 0 && warnings == 0 && report.failures.is_empty() {
            Logger::success(t!("check.all_good"));
        } else {
            Logger::info("");
            Logger::info(tf!("check.summary", results.len(), errors, warnings, report.failures.len()));
        }
    }

    if failed {
        if args.strict && errors == 0 && report.failures.is_empty() {
            Logger::error(t!("check.strict_failed"));
        }
        std::process::exit(1);
    }

    Ok(())
}
