// ============================================================================
// LingoX - 统计命令处理
// ============================================================================
//
// 文件: src/cli/stats.rs
// 职责: 输出每个目录的翻译进度
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{load_catalogs, output_results};
use crate::models::stats::CatalogStats;
use crate::ui::summary;

/// 统计命令参数
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Catalog files or directories (defaults to the workspace root)
    pub paths: Vec<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// 处理统计命令
pub async fn handle_stats(args: StatsArgs) -> Result<()> {
    let report = load_catalogs(&args.paths).await?;

    let stats: Vec<CatalogStats> = report
        .catalogs
        .iter()
        .map(|loaded| {
            let mut row = CatalogStats::from_catalog(&loaded.path, &loaded.catalog);
            row.language = loaded.language();
            row
        })
        .collect();

    output_results(&args.format, &stats[..], false, summary::print_stats_table)?;

    if !report.failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
