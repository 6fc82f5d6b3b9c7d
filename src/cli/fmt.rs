// ============================================================================
// LingoX - 格式化命令处理
// ============================================================================
//
// 文件: src/cli/fmt.rs
// 职责: 按 lupdate 布局重写目录文件
// 边界:
//   - ✅ 重写前校验内容不丢失
//   - ✅ --check 模式仅报告差异
//   - ❌ 不应包含序列化细节
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

use super::load_catalogs;
use crate::core::reader::read_catalog;
use crate::core::writer::write_catalog;
use crate::models::catalog::Catalog;
use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 格式化命令参数
#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Catalog files or directories (defaults to the workspace root)
    pub paths: Vec<PathBuf>,

    /// Only report files that would change
    #[arg(long)]
    pub check: bool,
}

/// 单个文件的格式化结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Unchanged,
    Changed,
    Lossy,
}

/// 处理格式化命令
pub async fn handle_fmt(args: FmtArgs) -> Result<()> {
    let report = load_catalogs(&args.paths).await?;
    let verbose = Config::get_verbose();

    let mut changed = 0;
    let mut lossy = 0;
    for loaded in &report.catalogs {
        let original = tokio::fs::read_to_string(&loaded.path)
            .await
            .with_context(|| format!("Failed to read {}", loaded.path.display()))?;

        let (outcome, rendered) = render(&loaded.catalog, &original);
        match outcome {
            Outcome::Lossy => {
                lossy += 1;
                Logger::error(tf!("fmt.lossy", loaded.path.display()));
                for what in &loaded.catalog.unsupported {
                    Logger::warn(tf!("fmt.unsupported", what));
                }
            }
            Outcome::Unchanged => {
                if verbose {
                    Logger::info(tf!("fmt.unchanged", loaded.path.display()));
                }
            }
            Outcome::Changed if args.check => {
                changed += 1;
                Logger::warn(tf!("fmt.would_change", loaded.path.display()));
            }
            Outcome::Changed => {
                changed += 1;
                tokio::fs::write(&loaded.path, rendered)
                    .await
                    .with_context(|| format!("Failed to write {}", loaded.path.display()))?;
                Logger::info(tf!("fmt.rewritten", loaded.path.display()));
            }
        }
    }

    if changed == 0 && lossy == 0 {
        Logger::success(tf!("fmt.all_formatted", report.catalogs.len()));
    } else if args.check {
        Logger::info(tf!("fmt.check_summary", changed));
    } else {
        Logger::info(tf!("fmt.summary", changed));
    }

    if lossy > 0 || !report.failures.is_empty() || (args.check && changed > 0) {
        if args.check && changed > 0 {
            Logger::info(t!("fmt.run_hint"));
        }
        std::process::exit(1);
    }
    Ok(())
}

/// 序列化目录，并确认重新解析后得到相同的目录
///
/// 读取时跳过的内容不在模型中，重写必然丢失，因此也视为有损
fn render(catalog: &Catalog, original: &str) -> (Outcome, String) {
    let rendered = write_catalog(catalog);
    let preserved = match read_catalog(&rendered) {
        Ok(reparsed) => catalog.is_lossless() && reparsed == *catalog,
        Err(e) => {
            tracing::debug!("Rendered catalog does not parse: {}", e);
            false
        }
    };

    let outcome = if !preserved {
        Outcome::Lossy
    } else if rendered == original.trim_start_matches('\u{feff}') {
        Outcome::Unchanged
    } else {
        Outcome::Changed
    };
    (outcome, rendered)
}
