// ============================================================================
// LingoX - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 检查、统计与语言列表的终端展示
// 边界:
//   - ✅ 检查问题表格显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含检查或统计逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::checker::{Issue, Severity};
use crate::models::stats::CatalogStats;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

const RULE: &str = "───────────────────────────────────────";

/// 单个文件的检查结果
#[derive(Debug, Clone, Serialize)]
pub struct FileIssues {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

impl FileIssues {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// 语言列表中的一行
#[derive(Debug, Clone, Serialize)]
pub struct LanguageRow {
    pub language: String,
    pub messages: usize,
    pub source: bool,
}

// ============================================================================
// 检查结果
// ============================================================================

/// 打印检查问题，按文件和上下文分组
pub fn print_issues_table(results: &[FileIssues], detail: bool) -> Result<()> {
    for file in results.iter().filter(|f| !f.issues.is_empty()) {
        Logger::info("");
        Logger::info(format!("{} {}", icons::CATALOG, file.path.display().to_string().bold()));
        Logger::info(RULE);

        let mut by_context: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in &file.issues {
            by_context.entry(&issue.context).or_default().push(issue);
        }

        for (context, issues) in by_context {
            Logger::info(tf!("check.context_header", context.cyan()));
            for issue in issues {
                print_issue(issue, detail);
            }
        }
    }
    Ok(())
}

fn print_issue(issue: &Issue, detail: bool) {
    let label = match issue.severity {
        Severity::Error => format!("{} {}", icons::ERROR, issue.kind).red(),
        Severity::Warning => format!("{} {}", icons::WARNING, issue.kind).yellow(),
    };
    Logger::info(format!("    {} {:?}", label, issue.source));

    if !detail {
        return;
    }
    if let Some(location) = &issue.location {
        Logger::info(format!("        {} {}", icons::ARROW, location.dimmed()));
    }
    if let Some(text) = &issue.detail {
        Logger::info(format!("        {} {}", icons::ARROW, text));
    }
}

// ============================================================================
// 统计信息
// ============================================================================

/// 打印翻译进度表格
pub fn print_stats_table(stats: &[CatalogStats], _detail: bool) -> Result<()> {
    Logger::info("");
    Logger::info(format!(
        "{:<40} {:<8} {:>9} {:>9} {:>11} {:>6} {:>9} {:>7}",
        t!("stats.header.file"),
        t!("stats.header.language"),
        t!("stats.header.messages"),
        t!("stats.header.finished"),
        t!("stats.header.unfinished"),
        t!("stats.header.empty"),
        t!("stats.header.obsolete"),
        t!("stats.header.done"),
    ));
    Logger::info(RULE);

    for row in stats {
        let done = format!("{:>6.1}%", row.completion());
        let done = if row.completion() >= 100.0 {
            done.green()
        } else if row.completion() >= 50.0 {
            done.yellow()
        } else {
            done.red()
        };
        Logger::info(format!(
            "{:<40} {:<8} {:>9} {:>9} {:>11} {:>6} {:>9} {}",
            shorten(&row.path.display().to_string(), 40),
            row.language.as_deref().unwrap_or("-"),
            row.messages,
            row.finished,
            row.unfinished,
            row.empty,
            row.obsolete,
            done,
        ));
    }

    let total = totals(stats);
    Logger::info(RULE);
    Logger::info(tf!(
        "stats.total",
        stats.len(),
        total.messages,
        total.finished,
        format!("{:.1}", total.completion())
    ));
    Ok(())
}

/// 所有目录的合计
pub fn totals(stats: &[CatalogStats]) -> CatalogStats {
    stats.iter().fold(CatalogStats::default(), |mut acc, row| {
        acc.contexts += row.contexts;
        acc.messages += row.messages;
        acc.finished += row.finished;
        acc.unfinished += row.unfinished;
        acc.empty += row.empty;
        acc.obsolete += row.obsolete;
        acc
    })
}

/// 保留路径末尾部分
fn shorten(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - width + 1).collect();
    format!("…{}", tail)
}

// ============================================================================
// 语言列表
// ============================================================================

/// 打印支持的语言
pub fn print_languages_table(rows: &[LanguageRow], _detail: bool) -> Result<()> {
    Logger::info("");
    Logger::info(t!("langs.supported"));
    Logger::info(RULE);
    for row in rows {
        let name = if row.source {
            format!("{} {}", row.language.bold(), t!("langs.source_marker").dimmed())
        } else {
            row.language.bold().to_string()
        };
        Logger::info(format!(
            "  {} {} {}",
            icons::LANGUAGE,
            name,
            tf!("langs.message_count", row.messages).dimmed()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_every_column() {
        let a = CatalogStats { messages: 3, finished: 2, unfinished: 1, ..CatalogStats::default() };
        let b = CatalogStats { messages: 2, empty: 1, obsolete: 1, ..CatalogStats::default() };
        let total = totals(&[a, b]);
        assert_eq!(total.messages, 5);
        assert_eq!(total.finished, 2);
        assert_eq!(total.active(), 4);
        assert_eq!(total.completion(), 50.0);
    }

    #[test]
    fn shorten_keeps_the_tail() {
        assert_eq!(shorten("short.ts", 40), "short.ts");
        assert_eq!(shorten("abcdefghij", 5), "…ghij");
    }
}
