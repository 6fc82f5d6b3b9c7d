// ============================================================================
// LingoX - 加载进度条
// ============================================================================
//
// 文件: src/ui/progress.rs
// 职责: 目录加载过程的进度显示
// 边界:
//   - ✅ 进度条创建与样式
//   - ✅ 进度回调适配
//   - ❌ 不应包含加载逻辑
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

use crate::core::loader::ProgressCallback;
use crate::models::config::Config;
use crate::utils::constants::progress_chars;
use crate::utils::logger::Logger;

/// 加载进度条，不满足显示条件时为空操作
pub struct LoadProgress {
    bar: Option<ProgressBar>,
}

impl LoadProgress {
    /// 仅在配置允许、非详细模式且标准输出是终端时显示
    pub fn from_config(total: usize, message: String) -> Self {
        let enabled = Config::get_show_progress()
            && !Config::get_verbose()
            && atty::is(atty::Stream::Stdout)
            && total > 1;
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{prefix} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars(progress_chars::BAR);
        bar.set_style(style);
        bar.set_prefix(Logger::get_prefix("INFO"));
        bar.set_message(message);
        Self { bar: Some(bar) }
    }

    /// 供加载器调用的回调
    pub fn callback(&self) -> Option<ProgressCallback> {
        let bar = self.bar.clone()?;
        Some(Arc::new(move |completed: usize, _total: usize| {
            bar.set_position(completed as u64);
        }))
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
