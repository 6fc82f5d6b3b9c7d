// ============================================================================
// LingoX - 目录统计数据模型
// ============================================================================
//
// 文件: src/models/stats.rs
// 职责: 单个翻译目录的完成度统计
// 边界:
//   - ✅ 统计数据结构定义
//   - ✅ 从目录计算统计
//   - ✅ 数据序列化
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含文件读取
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::catalog::{Catalog, TranslationStatus};

/// 目录统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// 文件路径
    pub path: PathBuf,
    /// 目标语言
    pub language: Option<String>,
    /// 上下文数量
    pub contexts: usize,
    /// 消息总数 (含过时消息)
    pub messages: usize,
    /// 已完成且非空
    pub finished: usize,
    /// 未完成
    pub unfinished: usize,
    /// 已完成但译文为空
    pub empty: usize,
    /// 过时 (obsolete + vanished)
    pub obsolete: usize,
}

impl CatalogStats {
    /// 统计目录
    pub fn from_catalog(path: &Path, catalog: &Catalog) -> Self {
        let mut stats = Self {
            path: path.to_path_buf(),
            language: catalog.language.clone(),
            contexts: catalog.contexts.len(),
            ..Self::default()
        };

        for message in catalog.contexts.iter().flat_map(|c| &c.messages) {
            stats.messages += 1;
            match message.status {
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.obsolete += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Finished if message.is_empty_translation() => stats.empty += 1,
                TranslationStatus::Finished => stats.finished += 1,
            }
        }

        stats
    }

    /// 有效消息 (非过时)
    pub fn active(&self) -> usize {
        self.messages - self.obsolete
    }

    /// 完成度百分比，没有有效消息时为 100
    pub fn completion(&self) -> f64 {
        match self.active() {
            0 => 100.0,
            active => self.finished as f64 * 100.0 / active as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Context, Message};

    #[test]
    fn counts_each_status() {
        let catalog = Catalog::new("fr_FR").with_context(
            Context::new("QObject")
                .with_message(Message::new("Load", "Charger"))
                .with_message(Message::new("Open", "Ouvrir").with_status(TranslationStatus::Unfinished))
                .with_message(Message::new("Sync tabs", ""))
                .with_message(Message::new("Stop", "Arrêter").with_status(TranslationStatus::Obsolete))
                .with_message(Message::new("Exit", "Quitter")),
        );

        let stats = CatalogStats::from_catalog(Path::new("fastoredis_fr.ts"), &catalog);
        assert_eq!(stats.contexts, 1);
        assert_eq!(stats.messages, 5);
        assert_eq!(stats.finished, 2);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.obsolete, 1);
        assert_eq!(stats.active(), 4);
        assert!((stats.completion() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_catalog_is_complete() {
        let stats = CatalogStats::from_catalog(Path::new("empty.ts"), &Catalog::default());
        assert_eq!(stats.completion(), 100.0);
    }
}
