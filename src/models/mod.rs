// ============================================================================
// LingoX - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 目录、统计与配置数据模型
// 边界:
//   - ✅ 数据结构定义
//   - ❌ 不应包含文件解析逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod stats;

pub use catalog::{Catalog, Context, Entry, Location, Message, TranslationStatus};
pub use stats::CatalogStats;
