// ============================================================================
// LingoX - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod checker;
pub mod error;
pub mod loader;
pub mod plural;
pub mod reader;
pub mod translator;
pub mod writer;

// 重新导出常用类型
pub use checker::{CatalogChecker, CheckOptions, Issue, IssueKind, Severity};
pub use error::TsError;
pub use loader::{CatalogLoader, LoadReport, LoadedCatalog, ProgressCallback};
pub use plural::PluralRule;
pub use reader::{read_catalog, read_catalog_file};
pub use translator::{LanguageSet, Translator, DEFAULT_SOURCE_LANGUAGE};
pub use writer::{write_catalog, write_catalog_file, TsDocument};
