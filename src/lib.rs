// ============================================================================
// LingoX - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: Qt Linguist TS 翻译目录的读取、查找、检查与写回
// 边界:
//   - ✅ 模块声明
//   - ❌ 不应包含业务实现
//
// ============================================================================

//! LingoX 读取 Qt Linguist `.ts` 翻译目录，提供 (上下文, 源文本) 到译文的查找，
//! 未完成或为空的译文回退到源文本，并能按 lupdate 的格式写回文件。
//!
//! ```no_run
//! use lingox::core::{read_catalog_file, Translator};
//!
//! let catalog = read_catalog_file("translations/app_ru.ts".as_ref())?;
//! let translator = Translator::from_catalog(&catalog);
//! println!("{}", translator.translate("MainWindow", "Open"));
//! # Ok::<(), lingox::core::TsError>(())
//! ```

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;
