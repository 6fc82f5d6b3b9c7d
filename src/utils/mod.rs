// ============================================================================
// LingoX - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 常量与日志工具入口
//
// ============================================================================

pub mod constants;
pub mod logger;
