// ============================================================================
// LingoX - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用名称与文件名常量
//   - ✅ 输出图标字符
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LINGOX";

/// 配置文件名
pub const CONFIG_FILE: &str = "lingox.toml";

/// TS 文件扩展名
pub const TS_EXTENSION: &str = "ts";

/// 判断 .ts 是否为翻译文件时读取的字节数
pub const SNIFF_BYTES: usize = 512;

/// 输出图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 目录图标
    pub const CATALOG: &str = "●";
    /// 语言图标
    pub const LANGUAGE: &str = "◆";
    /// 箭头图标
    pub const ARROW: &str = "→";
}

/// 进度条字符
pub mod progress_chars {
    pub const BAR: &str = "█▉▊▋▌▍▎▏ ";
}
