// ============================================================================
// LingoX - TS 编解码错误
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: TS 读写过程中的错误类型定义
// 边界:
//   - ✅ 错误枚举定义
//   - ✅ 底层错误转换
//   - ❌ 不应包含错误展示 / 国际化文本
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// TS 文件读写错误
#[derive(Error, Debug)]
pub enum TsError {
    /// 文件读写失败
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// XML 语法错误
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    /// 属性解析失败
    #[error("Malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },
    /// 文档中没有根元素
    #[error("Document has no <TS> root element")]
    MissingRoot,
    /// 根元素不是 TS
    #[error("Unexpected root element <{0}>, expected <TS>")]
    UnexpectedRoot(String),
    /// 未知的 translation type
    #[error("Unknown translation type \"{value}\" at byte {position}")]
    InvalidStatus { value: String, position: u64 },
    /// 无法解析的 <byte value=".."/>
    #[error("Invalid <byte> value \"{value}\" at byte {position}")]
    InvalidByte { value: String, position: u64 },
    /// 元素未闭合就到达文件末尾
    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// 加载任务被取消或 panic
    #[error("Loading task did not complete")]
    TaskAborted,
}

impl TsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TsError::Io {
            path: path.into(),
            source,
        }
    }
}
