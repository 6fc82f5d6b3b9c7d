// ============================================================================
// LingoX - 翻译目录数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: TS 翻译目录的数据结构定义
// 边界:
//   - ✅ 目录 / 上下文 / 消息 / 位置数据结构
//   - ✅ 翻译状态枚举与 type 属性映射
//   - ✅ (context, source, translation, status) 元组视图
//   - ❌ 不应包含 XML 解析或序列化逻辑
//   - ❌ 不应包含查找回退逻辑
//   - ❌ 不应包含文件系统操作
//
// ============================================================================

use serde::{Deserialize, Serialize};

/// 默认 TS 格式版本
pub const DEFAULT_TS_VERSION: &str = "2.1";

/// 翻译状态 (对应 `<translation type="...">`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// 已完成 (无 type 属性)
    #[default]
    Finished,
    /// 未完成
    Unfinished,
    /// 已过时 (源码中已不存在)
    Obsolete,
    /// 已消失 (TS 2.1 中 obsolete 的新写法)
    Vanished,
}

impl TranslationStatus {
    /// 对应的 type 属性值，Finished 没有属性
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    /// 从 type 属性值解析
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(TranslationStatus::Finished),
            Some("unfinished") => Some(TranslationStatus::Unfinished),
            Some("obsolete") => Some(TranslationStatus::Obsolete),
            Some("vanished") => Some(TranslationStatus::Vanished),
            Some(_) => None,
        }
    }

    /// 是否已从源码中移除
    pub fn is_obsolete(&self) -> bool {
        matches!(self, TranslationStatus::Obsolete | TranslationStatus::Vanished)
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_attr().unwrap_or("finished"))
    }
}

/// 源码位置
///
/// `line` 保持原始文本，`lupdate` 可能写出 `+3` 这样的相对行号。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<String>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(line.to_string()),
        }
    }

    /// 绝对行号，相对行号或缺失时为 None
    pub fn line_number(&self) -> Option<u32> {
        self.line
            .as_deref()
            .filter(|l| l.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|l| l.parse().ok())
    }
}

/// 单条翻译消息
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// `id` 属性
    pub id: Option<String>,
    /// `numerus="yes"`
    pub numerus: bool,
    pub locations: Vec<Location>,
    /// 英文源文本，查找键
    pub source: String,
    pub old_source: Option<String>,
    /// 消歧注释，与 source 一起构成上下文内的唯一键
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    /// 译文，可能为空
    pub translation: String,
    /// 复数形式，仅 numerus 消息使用
    pub numerus_forms: Vec<String>,
    pub status: TranslationStatus,
    /// `<userdata>`
    pub user_data: Option<String>,
    /// `<extra-NAME>` 元素，按文档顺序保存 (NAME, 文本)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<(String, String)>,
}

impl Message {
    /// 创建已完成的消息
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.push((name.into(), value.into()));
        self
    }

    /// 设置复数形式并标记为 numerus
    pub fn with_numerus_forms<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numerus = true;
        self.numerus_forms = forms.into_iter().map(Into::into).collect();
        self
    }

    /// 译文是否为空 (numerus 消息要求所有形式都为空)
    pub fn is_empty_translation(&self) -> bool {
        if self.numerus {
            self.numerus_forms.iter().all(|f| f.is_empty())
        } else {
            self.translation.is_empty()
        }
    }

    /// 是否可以提供给查找使用
    pub fn is_servable(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.is_empty_translation()
    }

    /// 上下文内唯一键
    pub fn key(&self) -> (&str, &str) {
        (self.source.as_str(), self.comment.as_deref().unwrap_or(""))
    }
}

/// 上下文: 一个对话框 / 类下的所有消息
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    /// 上下文级 `<comment>`
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// 一个 TS 文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
    /// 读取时无法保留的内容 (未知元素、属性、XML 注释)，重写会丢失它们
    #[serde(skip)]
    pub unsupported: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            unsupported: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// 按名称查找上下文
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// 重写后能否保留读取到的全部内容
    pub fn is_lossless(&self) -> bool {
        self.unsupported.is_empty()
    }

    /// 消息总数
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// 按文档顺序遍历所有条目
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.contexts.iter().flat_map(|context| {
            context.messages.iter().map(move |message| Entry {
                context: &context.name,
                source: &message.source,
                translation: &message.translation,
                status: message.status,
            })
        })
    }
}

/// 翻译条目视图: (context, source, translation, status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub translation: &'a str,
    pub status: TranslationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_attr_mapping() {
        assert_eq!(TranslationStatus::from_attr(None), Some(TranslationStatus::Finished));
        assert_eq!(
            TranslationStatus::from_attr(Some("unfinished")),
            Some(TranslationStatus::Unfinished)
        );
        assert_eq!(TranslationStatus::from_attr(Some("done")), None);
        assert_eq!(TranslationStatus::Vanished.as_attr(), Some("vanished"));
        assert!(TranslationStatus::Obsolete.is_obsolete());
        assert!(!TranslationStatus::Unfinished.is_obsolete());
    }

    #[test]
    fn servable_requires_finished_and_text() {
        assert!(Message::new("Open", "Ouvrir").is_servable());
        assert!(!Message::new("Open", "").is_servable());
        assert!(!Message::new("Open", "Ouvrir")
            .with_status(TranslationStatus::Unfinished)
            .is_servable());
        assert!(!Message::new("%n file(s)", "")
            .with_numerus_forms(["", ""])
            .is_servable());
    }

    #[test]
    fn entries_follow_document_order() {
        let catalog = Catalog::new("fr_FR")
            .with_context(
                Context::new("QObject")
                    .with_message(Message::new("Load", "Charger"))
                    .with_message(Message::new("Open", "").with_status(TranslationStatus::Unfinished)),
            )
            .with_context(Context::new("fastoredis::MainWindow").with_message(Message::new("&File", "&Fichier")));

        let entries: Vec<_> = catalog.entries().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].context, "QObject");
        assert_eq!(entries[1].status, TranslationStatus::Unfinished);
        assert_eq!(entries[2].translation, "&Fichier");
        assert_eq!(catalog.message_count(), 3);
    }

    #[test]
    fn location_line_number() {
        assert_eq!(Location::new("global.h", 10).line_number(), Some(10));
        let relative = Location {
            filename: None,
            line: Some("+3".to_string()),
        };
        assert_eq!(relative.line_number(), None);
    }
}
