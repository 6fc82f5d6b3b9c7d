// ============================================================================
// LingoX - 翻译查找
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 不可变翻译表与多语言选择
// 边界:
//   - ✅ context -> source -> translation 两级查找
//   - ✅ 未完成 / 空译文回退到源文本
//   - ✅ 消歧注释与复数形式查找
//   - ✅ 支持语言列表与语言应用回退
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含校验逻辑
//
// ============================================================================

use std::collections::{BTreeMap, HashMap};

use crate::core::plural::PluralRule;
use crate::models::catalog::{Catalog, Message};

/// 默认源语言
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// 同一 source 下按消歧注释区分的变体
#[derive(Debug, Clone)]
struct Variant {
    comment: String,
    /// 不可提供 (未完成、过时、空译文) 时为 None
    resolved: Option<Resolved>,
}

#[derive(Debug, Clone)]
struct Resolved {
    translation: String,
    forms: Vec<String>,
}

impl Resolved {
    fn from_message(message: &Message) -> Option<Self> {
        if !message.is_servable() {
            return None;
        }
        let (translation, forms) = if message.numerus {
            let first = message.numerus_forms.first().cloned().unwrap_or_default();
            (first, message.numerus_forms.clone())
        } else {
            (message.translation.clone(), Vec::new())
        };
        Some(Self { translation, forms })
    }
}

/// 单一语言的不可变翻译表
///
/// 加载后不再修改，可以在线程间直接共享引用。
#[derive(Debug, Clone)]
pub struct Translator {
    language: Option<String>,
    rule: PluralRule,
    contexts: HashMap<String, HashMap<String, Vec<Variant>>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::empty()
    }
}

impl Translator {
    /// 空表，所有查找都回退到源文本
    pub fn empty() -> Self {
        Self {
            language: None,
            rule: PluralRule::OneOther,
            contexts: HashMap::new(),
        }
    }

    /// 从目录构建，重复的 (context, source, comment) 保留第一条可提供译文的
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut contexts: HashMap<String, HashMap<String, Vec<Variant>>> = HashMap::new();

        for context in &catalog.contexts {
            let sources = contexts.entry(context.name.clone()).or_default();
            for message in &context.messages {
                let (source, comment) = message.key();
                let variants = sources.entry(source.to_string()).or_default();
                if let Some(existing) = variants.iter_mut().find(|v| v.comment == comment) {
                    if existing.resolved.is_none() {
                        existing.resolved = Resolved::from_message(message);
                    }
                    tracing::debug!(
                        "Duplicate message in {}: {:?} ({:?}), keeping first servable",
                        context.name,
                        source,
                        comment
                    );
                    continue;
                }
                variants.push(Variant {
                    comment: comment.to_string(),
                    resolved: Resolved::from_message(message),
                });
            }
        }

        let rule = catalog
            .language
            .as_deref()
            .map(PluralRule::for_language)
            .unwrap_or(PluralRule::OneOther);

        Self {
            language: catalog.language.clone(),
            rule,
            contexts,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// 可提供译文的条目数量
    pub fn len(&self) -> usize {
        self.contexts
            .values()
            .flat_map(HashMap::values)
            .flatten()
            .filter(|v| v.resolved.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 查找译文，没有可用译文时返回源文本
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, "")
    }

    /// 带消歧注释的查找: 先精确匹配注释，再匹配无注释条目
    pub fn translate_disambiguated<'a>(&'a self, context: &str, source: &'a str, comment: &str) -> &'a str {
        self.find(context, source, comment)
            .map(|r| r.translation.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(source)
    }

    /// 复数查找，结果中的 `%n` 替换为 n
    pub fn translate_plural(&self, context: &str, source: &str, n: i64) -> String {
        let text = match self.find(context, source, "") {
            Some(resolved) if !resolved.forms.is_empty() => {
                let index = self.rule.form_index(n).min(resolved.forms.len() - 1);
                resolved.forms[index].as_str()
            }
            Some(resolved) => resolved.translation.as_str(),
            None => source,
        };
        let text = if text.is_empty() { source } else { text };
        text.replace("%n", &n.to_string())
    }

    fn find(&self, context: &str, source: &str, comment: &str) -> Option<&Resolved> {
        let variants = self.contexts.get(context)?.get(source)?;
        let servable = |wanted: &str| {
            variants
                .iter()
                .find(|v| v.comment == wanted)
                .and_then(|v| v.resolved.as_ref())
        };
        servable(comment).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                servable("")
            }
        })
    }
}

/// 多语言翻译集合
#[derive(Debug, Clone)]
pub struct LanguageSet {
    source_language: String,
    translators: BTreeMap<String, Translator>,
    source: Translator,
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LANGUAGE)
    }
}

impl LanguageSet {
    pub fn new(source_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            translators: BTreeMap::new(),
            source: Translator::empty(),
        }
    }

    /// 注册一个语言，同名语言覆盖旧值
    pub fn insert(&mut self, language: impl Into<String>, translator: Translator) {
        let language = language.into();
        if self.translators.insert(language.clone(), translator).is_some() {
            tracing::warn!("Language {} registered twice, using the last catalog", language);
        }
    }

    pub fn with_catalog(mut self, language: impl Into<String>, catalog: &Catalog) -> Self {
        self.insert(language, Translator::from_catalog(catalog));
        self
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// 源语言加上所有已加载语言，已排序
    pub fn supported_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.translators.keys().map(String::as_str).collect();
        languages.push(&self.source_language);
        languages.sort_unstable();
        languages.dedup();
        languages
    }

    /// 解析实际使用的语言: 精确匹配 -> 主语言匹配 -> 源语言
    pub fn apply_language(&self, requested: &str) -> &str {
        let requested = normalize(requested);

        if normalize(&self.source_language).eq_ignore_ascii_case(&requested) {
            return &self.source_language;
        }
        if let Some(language) = self
            .translators
            .keys()
            .find(|l| normalize(l).eq_ignore_ascii_case(&requested))
        {
            return language;
        }

        let wanted = primary_subtag(&requested);
        if primary_subtag(&self.source_language) == wanted {
            return &self.source_language;
        }
        if let Some(language) = self.translators.keys().find(|l| primary_subtag(l) == wanted) {
            return language;
        }

        tracing::debug!(
            "Language {} is not supported, falling back to {}",
            requested,
            self.source_language
        );
        &self.source_language
    }

    /// 某个已解析语言的翻译表，源语言对应空表
    pub fn translator(&self, language: &str) -> &Translator {
        self.translators.get(language).unwrap_or(&self.source)
    }
}

fn normalize(code: &str) -> String {
    code.trim().replace('-', "_")
}

fn primary_subtag(code: &str) -> String {
    code.split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
