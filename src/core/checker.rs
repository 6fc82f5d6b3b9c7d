// ============================================================================
// LingoX - 目录检查器
// ============================================================================
//
// 文件: src/core/checker.rs
// 职责: 翻译目录质量检查核心逻辑
// 边界:
//   - ✅ 重复消息检测
//   - ✅ 未完成 / 空译文检测
//   - ✅ 占位符、快捷键、结尾标点、复数形式校验
//   - ❌ 不应包含CLI参数处理
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含国际化文本
//
// ============================================================================

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::plural::PluralRule;
use crate::models::catalog::{Catalog, Message, TranslationStatus};

/// `%1` .. `%99`，包括本地化形式 `%L1`
static PLACE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(\d{1,2})").expect("place marker regex should compile"));

/// 问题严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// 问题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateMessage,
    Unfinished,
    EmptyTranslation,
    PlaceMarkerMismatch,
    AcceleratorMismatch,
    PunctuationMismatch,
    NumerusFormCount,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::DuplicateMessage => "duplicate_message",
            IssueKind::Unfinished => "unfinished",
            IssueKind::EmptyTranslation => "empty_translation",
            IssueKind::PlaceMarkerMismatch => "place_marker_mismatch",
            IssueKind::AcceleratorMismatch => "accelerator_mismatch",
            IssueKind::PunctuationMismatch => "punctuation_mismatch",
            IssueKind::NumerusFormCount => "numerus_form_count",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::DuplicateMessage | IssueKind::PlaceMarkerMismatch => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个检查问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub context: String,
    pub source: String,
    /// `file:line`
    pub location: Option<String>,
    pub detail: Option<String>,
}

/// 检查开关
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    #[serde(default = "enabled")]
    pub duplicates: bool,
    #[serde(default = "enabled")]
    pub unfinished: bool,
    #[serde(default = "enabled")]
    pub empty: bool,
    #[serde(default = "enabled")]
    pub place_markers: bool,
    #[serde(default = "enabled")]
    pub accelerators: bool,
    #[serde(default = "enabled")]
    pub punctuation: bool,
    #[serde(default = "enabled")]
    pub numerus: bool,
}

fn enabled() -> bool {
    true
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            duplicates: true,
            unfinished: true,
            empty: true,
            place_markers: true,
            accelerators: true,
            punctuation: true,
            numerus: true,
        }
    }
}

/// 目录检查器
pub struct CatalogChecker {
    options: CheckOptions,
}

impl CatalogChecker {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    /// 检查整个目录，按文档顺序返回问题
    pub fn check(&self, catalog: &Catalog) -> Vec<Issue> {
        let rule = catalog.language.as_deref().map(PluralRule::for_language);
        let mut issues = Vec::new();

        for context in &catalog.contexts {
            let mut seen: HashSet<(&str, &str)> = HashSet::new();

            for message in &context.messages {
                if message.status.is_obsolete() {
                    continue;
                }
                let mut report = |kind: IssueKind, detail: Option<String>| {
                    issues.push(Issue {
                        kind,
                        severity: kind.severity(),
                        context: context.name.clone(),
                        source: message.source.clone(),
                        location: first_location(message),
                        detail,
                    });
                };

                if self.options.duplicates && !seen.insert(message.key()) {
                    report(IssueKind::DuplicateMessage, message.comment.clone());
                }

                if message.is_empty_translation() {
                    match message.status {
                        TranslationStatus::Unfinished if self.options.unfinished => {
                            report(IssueKind::Unfinished, None)
                        }
                        TranslationStatus::Finished if self.options.empty => {
                            report(IssueKind::EmptyTranslation, None)
                        }
                        _ => {}
                    }
                    continue;
                }

                if message.status == TranslationStatus::Unfinished && self.options.unfinished {
                    report(IssueKind::Unfinished, None);
                }

                if message.numerus && self.options.numerus {
                    if let Some(rule) = rule {
                        if message.numerus_forms.len() != rule.form_count() {
                            report(
                                IssueKind::NumerusFormCount,
                                Some(format!(
                                    "{} != {}",
                                    message.numerus_forms.len(),
                                    rule.form_count()
                                )),
                            );
                        }
                    }
                }

                for translation in translations(message) {
                    if self.options.place_markers {
                        let expected = place_markers(&message.source);
                        let found = place_markers(translation);
                        if expected != found {
                            report(
                                IssueKind::PlaceMarkerMismatch,
                                Some(format!("{} != {}", format_markers(&expected), format_markers(&found))),
                            );
                        }
                    }
                    if self.options.accelerators
                        && has_accelerator(&message.source) != has_accelerator(translation)
                    {
                        report(IssueKind::AcceleratorMismatch, None);
                    }
                    if self.options.punctuation {
                        let expected = ending_punctuation(&message.source);
                        let found = ending_punctuation(translation);
                        if expected != found {
                            report(
                                IssueKind::PunctuationMismatch,
                                Some(format!("{:?} != {:?}", expected, found)),
                            );
                        }
                    }
                }
            }
        }

        issues
    }
}

impl Default for CatalogChecker {
    fn default() -> Self {
        Self::new(CheckOptions::default())
    }
}

/// 参与内容检查的非空译文
fn translations(message: &Message) -> Vec<&str> {
    if message.numerus {
        message
            .numerus_forms
            .iter()
            .map(String::as_str)
            .filter(|f| !f.is_empty())
            .collect()
    } else {
        vec![message.translation.as_str()]
    }
}

fn first_location(message: &Message) -> Option<String> {
    message.locations.first().map(|l| {
        let filename = l.filename.as_deref().unwrap_or("?");
        match &l.line {
            Some(line) => format!("{filename}:{line}"),
            None => filename.to_string(),
        }
    })
}

/// 文本中出现的占位符编号
pub fn place_markers(text: &str) -> BTreeSet<u32> {
    PLACE_MARKER
        .captures_iter(text)
        .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
        .collect()
}

fn format_markers(markers: &BTreeSet<u32>) -> String {
    let list: Vec<String> = markers.iter().map(|m| format!("%{m}")).collect();
    format!("[{}]", list.join(", "))
}

/// `&F` 形式的快捷键，`&&` 是转义的 `&`
pub fn has_accelerator(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if next.is_alphanumeric() => return true,
            _ => {}
        }
    }
    false
}

/// 结尾标点，全角标点和 `...` 归一化
pub fn ending_punctuation(text: &str) -> Option<char> {
    let trimmed = text.trim_end();
    if trimmed.ends_with("...") {
        return Some('…');
    }
    match trimmed.chars().last()? {
        '.' | '。' => Some('.'),
        ':' | '：' => Some(':'),
        '!' | '！' => Some('!'),
        '?' | '？' => Some('?'),
        '…' => Some('…'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Context, Location};
    use rstest::rstest;

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    fn check_one(message: Message) -> Vec<IssueKind> {
        let catalog = Catalog::new("ru_RU").with_context(Context::new("QObject").with_message(message));
        kinds(&CatalogChecker::default().check(&catalog))
    }

    #[test]
    fn clean_message_has_no_issues() {
        assert!(check_one(Message::new("Save as:", "Сохранить как:")).is_empty());
    }

    #[test]
    fn reports_unfinished_and_empty() {
        assert_eq!(
            check_one(Message::new("Open", "").with_status(TranslationStatus::Unfinished)),
            vec![IssueKind::Unfinished]
        );
        assert_eq!(check_one(Message::new("Sync tabs", "")), vec![IssueKind::EmptyTranslation]);
        assert_eq!(
            check_one(Message::new("Open", "Открыть").with_status(TranslationStatus::Unfinished)),
            vec![IssueKind::Unfinished]
        );
    }

    #[test]
    fn obsolete_messages_are_ignored() {
        assert!(check_one(Message::new("Stop %1", "").with_status(TranslationStatus::Vanished)).is_empty());
    }

    #[test]
    fn reports_place_marker_mismatch_with_detail() {
        let catalog = Catalog::new("ru_RU").with_context(
            Context::new("QObject").with_message(
                Message::new("Redis version: %1, mode: %2", "Redis версия: %1")
                    .with_location(Location::new("../gui/dialogs/info_server_dialog.cpp", 13)),
            ),
        );
        let issues = CatalogChecker::default().check(&catalog);
        assert_eq!(kinds(&issues), vec![IssueKind::PlaceMarkerMismatch]);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].detail.as_deref(), Some("[%1, %2] != [%1]"));
        assert_eq!(issues[0].location.as_deref(), Some("../gui/dialogs/info_server_dialog.cpp:13"));
    }

    #[test]
    fn reports_duplicates_per_context_and_comment() {
        let catalog = Catalog::new("fr_FR")
            .with_context(
                Context::new("QObject")
                    .with_message(Message::new("Name", "Nom"))
                    .with_message(Message::new("Name", "Nom").with_comment("column"))
                    .with_message(Message::new("Name", "Prénom")),
            )
            .with_context(Context::new("fastoredis::ConnectionDialog").with_message(Message::new("Name", "Nom")));
        let issues = CatalogChecker::default().check(&catalog);
        assert_eq!(kinds(&issues), vec![IssueKind::DuplicateMessage]);
        assert_eq!(issues[0].context, "QObject");
    }

    #[test]
    fn reports_accelerator_and_punctuation() {
        assert_eq!(
            check_one(Message::new("&Test", "Тест")),
            vec![IssueKind::AcceleratorMismatch]
        );
        assert_eq!(
            check_one(Message::new("Logging directory:", "Каталог логов")),
            vec![IssueKind::PunctuationMismatch]
        );
    }

    #[test]
    fn numerus_form_count_follows_language() {
        let message = Message::new("%n key(s)", "").with_numerus_forms(["%n ключ", "%n ключа"]);
        assert_eq!(check_one(message), vec![IssueKind::NumerusFormCount]);
    }

    #[test]
    fn options_disable_checks() {
        let options = CheckOptions {
            unfinished: false,
            accelerators: false,
            ..CheckOptions::default()
        };
        let catalog = Catalog::new("ru_RU").with_context(
            Context::new("QObject")
                .with_message(Message::new("Open", "").with_status(TranslationStatus::Unfinished))
                .with_message(Message::new("&Test", "Тест")),
        );
        assert!(CatalogChecker::new(options).check(&catalog).is_empty());
    }

    #[rstest]
    #[case("&File", true)]
    #[case("Tom && Jerry", false)]
    #[case("A & B", false)]
    #[case("&&&Edit", true)]
    #[case("Save", false)]
    fn test_has_accelerator(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(has_accelerator(text), expected);
    }

    #[rstest]
    #[case("Loading...", Some('…'))]
    #[case("Name:", Some(':'))]
    #[case("名称：", Some(':'))]
    #[case("Done. ", Some('.'))]
    #[case("Save", None)]
    fn test_ending_punctuation(#[case] text: &str, #[case] expected: Option<char>) {
        assert_eq!(ending_punctuation(text), expected);
    }

    #[test]
    fn test_place_markers() {
        let markers = place_markers("Uptime: %12, %L1 and %1 of 100%");
        assert_eq!(markers.into_iter().collect::<Vec<_>>(), vec![1, 12]);
    }
}
