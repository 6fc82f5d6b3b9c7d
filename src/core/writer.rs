// ============================================================================
// LingoX - TS 写入器
// ============================================================================
//
// 文件: src/core/writer.rs
// 职责: 将 Catalog 序列化为 Qt lupdate 布局的 TS 文本
// 边界:
//   - ✅ lupdate 兼容的缩进与元素顺序
//   - ✅ XML 转义与 <byte> 控制字符编码
//   - ✅ 属性值转义 (控制字符无法表示，丢弃)
//   - ✅ 文件写入
//   - ❌ 不应包含解析逻辑
//   - ❌ 不应修改目录内容 (排序、去重等)
//
// ============================================================================

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::path::Path;

use quick_xml::escape::escape;

use crate::core::error::TsError;
use crate::models::catalog::{Catalog, Message};

/// 序列化目录
pub fn write_catalog(catalog: &Catalog) -> String {
    TsDocument(catalog).to_string()
}

/// 序列化目录并写入文件
pub fn write_catalog_file(catalog: &Catalog, path: &Path) -> Result<(), TsError> {
    std::fs::write(path, write_catalog(catalog)).map_err(|e| TsError::io(path, e))?;
    tracing::debug!("Wrote {:?}: {} messages", path, catalog.message_count());
    Ok(())
}

/// lupdate 格式的 TS 文档
pub struct TsDocument<'a>(pub &'a Catalog);

impl fmt::Display for TsDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.0;

        f.write_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n")?;
        write!(f, "<TS version=\"{}\"", protect_attr(&catalog.version))?;
        if let Some(language) = &catalog.language {
            write!(f, " language=\"{}\"", protect_attr(language))?;
        }
        if let Some(source_language) = &catalog.source_language {
            write!(f, " sourcelanguage=\"{}\"", protect_attr(source_language))?;
        }
        f.write_str(">\n")?;

        for context in &catalog.contexts {
            f.write_str("<context>\n")?;
            writeln!(f, "    <name>{}</name>", protect(&context.name))?;
            if let Some(comment) = &context.comment {
                writeln!(f, "    <comment>{}</comment>", protect(comment))?;
            }
            for message in &context.messages {
                write_message(f, message)?;
            }
            f.write_str("</context>\n")?;
        }

        f.write_str("</TS>\n")
    }
}

fn write_message(f: &mut fmt::Formatter<'_>, message: &Message) -> fmt::Result {
    f.write_str("    <message")?;
    if let Some(id) = &message.id {
        write!(f, " id=\"{}\"", protect_attr(id))?;
    }
    if message.numerus {
        f.write_str(" numerus=\"yes\"")?;
    }
    f.write_str(">\n")?;

    for location in &message.locations {
        f.write_str("        <location")?;
        if let Some(filename) = &location.filename {
            write!(f, " filename=\"{}\"", protect_attr(filename))?;
        }
        if let Some(line) = &location.line {
            write!(f, " line=\"{}\"", protect_attr(line))?;
        }
        f.write_str("/>\n")?;
    }

    writeln!(f, "        <source>{}</source>", protect(&message.source))?;
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            writeln!(f, "        <{tag}>{}</{tag}>", protect(value))?;
        }
    }

    f.write_str("        <translation")?;
    if let Some(status) = message.status.as_attr() {
        write!(f, " type=\"{status}\"")?;
    }
    f.write_str(">")?;
    if message.numerus && !message.numerus_forms.is_empty() {
        f.write_str("\n")?;
        for form in &message.numerus_forms {
            writeln!(f, "            <numerusform>{}</numerusform>", protect(form))?;
        }
        f.write_str("        ")?;
    } else if !message.numerus {
        f.write_str(&protect(&message.translation))?;
    }
    f.write_str("</translation>\n")?;

    if let Some(user_data) = &message.user_data {
        writeln!(f, "        <userdata>{}</userdata>", protect(user_data))?;
    }
    for (name, value) in &message.extras {
        writeln!(f, "        <extra-{name}>{}</extra-{name}>", protect(value))?;
    }

    f.write_str("    </message>\n")
}

fn is_control_byte(ch: char) -> bool {
    (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r')
}

/// 转义 `& < > " '`，控制字符写成 `<byte value="xNN"/>`
fn protect(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_control_byte) {
        return escape(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if is_control_byte(ch) {
            out.push_str(&escape(&text[start..index]));
            // 写入 String 不会失败
            let _ = write!(out, "<byte value=\"x{:x}\"/>", ch as u32);
            start = index + ch.len_utf8();
        }
    }
    out.push_str(&escape(&text[start..]));
    Cow::Owned(out)
}

/// 属性值只能转义；控制字符在 XML 1.0 中无法表示，被丢弃
fn protect_attr(value: &str) -> Cow<'_, str> {
    let needs_work = value.chars().any(|ch| (ch as u32) < 0x20);
    if !needs_work {
        return escape(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            ch if is_control_byte(ch) => {
                tracing::warn!("Dropping control character U+{:04X} from attribute {:?}", ch as u32, value);
            }
            ch => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reader::read_catalog;
    use crate::models::catalog::{Context, Location, TranslationStatus};

    #[test]
    fn writes_lupdate_layout() {
        let catalog = Catalog::new("fr_FR").with_context(
            Context::new("QObject")
                .with_message(
                    Message::new("<h3>", "").with_location(Location::new("../gui/dialogs/about_dialog.cpp", 12)),
                )
                .with_message(
                    Message::new("Open", "Ouvrir")
                        .with_status(TranslationStatus::Unfinished)
                        .with_location(Location::new("global.h", 13)),
                ),
        );

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>QObject</name>
    <message>
        <location filename="../gui/dialogs/about_dialog.cpp" line="12"/>
        <source>&lt;h3&gt;</source>
        <translation></translation>
    </message>
    <message>
        <location filename="global.h" line="13"/>
        <source>Open</source>
        <translation type="unfinished">Ouvrir</translation>
    </message>
</context>
</TS>
"#;
        assert_eq!(write_catalog(&catalog), expected);
    }

    #[test]
    fn escapes_quotes_and_control_characters() {
        assert_eq!(protect("You're \"up\" & <ok>"), "You&apos;re &quot;up&quot; &amp; &lt;ok&gt;");
        assert_eq!(protect("a\u{1b}b\tc"), "a<byte value=\"x1b\"/>b\tc");
        assert!(matches!(protect("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn writes_numerus_and_comments() {
        let mut message = Message::new("%n key(s)", "")
            .with_comment("status bar")
            .with_numerus_forms(["%n clé", "%n clés"]);
        message.id = Some("keys".to_string());
        message.translator_comment = Some("vérifier".to_string());
        let mut catalog = Catalog::new("fr_FR").with_context(Context::new("Keys").with_message(message));
        catalog.source_language = Some("en".to_string());

        let text = write_catalog(&catalog);
        assert!(text.contains("<TS version=\"2.1\" language=\"fr_FR\" sourcelanguage=\"en\">"));
        assert!(text.contains("    <message id=\"keys\" numerus=\"yes\">\n"));
        assert!(text.contains("        <comment>status bar</comment>\n        <translatorcomment>vérifier</translatorcomment>\n"));
        assert!(text.contains(
            "        <translation>\n            <numerusform>%n clé</numerusform>\n            <numerusform>%n clés</numerusform>\n        </translation>\n"
        ));

        assert_eq!(read_catalog(&text).unwrap(), catalog);
    }

    #[test]
    fn control_characters_survive_rewrite() {
        let catalog = Catalog::new("ru_RU")
            .with_context(Context::new("Shell").with_message(Message::new("Reset\u{1b}[0m", "Сброс\u{1b}[0m")));
        let reread = read_catalog(&write_catalog(&catalog)).unwrap();
        assert_eq!(reread, catalog);
    }

    #[test]
    fn attributes_never_contain_markup() {
        assert_eq!(protect_attr("a\u{1b}b.cpp"), "ab.cpp");
        assert_eq!(protect_attr("x\ty\n\"z\""), "x&#9;y&#10;&quot;z&quot;");
        assert!(matches!(protect_attr("global.h"), Cow::Borrowed(_)));

        let mut message = Message::new("Quit", "Quitter").with_location(Location::new("a\u{1b}b.cpp", 3));
        message.id = Some("quit\u{7}".to_string());
        let catalog = Catalog::new("fr_FR").with_context(Context::new("Shell").with_message(message));
        let text = write_catalog(&catalog);
        assert!(text.contains("<message id=\"quit\">"));
        assert!(text.contains("<location filename=\"ab.cpp\" line=\"3\"/>"));
        assert!(!text.contains("<byte"));

        let reread = read_catalog(&text).unwrap();
        let location = &reread.contexts[0].messages[0].locations[0];
        assert_eq!(location.filename.as_deref(), Some("ab.cpp"));
        assert_eq!(reread.contexts[0].messages[0].translation, "Quitter");
    }

    #[test]
    fn writes_context_comment_and_extras_in_qt_order() {
        let mut message = Message::new("%d files", "%d fichiers")
            .with_comment("count")
            .with_extra("po-flags", "c-format")
            .with_extra("po-old_msgid", "%d file(s)");
        message.old_comment = Some("file count".to_string());
        message.user_data = Some("7".to_string());
        let catalog = Catalog::new("fr_FR").with_context(
            Context::new("MainWindow")
                .with_comment("Main window strings")
                .with_message(message),
        );

        let text = write_catalog(&catalog);
        assert!(text.contains("    <name>MainWindow</name>\n    <comment>Main window strings</comment>\n    <message>\n"));
        assert!(text.contains(
            "        <source>%d files</source>\n        <comment>count</comment>\n        <oldcomment>file count</oldcomment>\n"
        ));
        assert!(text.contains(
            "        <translation>%d fichiers</translation>\n        <userdata>7</userdata>\n        <extra-po-flags>c-format</extra-po-flags>\n        <extra-po-old_msgid>%d file(s)</extra-po-old_msgid>\n    </message>\n"
        ));

        assert_eq!(read_catalog(&text).unwrap(), catalog);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_fr.ts");
        let catalog = Catalog::new("fr_FR").with_context(Context::new("QObject").with_message(Message::new("Load", "Charger")));
        write_catalog_file(&catalog, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), write_catalog(&catalog));
    }
}
