// ============================================================================
// LingoX - TS 读取器
// ============================================================================
//
// 文件: src/core/reader.rs
// 职责: 将 Qt Linguist TS (XML) 文本解析为 Catalog
// 边界:
//   - ✅ XML 事件流到目录模型的构建
//   - ✅ 实体 / CDATA / <byte> 解码
//   - ✅ 翻译状态属性解析
//   - ❌ 不应包含查找或校验逻辑
//   - ❌ 不应包含序列化逻辑
//   - ❌ 不应包含目录扫描
//
// ============================================================================

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::error::TsError;
use crate::models::catalog::{Catalog, Context, Location, Message, TranslationStatus};

/// 从文件读取目录
pub fn read_catalog_file(path: &Path) -> Result<Catalog, TsError> {
    let content = std::fs::read_to_string(path).map_err(|e| TsError::io(path, e))?;
    let catalog = read_catalog(&content)?;
    tracing::debug!(
        "Read {:?}: {} contexts, {} messages",
        path,
        catalog.contexts.len(),
        catalog.message_count()
    );
    Ok(catalog)
}

/// 从 XML 文本解析目录
pub fn read_catalog(xml: &str) -> Result<Catalog, TsError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut builder = CatalogBuilder::default();

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|source| TsError::Xml { position, source })?;

        match event {
            Event::Start(ref e) => builder.start(e, position)?,
            Event::Empty(ref e) => {
                if e.name().as_ref() == b"byte" {
                    builder.byte(e, position)?;
                } else {
                    builder.start(e, position)?;
                    builder.end();
                }
            }
            Event::End(_) => builder.end(),
            Event::Text(ref e) => {
                if builder.collecting() {
                    let text = e
                        .unescape()
                        .map_err(|source| TsError::Xml { position, source })?;
                    builder.text.push_str(&text);
                } else if !e.iter().all(u8::is_ascii_whitespace) {
                    builder.note(format!("text outside a known element at byte {position}"));
                }
            }
            Event::CData(e) => {
                if builder.collecting() {
                    builder.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Comment(_) => builder.note(format!("XML comment at byte {position}")),
            Event::PI(_) => builder.note(format!("processing instruction at byte {position}")),
            Event::Eof => break,
            // 声明 / DOCTYPE
            _ => {}
        }
    }

    builder.finish()
}

/// 当前正在收集文本的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    ContextComment,
    Source,
    OldSource,
    Comment,
    OldComment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    UserData,
    /// `<extra-NAME>`
    Extra,
}

#[derive(Debug, Default)]
struct CatalogBuilder {
    catalog: Option<Catalog>,
    context: Option<Context>,
    message: Option<Message>,
    field: Option<Field>,
    text: String,
    /// 打开中的元素名称
    stack: Vec<String>,
    root_closed: bool,
    /// 无法保留的内容
    unsupported: Vec<String>,
}

impl CatalogBuilder {
    fn note(&mut self, what: String) {
        tracing::debug!("Not preserved: {}", what);
        self.unsupported.push(what);
    }

    /// 记录模型中没有对应字段的属性
    fn note_attributes(&mut self, e: &BytesStart<'_>, element: &str) {
        let known = known_attributes(element);
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            if !known.contains(&key.as_str()) {
                self.note(format!("attribute {key} on <{element}>"));
            }
        }
    }

    fn parent(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// numerus 消息的 <translation> 自身的文本只是缩进
    fn collecting(&self) -> bool {
        match self.field {
            Some(Field::Translation) => !self.message.as_ref().is_some_and(|m| m.numerus),
            Some(_) => true,
            None => false,
        }
    }

    fn start(&mut self, e: &BytesStart<'_>, position: u64) -> Result<(), TsError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        if self.stack.is_empty() {
            if self.root_closed || name != "TS" {
                return Err(TsError::UnexpectedRoot(name));
            }
            let mut catalog = Catalog::default();
            if let Some(version) = attribute(e, "version", position)? {
                catalog.version = version;
            }
            catalog.language = attribute(e, "language", position)?;
            catalog.source_language = attribute(e, "sourcelanguage", position)?;
            self.catalog = Some(catalog);
            self.note_attributes(e, &name);
            self.stack.push(name);
            return Ok(());
        }

        let parent = self.parent().map(str::to_owned);
        match (parent.as_deref(), name.as_str()) {
            (Some("TS"), "context") => self.context = Some(Context::default()),
            (Some("context"), "name") => self.begin(Field::ContextName),
            (Some("context"), "comment") => self.begin(Field::ContextComment),
            (Some("context"), "message") => {
                self.message = Some(Message {
                    id: attribute(e, "id", position)?,
                    numerus: attribute(e, "numerus", position)?.as_deref() == Some("yes"),
                    ..Message::default()
                });
            }
            (Some("message"), "location") => {
                let location = Location {
                    filename: attribute(e, "filename", position)?,
                    line: attribute(e, "line", position)?,
                };
                if let Some(message) = self.message.as_mut() {
                    message.locations.push(location);
                }
            }
            (Some("message"), "source") => self.begin(Field::Source),
            (Some("message"), "oldsource") => self.begin(Field::OldSource),
            (Some("message"), "comment") => self.begin(Field::Comment),
            (Some("message"), "oldcomment") => self.begin(Field::OldComment),
            (Some("message"), "extracomment") => self.begin(Field::ExtraComment),
            (Some("message"), "translatorcomment") => self.begin(Field::TranslatorComment),
            (Some("message"), "translation") => {
                let value = attribute(e, "type", position)?;
                let status = TranslationStatus::from_attr(value.as_deref()).ok_or_else(|| {
                    TsError::InvalidStatus {
                        value: value.clone().unwrap_or_default(),
                        position,
                    }
                })?;
                if let Some(message) = self.message.as_mut() {
                    message.status = status;
                }
                self.begin(Field::Translation);
            }
            (Some("translation"), "numerusform") => self.begin(Field::NumerusForm),
            (Some("message"), "userdata") => self.begin(Field::UserData),
            (Some("message"), tag) if tag.starts_with("extra-") => self.begin(Field::Extra),
            _ => {
                self.note(format!(
                    "<{}> in <{}> at byte {}",
                    name,
                    parent.as_deref().unwrap_or_default(),
                    position
                ));
                self.field = None;
                self.stack.push(name);
                return Ok(());
            }
        }

        self.note_attributes(e, &name);
        self.stack.push(name);
        Ok(())
    }

    fn begin(&mut self, field: Field) {
        self.field = Some(field);
        self.text.clear();
    }

    fn end(&mut self) {
        let Some(name) = self.stack.pop() else {
            return;
        };
        let text = std::mem::take(&mut self.text);

        match name.as_str() {
            "TS" => self.root_closed = true,
            "context" => {
                if let (Some(catalog), Some(context)) = (self.catalog.as_mut(), self.context.take()) {
                    catalog.contexts.push(context);
                }
            }
            "message" => {
                if let (Some(context), Some(message)) = (self.context.as_mut(), self.message.take()) {
                    context.messages.push(message);
                }
            }
            "name" if self.field == Some(Field::ContextName) => {
                if let Some(context) = self.context.as_mut() {
                    context.name = text;
                }
                self.field = None;
            }
            "comment" if self.field == Some(Field::ContextComment) => {
                if let Some(context) = self.context.as_mut() {
                    context.comment = Some(text);
                }
                self.field = None;
            }
            "numerusform" if self.field == Some(Field::NumerusForm) => {
                if let Some(message) = self.message.as_mut() {
                    message.numerus_forms.push(text);
                }
                self.field = Some(Field::Translation);
            }
            _ => {
                if let (Some(field), Some(message)) = (self.field, self.message.as_mut()) {
                    match field {
                        Field::Source => message.source = text,
                        Field::OldSource => message.old_source = Some(text),
                        Field::Comment => message.comment = Some(text),
                        Field::OldComment => message.old_comment = Some(text),
                        Field::ExtraComment => message.extra_comment = Some(text),
                        Field::TranslatorComment => message.translator_comment = Some(text),
                        Field::Translation if !message.numerus => message.translation = text,
                        Field::UserData => message.user_data = Some(text),
                        Field::Extra => {
                            let key = name.strip_prefix("extra-").unwrap_or(&name);
                            message.extras.push((key.to_string(), text));
                        }
                        _ => {}
                    }
                }
                self.field = None;
            }
        }
    }

    /// Qt 将控制字符写成 <byte value="x1b"/>
    fn byte(&mut self, e: &BytesStart<'_>, position: u64) -> Result<(), TsError> {
        let value = attribute(e, "value", position)?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        let ch = code
            .and_then(char::from_u32)
            .ok_or_else(|| TsError::InvalidByte {
                value: value.clone(),
                position,
            })?;
        if self.collecting() {
            self.text.push(ch);
        }
        Ok(())
    }

    fn finish(self) -> Result<Catalog, TsError> {
        if let Some(open) = self.stack.last() {
            return Err(TsError::UnexpectedEof(open.clone()));
        }
        let mut catalog = self.catalog.ok_or(TsError::MissingRoot)?;
        catalog.unsupported = self.unsupported;
        Ok(catalog)
    }
}

/// 模型中有对应字段的属性
fn known_attributes(element: &str) -> &'static [&'static str] {
    match element {
        "TS" => &["version", "language", "sourcelanguage"],
        "message" => &["id", "numerus"],
        "location" => &["filename", "line"],
        "translation" => &["type"],
        _ => &[],
    }
}

/// 读取并反转义属性值
fn attribute(e: &BytesStart<'_>, key: &str, position: u64) -> Result<Option<String>, TsError> {
    match e.try_get_attribute(key) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|v| Some(v.into_owned()))
            .map_err(|source| TsError::Xml { position, source }),
        Ok(None) => Ok(None),
        Err(source) => Err(TsError::Attribute { position, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>QObject</name>
    <message>
        <location filename="global.h" line="10"/>
        <source>Text Files (*.txt); All Files (*.*)</source>
        <translation>Fichiers texte (*.txt); Tous les fichiers (*.*)</translation>
    </message>
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
<context>
    <name>fastoredis::ConnectionDialog</name>
    <message>
        <location filename="../gui/dialogs/connection_dialog.cpp" line="292"/>
        <location filename="../gui/dialogs/connection_dialog.cpp" line="301"/>
        <source>SSH User Name:</source>
        <translation>SSH Nom d&apos;utilisateur:</translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn parses_contexts_and_messages() {
        let catalog = read_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.version, "2.1");
        assert_eq!(catalog.language.as_deref(), Some("fr_FR"));
        assert_eq!(catalog.contexts.len(), 2);

        let qobject = &catalog.contexts[0];
        assert_eq!(qobject.name, "QObject");
        assert_eq!(qobject.messages.len(), 3);
        assert_eq!(qobject.messages[0].locations[0], Location::new("global.h", 10));
        assert_eq!(qobject.messages[1].source, "<h3>");
        assert_eq!(qobject.messages[1].translation, "");
        assert_eq!(qobject.messages[2].status, TranslationStatus::Unfinished);
        assert_eq!(qobject.messages[2].translation, "Ouvrir");

        let dialog = &catalog.contexts[1];
        assert_eq!(dialog.messages[0].locations.len(), 2);
        assert_eq!(dialog.messages[0].translation, "SSH Nom d'utilisateur:");
    }

    #[test]
    fn parses_numerus_and_comments() {
        let xml = r#"<TS version="2.1" language="ru_RU" sourcelanguage="en">
<context>
    <name>Keys</name>
    <message numerus="yes" id="keys.loaded">
        <source>Loaded %n key(s)</source>
        <comment>status bar</comment>
        <extracomment>shown after scan</extracomment>
        <translatorcomment>check plural forms</translatorcomment>
        <translation type="unfinished">
            <numerusform>Загружен %n ключ</numerusform>
            <numerusform>Загружено %n ключа</numerusform>
            <numerusform>Загружено %n ключей</numerusform>
        </translation>
    </message>
</context>
</TS>"#;
        let catalog = read_catalog(xml).unwrap();
        assert_eq!(catalog.source_language.as_deref(), Some("en"));
        let message = &catalog.contexts[0].messages[0];
        assert!(message.numerus);
        assert_eq!(message.id.as_deref(), Some("keys.loaded"));
        assert_eq!(message.comment.as_deref(), Some("status bar"));
        assert_eq!(message.extra_comment.as_deref(), Some("shown after scan"));
        assert_eq!(message.translator_comment.as_deref(), Some("check plural forms"));
        assert_eq!(message.numerus_forms.len(), 3);
        assert_eq!(message.numerus_forms[2], "Загружено %n ключей");
        assert_eq!(message.translation, "");
    }

    #[test]
    fn decodes_cdata_bytes_and_empty_elements() {
        let xml = r#"<TS version="2.1">
<context>
    <name>Shell</name>
    <message>
        <source><![CDATA[a < b]]></source>
        <translation>esc<byte value="x1b"/>[0m</translation>
    </message>
    <message>
        <source>Stop</source>
        <translation type="vanished"/>
    </message>
</context>
</TS>"#;
        let catalog = read_catalog(xml).unwrap();
        let messages = &catalog.contexts[0].messages;
        assert_eq!(messages[0].source, "a < b");
        assert_eq!(messages[0].translation, "esc\u{1b}[0m");
        assert_eq!(messages[1].status, TranslationStatus::Vanished);
        assert_eq!(messages[1].translation, "");
    }

    #[test]
    fn keeps_context_comment_and_extra_elements() {
        let xml = r#"<TS version="2.1" language="fr_FR">
<context>
    <name>MainWindow</name>
    <comment>Main window strings</comment>
    <message>
        <source>%d files</source>
        <oldcomment>file count</oldcomment>
        <translation>%d fichiers</translation>
        <userdata>42</userdata>
        <extra-po-flags>c-format</extra-po-flags>
        <extra-po-msgid_plural>%d files</extra-po-msgid_plural>
    </message>
</context>
</TS>"#;
        let catalog = read_catalog(xml).unwrap();
        assert!(catalog.is_lossless(), "{:?}", catalog.unsupported);

        let context = &catalog.contexts[0];
        assert_eq!(context.comment.as_deref(), Some("Main window strings"));
        let message = &context.messages[0];
        assert_eq!(message.comment, None);
        assert_eq!(message.old_comment.as_deref(), Some("file count"));
        assert_eq!(message.user_data.as_deref(), Some("42"));
        assert_eq!(
            message.extras,
            vec![
                ("po-flags".to_string(), "c-format".to_string()),
                ("po-msgid_plural".to_string(), "%d files".to_string()),
            ]
        );
        assert_eq!(message.translation, "%d fichiers");
    }

    #[test]
    fn records_content_it_cannot_keep() {
        let xml = r#"<TS version="2.1" encoding="utf-8">
<!-- generated -->
<context>
    <name>A</name>
    <message>
        <source>x</source>
        <translation variants="yes">y</translation>
        <dependency catalog="qtbase"/>
    </message>
</context>
</TS>"#;
        let catalog = read_catalog(xml).unwrap();
        assert!(!catalog.is_lossless());
        assert_eq!(catalog.unsupported.len(), 4, "{:?}", catalog.unsupported);
        assert!(catalog.unsupported[0].contains("encoding"));
        assert!(catalog.unsupported[1].contains("comment"));
        assert!(catalog.unsupported[2].contains("variants"));
        assert!(catalog.unsupported[3].contains("<dependency>"));
        // 已知内容照常读取
        assert_eq!(catalog.contexts[0].messages[0].translation, "y");
    }

    #[test]
    fn rejects_wrong_root() {
        let err = read_catalog("<xliff version=\"1.2\"></xliff>").unwrap_err();
        assert!(matches!(err, TsError::UnexpectedRoot(name) if name == "xliff"));
    }

    #[test]
    fn rejects_empty_document() {
        let err = read_catalog("<?xml version=\"1.0\"?>\n").unwrap_err();
        assert!(matches!(err, TsError::MissingRoot));
    }

    #[test]
    fn rejects_unknown_status() {
        let xml = r#"<TS><context><name>A</name><message><source>x</source><translation type="done">y</translation></message></context></TS>"#;
        let err = read_catalog(xml).unwrap_err();
        assert!(matches!(err, TsError::InvalidStatus { ref value, .. } if value == "done"));
    }

    #[test]
    fn rejects_truncated_document() {
        let err = read_catalog("<TS version=\"2.1\"><context><name>A</name>").unwrap_err();
        assert!(matches!(err, TsError::UnexpectedEof(_) | TsError::Xml { .. }));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_fr.ts");
        std::fs::write(&path, SAMPLE).unwrap();
        let catalog = read_catalog_file(&path).unwrap();
        assert_eq!(catalog.message_count(), 4);

        let missing = read_catalog_file(&dir.path().join("missing.ts")).unwrap_err();
        assert!(matches!(missing, TsError::Io { .. }));
    }
}
