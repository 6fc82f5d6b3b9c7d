// ============================================================================
// LingoX - 语言命令处理
// ============================================================================
//
// 文件: src/cli/langs.rs
// 职责: 列出可用语言并解析请求的语言
// 边界:
//   - ✅ 从目录构建语言集合
//   - ✅ 语言解析结果展示
//   - ❌ 不应包含语言匹配规则
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{load_catalogs, output_results};
use crate::core::loader::LoadedCatalog;
use crate::core::translator::{LanguageSet, Translator};
use crate::models::config::Config;
use crate::ui::summary::{self, LanguageRow};
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::tf;

/// 语言命令参数
#[derive(Debug, Args)]
pub struct LangsArgs {
    /// Catalog files or directories (defaults to the workspace root)
    pub paths: Vec<PathBuf>,

    /// Resolve this language against the available ones
    #[arg(long)]
    pub apply: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// 处理语言命令
pub async fn handle_langs(args: LangsArgs) -> Result<()> {
    let report = load_catalogs(&args.paths).await?;
    let set = build_language_set(&report.catalogs, Config::get_source_language());

    let rows: Vec<LanguageRow> = set
        .supported_languages()
        .into_iter()
        .map(|language| LanguageRow {
            language: language.to_string(),
            messages: set.translator(language).len(),
            source: language == set.source_language(),
        })
        .collect();
    output_results(&args.format, &rows[..], false, summary::print_languages_table)?;

    if let Some(requested) = &args.apply {
        let applied = set.apply_language(requested);
        if args.format == "json" {
            println!("{}", serde_json::json!({ "requested": requested, "applied": applied }));
        } else {
            Logger::info(tf!("langs.applied", requested, icons::ARROW, applied));
        }
    }
    Ok(())
}

/// 每个目录注册为一种语言，无法确定语言的目录被跳过
pub fn build_language_set(catalogs: &[LoadedCatalog], source_language: String) -> LanguageSet {
    let mut set = LanguageSet::new(source_language);
    for loaded in catalogs {
        match loaded.language() {
            Some(language) => set.insert(language, Translator::from_catalog(&loaded.catalog)),
            None => Logger::warn(tf!("langs.unknown_language", loaded.path.display())),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Catalog, Context, Message};

    fn loaded(path: &str, catalog: Catalog) -> LoadedCatalog {
        LoadedCatalog { path: PathBuf::from(path), catalog }
    }

    #[test]
    fn catalogs_register_by_attribute_or_file_name() {
        let ru = Catalog::new("ru_RU")
            .with_context(Context::new("QObject").with_message(Message::new("Load", "Загрузить")));
        let mut fr = Catalog::default();
        fr.contexts.push(Context::new("QObject"));

        let set = build_language_set(
            &[loaded("a/fastonosql_ru.ts", ru), loaded("a/fastoredis_fr.ts", fr)],
            "en".to_string(),
        );
        assert_eq!(set.supported_languages(), vec!["en", "fr", "ru_RU"]);
        assert_eq!(set.apply_language("ru"), "ru_RU");
        assert_eq!(set.apply_language("fr-CA"), "fr");
        assert_eq!(set.apply_language("ja"), "en");
        assert_eq!(set.translator("ru_RU").translate("QObject", "Load"), "Загрузить");
    }
}
