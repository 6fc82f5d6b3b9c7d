// ============================================================================
// LingoX - 查找命令处理
// ============================================================================
//
// 文件: src/cli/lookup.rs
// 职责: 在单个目录中查找源文本的译文
// 边界:
//   - ✅ 查找参数解析
//   - ✅ 回退提示
//   - ❌ 不应包含查找表实现
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

use crate::core::reader::read_catalog_file;
use crate::core::translator::Translator;
use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 查找命令参数
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Catalog file
    pub file: PathBuf,

    /// Source text to translate
    pub source: String,

    /// Context name
    #[arg(short, long)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long, conflicts_with = "count")]
    pub comment: Option<String>,

    /// Count for plural forms; `%n` in the result is replaced by it
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,
}

/// 处理查找命令，结果直接写到标准输出
pub fn handle_lookup(args: LookupArgs) -> Result<()> {
    let catalog = read_catalog_file(&args.file)
        .with_context(|| tf!("lookup.load_failed", args.file.display()))?;
    let translator = Translator::from_catalog(&catalog);

    let text = match (args.count, args.comment.as_deref()) {
        (Some(n), _) => translator.translate_plural(&args.context, &args.source, n),
        (None, Some(comment)) => translator
            .translate_disambiguated(&args.context, &args.source, comment)
            .to_string(),
        (None, None) => translator.translate(&args.context, &args.source).to_string(),
    };

    if Config::get_verbose() && args.count.is_none() && text == args.source {
        Logger::warn(t!("lookup.fallback"));
    }
    println!("{}", text);
    Ok(())
}
