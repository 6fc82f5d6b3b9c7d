// ============================================================================
// LingoX - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 工具自身界面文本的翻译管理
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含 TS 目录逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use crate::models::config::Config;

/// 语言对应的翻译表，未知语言使用英文
fn table_for(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

/// 在指定语言中查找，缺失时回退到英文，再回退到键本身
pub fn translate_in(language: &str, key: &str) -> String {
    table_for(language)
        .iter()
        .chain(en_us::TRANSLATIONS)
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    translate_in(&Config::get_language(), key)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 依次替换 `{}` 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut from = 0;
    for arg in args.iter() {
        match result[from..].find("{}") {
            Some(offset) => {
                let pos = from + offset;
                result.replace_range(pos..pos + 2, arg);
                from = pos + arg.len();
            }
            None => break,
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn falls_back_to_english_then_key() {
        assert_eq!(translate_in("zh_cn", "check.all_good"), "所有目录检查通过");
        assert_eq!(translate_in("fr_fr", "check.all_good"), "All catalogs passed the checks");
        assert_eq!(translate_in("en_us", "no.such.key"), "no.such.key");
    }

    #[test]
    fn arguments_are_not_rescanned() {
        let out = format_with_args("{} -> {}".to_string(), vec!["{}".to_string(), "b".to_string()]);
        assert_eq!(out, "{} -> b");
    }

    #[test]
    fn tables_have_the_same_keys() {
        let en: HashSet<_> = en_us::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        let zh: HashSet<_> = zh_cn::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, zh);
        assert_eq!(en.len(), en_us::TRANSLATIONS.len());
    }
}
