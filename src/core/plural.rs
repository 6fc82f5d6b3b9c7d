// ============================================================================
// LingoX - 复数规则
// ============================================================================
//
// 文件: src/core/plural.rs
// 职责: numerus 消息的复数形式选择
// 边界:
//   - ✅ 语言代码到复数规则的映射
//   - ✅ 数量到形式下标的计算
//   - ❌ 不应包含查找逻辑
//   - ❌ 不应包含 %n 替换
//
// ============================================================================

/// 复数规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// 只有一种形式 (ja, zh, ko ...)
    Single,
    /// n == 1 为单数 (en, de ...)
    OneOther,
    /// n <= 1 为单数 (fr, pt_BR)
    ZeroOneOther,
    /// 东斯拉夫语系 (ru, uk, be, sr, hr, bs)
    EastSlavic,
    /// 波兰语
    Polish,
    /// 捷克语 / 斯洛伐克语
    CzechSlovak,
}

impl PluralRule {
    /// 根据语言代码 (`ru`, `ru_RU`, `pt-BR`) 选择规则，未知语言按英语处理
    pub fn for_language(code: &str) -> Self {
        let normalized = code.replace('-', "_");
        if normalized.eq_ignore_ascii_case("pt_BR") {
            return PluralRule::ZeroOneOther;
        }

        let primary = normalized
            .split('_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" => PluralRule::Single,
            "fr" => PluralRule::ZeroOneOther,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::CzechSlovak,
            _ => PluralRule::OneOther,
        }
    }

    /// 形式数量
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::OneOther | PluralRule::ZeroOneOther => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::CzechSlovak => 3,
        }
    }

    /// 数量 n 对应的形式下标
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let (n10, n100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ru_RU", PluralRule::EastSlavic)]
    #[case("fr", PluralRule::ZeroOneOther)]
    #[case("pt-BR", PluralRule::ZeroOneOther)]
    #[case("pt_PT", PluralRule::OneOther)]
    #[case("zh_CN", PluralRule::Single)]
    #[case("pl_PL", PluralRule::Polish)]
    #[case("cs", PluralRule::CzechSlovak)]
    #[case("xx", PluralRule::OneOther)]
    fn test_for_language(#[case] code: &str, #[case] expected: PluralRule) {
        assert_eq!(PluralRule::for_language(code), expected);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(21, 0)]
    #[case(11, 2)]
    #[case(2, 1)]
    #[case(24, 1)]
    #[case(12, 2)]
    #[case(5, 2)]
    #[case(0, 2)]
    fn test_east_slavic_forms(#[case] n: i64, #[case] expected: usize) {
        assert_eq!(PluralRule::EastSlavic.form_index(n), expected);
    }

    #[test]
    fn test_two_form_rules() {
        assert_eq!(PluralRule::OneOther.form_index(0), 1);
        assert_eq!(PluralRule::OneOther.form_index(1), 0);
        assert_eq!(PluralRule::ZeroOneOther.form_index(0), 0);
        assert_eq!(PluralRule::ZeroOneOther.form_index(2), 1);
        assert_eq!(PluralRule::Polish.form_index(22), 1);
        assert_eq!(PluralRule::Polish.form_index(21), 2);
        assert_eq!(PluralRule::CzechSlovak.form_index(22), 2);
        assert_eq!(PluralRule::Single.form_count(), 1);
    }
}
