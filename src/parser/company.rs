//! 企業名抽出モジュール

use regex::Regex;
use std::sync::LazyLock;

// 企業名の後に続く種別・締切キーワード
macro_rules! company_pattern {
    ($head:literal) => {
        concat!($head, r".*?(?:ES|本選考|テストセンター|インターン|締切)")
    };
}

static RE_BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(company_pattern!(r"【(.+?)】")).unwrap());
static RE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(company_pattern!(r"^(.+?)[:：]")).unwrap());
static RE_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(company_pattern!(r"^(.+?)\s")).unwrap());

/// 企業名の抽出ルール
struct CompanyRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
}

/// 優先順に評価する
static COMPANY_RULES: &[CompanyRule] = &[
    // 【楽天】ES締切...
    CompanyRule {
        name: "bracketed",
        regex: &RE_BRACKETED,
    },
    // ソフトバンク：本選考...
    CompanyRule {
        name: "colon",
        regex: &RE_COLON,
    },
    // キヤノン 2025/09/01 インターン...
    CompanyRule {
        name: "spaced",
        regex: &RE_SPACED,
    },
];

impl CompanyRule {
    /// 一致したら整形済みの名前を返す（空文字になることもある）
    fn apply(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let raw = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty())?;
        Some(clean_name(raw))
    }
}

/// テキストから企業名を抽出
///
/// 最初に一致したルールで打ち切る。整形後に空なら企業名なし。
pub fn extract_company(text: &str) -> Option<String> {
    let (rule, name) = COMPANY_RULES
        .iter()
        .find_map(|rule| rule.apply(text).map(|name| (rule, name)))?;
    tracing::debug!(rule = rule.name, company = %name, "企業名を検出");
    (!name.is_empty()).then_some(name)
}

/// 括弧を除去して前後の空白を削る
fn clean_name(raw: &str) -> String {
    raw.replace(['【', '】'], "").trim().to_string()
}
