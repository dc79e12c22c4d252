//! 正規化モジュール - 企業名と締切種別の正規化

use crate::parser::DeadlineType;

/// 除去する法人格
const LEGAL_FORMS: &[&str] = &["株式会社", "合名会社", "合資会社", "有限会社"];

/// 全角英数字と半角英数字のコードポイント差
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// 締切種別のキーワード（優先順）
const TYPE_KEYWORDS: &[(DeadlineType, &[&str])] = &[
    (DeadlineType::Es, &["ES", "エントリーシート"]),
    (DeadlineType::FullSelection, &["本選考", "選考"]),
    (DeadlineType::TestCenter, &["テストセンター", "Webテスト"]),
    (DeadlineType::Internship, &["インターン"]),
];

/// キーワード照合での大文字小文字の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// 投稿本文向け。"ES" は大文字のみ一致
    Sensitive,
    /// 表記ゆれのある種別文字列向け
    Insensitive,
}

/// キーワードから締切種別を判定
///
/// どのキーワードにも一致しなければ `None`。呼び出し側で `ES` にフォールバックする。
pub fn classify(text: &str, mode: CaseMode) -> Option<DeadlineType> {
    let haystack = match mode {
        CaseMode::Sensitive => text.to_string(),
        CaseMode::Insensitive => text.to_lowercase(),
    };

    TYPE_KEYWORDS.iter().find_map(|(kind, keywords)| {
        keywords
            .iter()
            .any(|keyword| match mode {
                CaseMode::Sensitive => haystack.contains(keyword),
                CaseMode::Insensitive => haystack.contains(&keyword.to_lowercase()),
            })
            .then_some(*kind)
    })
}

/// 締切種別の文字列を列挙型に変換（該当なしは ES）
pub fn normalize_type(type_like: &str) -> DeadlineType {
    classify(type_like, CaseMode::Insensitive).unwrap_or_default()
}

/// 企業名の正規化（全角英数字の半角化、空白削除、法人格の除去）
pub fn normalize_name(name: &str) -> String {
    let folded: String = name.trim_matches(is_blank).chars().map(fold_fullwidth).collect();

    let mut result: String = folded.chars().filter(|c| !is_blank(*c)).collect();

    // 除去によって新たな法人格が現れることがあるので、なくなるまで繰り返す
    while let Some(form) = LEGAL_FORMS.iter().find(|form| result.contains(*form)) {
        result = result.replace(form, "");
    }

    result.trim_matches(is_blank).to_string()
}

/// 空白扱いの文字（BOM を含む）
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// 全角英数字を半角に変換
fn fold_fullwidth(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_full_example() {
        assert_eq!(normalize_name("株式会社　ＡＢＣ商事"), "ABC商事");
    }

    #[test]
    fn name_folds_digits_and_lowercase() {
        assert_eq!(normalize_name(" ｎｔｔ ｄａｔａ ２０２６ "), "nttdata2026");
    }

    #[test]
    fn name_strips_every_legal_form() {
        assert_eq!(normalize_name("合同 有限会社テスト合資会社"), "合同テスト");
        assert_eq!(normalize_name("株式会社"), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn name_drops_byte_order_mark() {
        assert_eq!(normalize_name("\u{FEFF}株式会社ソニー"), "ソニー");
        assert_eq!(normalize_name("ソ\u{FEFF}ニー\u{FEFF}"), "ソニー");
    }

    #[test]
    fn name_is_idempotent() {
        let inputs = [
            "株式会社　ＡＢＣ商事",
            "株式株式会社会社",
            "  合名会社 ｘ ",
            "トヨタ自動車",
            "有限有限会社会社会社",
        ];
        for input in inputs {
            let once = normalize_name(input);
            assert_eq!(normalize_name(&once), once, "input: {input}");
        }
    }

    #[test]
    fn nested_legal_forms_are_removed() {
        assert_eq!(normalize_name("株式株式会社会社商事"), "商事");
    }

    #[test]
    fn type_keywords() {
        assert_eq!(normalize_type("Webテスト受験"), DeadlineType::TestCenter);
        assert_eq!(normalize_type("WEBテスト"), DeadlineType::TestCenter);
        assert_eq!(normalize_type("es"), DeadlineType::Es);
        assert_eq!(normalize_type("本選考"), DeadlineType::FullSelection);
        assert_eq!(normalize_type("サマーインターン"), DeadlineType::Internship);
        assert_eq!(normalize_type(""), DeadlineType::Es);
        assert_eq!(normalize_type("説明会"), DeadlineType::Es);
    }

    #[test]
    fn type_priority_es_over_selection() {
        assert_eq!(normalize_type("ES選考"), DeadlineType::Es);
        assert_eq!(classify("ES選考", CaseMode::Sensitive), Some(DeadlineType::Es));
    }

    #[test]
    fn classify_reports_missing_signal() {
        assert_eq!(classify("今日は晴れです", CaseMode::Sensitive), None);
        assert_eq!(classify("es", CaseMode::Sensitive), None);
        assert_eq!(classify("es", CaseMode::Insensitive), Some(DeadlineType::Es));
    }

    #[test]
    fn both_modes_agree_on_keyword_content() {
        for text in ["エントリーシート", "選考", "テストセンター", "Webテスト", "インターン", "ES"] {
            assert_eq!(
                classify(text, CaseMode::Sensitive),
                classify(text, CaseMode::Insensitive),
                "text: {text}"
            );
        }
    }
}
