//! 説明文・リンク抽出モジュール

use regex::Regex;
use std::sync::LazyLock;

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:説明|詳細|備考)[:：]\s*(.+)").unwrap());

/// 最初のURLを抽出
pub fn extract_link(text: &str) -> Option<String> {
    RE_LINK.find(text).map(|m| m.as_str().to_string())
}

/// 「説明：」などのラベルに続く行の残りを抽出
pub fn extract_description(text: &str) -> Option<String> {
    let caps = RE_DESCRIPTION.captures(text)?;
    let description = caps.get(1)?.as_str().trim();
    Some(description.to_string())
}
