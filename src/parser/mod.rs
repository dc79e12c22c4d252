//! テキスト解析モジュール - 投稿からの締切情報の抽出

mod company;
mod date;
mod deadline_type;
mod detail;

pub use date::is_valid_deadline_date;
pub use deadline_type::{DeadlineType, ParseDeadlineTypeError};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::normalize::{CaseMode, classify};

/// 抽出前の投稿
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// 投稿本文
    pub text: String,
    /// 投稿元 (@syukatsurisu など)
    pub source: String,
}

impl RawMessage {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// 投稿から抽出された締切情報
///
/// `company_name` と `deadline_date` は常に空ではない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDeadline {
    /// 企業名
    pub company_name: String,
    /// 締切種別
    #[serde(rename = "type")]
    pub kind: DeadlineType,
    /// 締切日時 (YYYY-MM-DDTHH:MM:SS形式)
    pub deadline_date: String,
    /// 説明（なければ空文字）
    pub description: String,
    /// リンク（なければ空文字）
    pub link: String,
    /// 投稿元
    pub source: String,
}

/// 締切情報パーサー
///
/// 状態を持たないので、一度作成して参照を渡せばどのスレッドからでも使える。
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineParser {
    /// 年の指定がない日付に使う年（None なら現在の年）
    year: Option<i32>,
}

impl DeadlineParser {
    /// 現在の年を使うパーサーを作成
    pub fn new() -> Self {
        Self { year: None }
    }

    /// 年を固定したパーサーを作成
    pub fn with_year(year: i32) -> Self {
        Self { year: Some(year) }
    }

    fn current_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }

    /// 投稿テキストから締切情報を抽出
    ///
    /// 企業名か締切日時が見つからなければ `None`。
    pub fn parse(&self, text: &str, source: &str) -> Option<ExtractedDeadline> {
        let kind = classify(text, CaseMode::Sensitive).unwrap_or_default();

        let Some(company_name) = company::extract_company(text) else {
            tracing::debug!(source, "企業名が見つからないためスキップ");
            return None;
        };

        let Some(deadline_date) = date::extract_deadline(text, self.current_year()) else {
            tracing::debug!(source, company = %company_name, "締切日が見つからないためスキップ");
            return None;
        };

        Some(ExtractedDeadline {
            company_name,
            kind,
            deadline_date,
            description: detail::extract_description(text).unwrap_or_default(),
            link: detail::extract_link(text).unwrap_or_default(),
            source: source.to_string(),
        })
    }

    /// 複数の投稿から締切情報を一括抽出
    ///
    /// 抽出できなかった投稿は結果から除かれ、残りは入力順のまま返る。
    pub fn parse_all(&self, messages: &[RawMessage]) -> Vec<ExtractedDeadline> {
        messages
            .iter()
            .filter_map(|m| self.parse(&m.text, &m.source))
            .collect()
    }
}
