//! 締切種別

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 締切種別
///
/// シリアライズ時の名前は保存先スキーマの値 (`es`, `honsenkou`, ...) に合わせる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineType {
    /// エントリーシート提出
    #[default]
    #[serde(rename = "es")]
    Es,
    /// 本選考（面接など）
    #[serde(rename = "honsenkou")]
    FullSelection,
    /// テストセンター・Webテスト受験
    #[serde(rename = "test_center")]
    TestCenter,
    /// インターンシップ
    #[serde(rename = "internship")]
    Internship,
}

impl DeadlineType {
    pub const ALL: [DeadlineType; 4] = [
        DeadlineType::Es,
        DeadlineType::FullSelection,
        DeadlineType::TestCenter,
        DeadlineType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineType::Es => "es",
            DeadlineType::FullSelection => "honsenkou",
            DeadlineType::TestCenter => "test_center",
            DeadlineType::Internship => "internship",
        }
    }

    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineType::Es => "ES",
            DeadlineType::FullSelection => "本選考",
            DeadlineType::TestCenter => "テストセンター",
            DeadlineType::Internship => "インターン",
        }
    }
}

impl fmt::Display for DeadlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 保存値として不正な締切種別
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("不明な締切種別: {0}")]
pub struct ParseDeadlineTypeError(pub String);

impl FromStr for DeadlineType {
    type Err = ParseDeadlineTypeError;

    /// 保存値 (`es` など) の厳密な変換。
    /// 曖昧な文字列の分類は [`crate::normalize_type`] を使う。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeadlineType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseDeadlineTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for t in DeadlineType::ALL {
            assert_eq!(t.as_str().parse::<DeadlineType>(), Ok(t));
        }
    }

    #[test]
    fn from_str_is_strict() {
        assert!("ES".parse::<DeadlineType>().is_err());
        assert!("".parse::<DeadlineType>().is_err());
    }

    #[test]
    fn labels_are_japanese_display_names() {
        assert_eq!(DeadlineType::Es.label(), "ES");
        assert_eq!(DeadlineType::FullSelection.label(), "本選考");
        assert_eq!(DeadlineType::TestCenter.label(), "テストセンター");
        assert_eq!(DeadlineType::Internship.label(), "インターン");
    }

    #[test]
    fn default_is_es() {
        assert_eq!(DeadlineType::default(), DeadlineType::Es);
    }

    #[test]
    fn deserializes_storage_value() {
        let t: DeadlineType = serde_json::from_str("\"test_center\"").unwrap();
        assert_eq!(t, DeadlineType::TestCenter);
    }
}
