//! 環境変数からの設定読み込み

use thiserror::Error;

/// 既定の取得対象アカウント
pub const DEFAULT_ACCOUNTS: &[&str] = &["syukatsurisu", "InternGuide", "gaishishukatsu"];

/// タイムライン1回あたりの既定取得件数
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// X API が受け付ける取得件数の範囲
const MAX_RESULTS_RANGE: std::ops::RangeInclusive<u32> = 5..=100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("X_MAX_RESULTS が不正です: {0} (5〜100 の整数)")]
    InvalidMaxResults(String),
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// X API のベアラートークン
    pub bearer_token: Option<String>,
    /// 取得対象アカウント（@なし）
    pub target_accounts: Vec<String>,
    /// タイムライン取得件数
    pub max_results: u32,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bearer_token = lookup("X_BEARER_TOKEN").filter(|t| !t.trim().is_empty());

        let target_accounts = lookup("TARGET_X_ACCOUNTS")
            .map(|v| parse_accounts(&v))
            .filter(|accounts| !accounts.is_empty())
            .unwrap_or_else(|| DEFAULT_ACCOUNTS.iter().map(|a| a.to_string()).collect());

        let max_results = match lookup("X_MAX_RESULTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| MAX_RESULTS_RANGE.contains(n))
                .ok_or_else(|| ConfigError::InvalidMaxResults(raw.clone()))?,
            None => DEFAULT_MAX_RESULTS,
        };

        Ok(Self {
            bearer_token,
            target_accounts,
            max_results,
        })
    }
}

/// カンマ区切りのアカウント一覧を分解
fn parse_accounts(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|a| a.trim().trim_start_matches('@'))
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
