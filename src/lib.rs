//! 就活締切アグリゲーター - SNS投稿からの締切情報抽出
//!
//! # 機能
//! - 短文投稿から企業名・締切種別・締切日時・説明・リンクを抽出
//! - 企業名と締切種別の正規化
//! - X API からの対象アカウント投稿の取得

pub mod config;
pub mod normalize;
pub mod parser;
pub mod xapi;

pub use normalize::{normalize_name, normalize_type};
pub use parser::{DeadlineParser, DeadlineType, ExtractedDeadline, RawMessage};
