//! X API v2 モジュール - 対象アカウントの投稿取得

mod client;
mod types;

pub use client::XApiClient;
pub use types::Tweet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XApiError {
    #[error("X_BEARER_TOKEN が設定されていません")]
    MissingToken,

    #[error("ユーザー {0} が見つかりません")]
    UserNotFound(String),

    #[error("X API エラー: {status} {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("X API リクエストに失敗: {0}")]
    Request(#[from] reqwest::Error),
}
