//! X API クライアント

use super::XApiError;
use super::types::{Tweet, TweetsResponse, UserResponse};
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;

const X_API_BASE_URL: &str = "https://api.twitter.com/2";

const TWEET_FIELDS: &str = "created_at,author_id";

/// X APIクライアント
#[derive(Clone)]
pub struct XApiClient {
    bearer_token: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl XApiClient {
    /// 新しいクライアントを作成
    pub fn new(bearer_token: impl Into<String>) -> Result<Self, XApiError> {
        Self::with_base_url(bearer_token, X_API_BASE_URL)
    }

    /// 接続先を指定してクライアントを作成
    pub fn with_base_url(
        bearer_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, XApiError> {
        let bearer_token = bearer_token.into();
        if bearer_token.trim().is_empty() {
            return Err(XApiError::MissingToken);
        }

        Ok(Self {
            bearer_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        })
    }

    /// GETリクエストを送りJSONを返す
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, XApiError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.bearer_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(XApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// ユーザーIDを取得（見つからなければ None）
    pub async fn user_id(&self, username: &str) -> Result<Option<String>, XApiError> {
        let path = format!("/users/by/username/{}", username.trim_start_matches('@'));
        let response: UserResponse = self.get_json(&path, &[]).await?;
        Ok(response.data.map(|u| u.id))
    }

    /// 特定ユーザーのタイムラインを取得
    pub async fn user_timeline(
        &self,
        username: &str,
        max_results: u32,
    ) -> Result<Vec<Tweet>, XApiError> {
        let user_id = self
            .user_id(username)
            .await?
            .ok_or_else(|| XApiError::UserNotFound(username.to_string()))?;

        let response: TweetsResponse = self
            .get_json(
                &format!("/users/{user_id}/tweets"),
                &[
                    ("max_results", max_results.to_string()),
                    ("tweet.fields", TWEET_FIELDS.to_string()),
                ],
            )
            .await?;

        tracing::debug!(username, count = response.data.len(), "タイムラインを取得");
        Ok(response.data)
    }

    /// 複数アカウントのタイムラインを並行取得
    ///
    /// 結果は入力と同じ順で返る。1アカウントの失敗は他に影響しない。
    pub async fn timelines(
        &self,
        usernames: &[String],
        max_results: u32,
    ) -> Vec<(String, Result<Vec<Tweet>, XApiError>)> {
        let mut tasks = JoinSet::new();
        for (index, username) in usernames.iter().cloned().enumerate() {
            let client = self.clone();
            tasks.spawn(async move {
                let result = client.user_timeline(&username, max_results).await;
                (index, username, result)
            });
        }

        let mut results = Vec::with_capacity(usernames.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(entry) => results.push(entry),
                Err(e) => tracing::error!("タイムライン取得タスクが異常終了: {}", e),
            }
        }

        results.sort_by_key(|(index, _, _)| *index);
        results
            .into_iter()
            .map(|(_, username, result)| (username, result))
            .collect()
    }

    /// 直近の投稿をキーワード検索
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Tweet>, XApiError> {
        let response: TweetsResponse = self
            .get_json(
                "/tweets/search/recent",
                &[
                    ("query", query.to_string()),
                    ("max_results", max_results.to_string()),
                    ("tweet.fields", TWEET_FIELDS.to_string()),
                ],
            )
            .await?;

        Ok(response.data)
    }
}
