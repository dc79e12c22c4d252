// X API リクエスト/レスポンス構造体

use serde::Deserialize;

use crate::parser::RawMessage;

/// 投稿
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
}

impl Tweet {
    /// 投稿元ラベルを付けて抽出用のメッセージにする
    pub fn into_message(self, source: impl Into<String>) -> RawMessage {
        RawMessage::new(self.text, source)
    }
}

/// `data` が配列のレスポンス（タイムライン・検索）
#[derive(Debug, Deserialize)]
pub(super) struct TweetsResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
}

/// `data` が単体のレスポンス（ユーザー検索）
#[derive(Debug, Deserialize)]
pub(super) struct UserResponse {
    pub data: Option<User>,
}

#[derive(Debug, Deserialize)]
pub(super) struct User {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_response() {
        let body = r#"{
            "data": [
                {"id": "1", "text": "【楽天】ES 5/10（土）", "created_at": "2026-05-01T00:00:00.000Z", "author_id": "42"},
                {"id": "2", "text": "hello"}
            ],
            "meta": {"result_count": 2}
        }"#;
        let parsed: TweetsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].author_id.as_deref(), Some("42"));
        assert_eq!(parsed.data[1].created_at, None);
    }

    #[test]
    fn empty_timeline_has_no_data_field() {
        let parsed: TweetsResponse =
            serde_json::from_str(r#"{"meta": {"result_count": 0}}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn unknown_user_has_only_errors() {
        let parsed: UserResponse =
            serde_json::from_str(r#"{"errors": [{"title": "Not Found Error"}]}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn tweet_into_message() {
        let tweet = Tweet {
            id: "1".into(),
            text: "本文".into(),
            created_at: None,
            author_id: None,
        };
        assert_eq!(tweet.into_message("@a"), RawMessage::new("本文", "@a"));
    }
}
