//! GraphQL client for the school notice.
//!
//! The upstream exposes a single parameterless field, `notice`, holding the
//! current announcement as plain text. Caching and retries are left to the
//! caller; each call is one POST.

use serde::{Deserialize, Serialize};

use crate::config::UpstreamConfig;

const NOTICE_QUERY: &str = "query { notice }";

#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("notice query returned errors: {0}")]
    GraphQl(String),
    #[error("notice query returned no notice")]
    MissingNotice,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    data: Option<NoticeData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct NoticeData {
    notice: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl GraphQlResponse {
    /// Extract the notice, treating any reported GraphQL error as a failure.
    pub fn into_notice(self) -> Result<String, NoticeError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(NoticeError::GraphQl(messages.join("; ")));
        }
        self.data
            .and_then(|d| d.notice)
            .ok_or(NoticeError::MissingNotice)
    }
}

/// Run the notice query against the configured endpoint.
pub async fn fetch_notice(config: &UpstreamConfig) -> Result<String, NoticeError> {
    tracing::debug!("Querying notice from {}", config.graphql_url);

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let response: GraphQlResponse = client
        .post(&config.graphql_url)
        .json(&GraphQlRequest {
            query: NOTICE_QUERY,
        })
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    response.into_notice()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<String, NoticeError> {
        serde_json::from_str::<GraphQlResponse>(body)
            .unwrap()
            .into_notice()
    }

    #[test]
    fn test_notice_extracted() {
        let notice = parse(r#"{"data":{"notice":"오늘은 단축수업입니다."}}"#).unwrap();
        assert_eq!(notice, "오늘은 단축수업입니다.");
    }

    #[test]
    fn test_graphql_errors_are_reported() {
        let err = parse(
            r#"{"data":null,"errors":[{"message":"Unauthorized"},{"message":"try again"}]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "notice query returned errors: Unauthorized; try again"
        );
    }

    #[test]
    fn test_null_notice_is_missing() {
        assert!(matches!(
            parse(r#"{"data":{"notice":null}}"#),
            Err(NoticeError::MissingNotice)
        ));
        assert!(matches!(parse(r#"{}"#), Err(NoticeError::MissingNotice)));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&GraphQlRequest {
            query: NOTICE_QUERY,
        })
        .unwrap();
        assert_eq!(body, r#"{"query":"query { notice }"}"#);
    }
}
