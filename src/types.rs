// Wire types for the search backend and the error taxonomy shown to the user

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when the backend cannot be reached at all.
pub const CONNECTION_FAILURE_MESSAGE: &str = "Connection problem: Unable to reach the backend.";

/// Shown for any non-2xx response, regardless of body.
pub const BACKEND_FAILURE_MESSAGE: &str = "Backend could not process the request";

/// Fallback when an error carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// A title/description pair from the knowledge graph.
///
/// A missing or `null` field decodes to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl RelatedItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Payload returned by `GET /search/`.
///
/// Every list is optional on the wire; `null` and a missing key both decode to an
/// empty list. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Echo of the submitted query, when the backend sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Primary hits; their shape is owned by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
    /// Backend-generated alternate phrasings of the query
    #[serde(default, deserialize_with = "null_as_default")]
    pub expanded_queries: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_items: Vec<RelatedItem>,
}

impl SearchResponse {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, SearchError> {
        serde_json::from_slice(body).map_err(|e| SearchError::Malformed(e.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Errors that can end a search attempt
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("transport failure: {0}")]
    Connection(String),

    #[error("backend returned HTTP {status}")]
    Backend { status: u16 },

    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// The text stored in the interaction state's `error` field.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Connection(_) => CONNECTION_FAILURE_MESSAGE.to_string(),
            SearchError::Backend { .. } => BACKEND_FAILURE_MESSAGE.to_string(),
            SearchError::Malformed(msg) | SearchError::Other(msg) => {
                if msg.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    msg.clone()
                }
            }
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            SearchError::Other(err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            SearchError::Connection(err.to_string())
        } else if err.is_decode() {
            SearchError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::Backend {
                status: status.as_u16(),
            }
        } else {
            SearchError::Other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_lists_are_empty() {
        let resp = SearchResponse::from_slice(br#"{"results": null}"#).unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.expanded_queries.is_empty());
        assert!(resp.related_items.is_empty());
        assert_eq!(resp.query, None);
    }

    #[test]
    fn test_null_item_fields_are_empty() {
        let body = br#"{"related_items":[{"title":null,"description":"Warm"},{"title":"Cap","review":"ok"}]}"#;
        let resp = SearchResponse::from_slice(body).unwrap();
        assert_eq!(
            resp.related_items,
            vec![RelatedItem::new("", "Warm"), RelatedItem::new("Cap", "")]
        );
    }

    #[test]
    fn test_full_response_keeps_order() {
        let body = br#"{
            "query": "red dress",
            "expanded_queries": ["red dress", "crimson gown"],
            "results": [{"score": 0.9}, {"score": 0.4}],
            "related_items": [
                {"title": "A", "description": "B"},
                {"title": "C", "description": "D", "extra": 1}
            ],
            "unrelated": true
        }"#;
        let resp = SearchResponse::from_slice(body).unwrap();
        assert_eq!(resp.query.as_deref(), Some("red dress"));
        assert_eq!(resp.expanded_queries, vec!["red dress", "crimson gown"]);
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0]["score"], 0.9);
        assert_eq!(
            resp.related_items,
            vec![RelatedItem::new("A", "B"), RelatedItem::new("C", "D")]
        );
    }

    #[test]
    fn test_malformed_body() {
        let err = SearchResponse::from_slice(b"<html>").unwrap_err();
        assert!(matches!(err, SearchError::Malformed(_)));
        assert!(!err.user_message().is_empty());
        assert_ne!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SearchError::Connection("refused".into()).user_message(),
            CONNECTION_FAILURE_MESSAGE
        );
        assert_eq!(
            SearchError::Backend { status: 500 }.user_message(),
            BACKEND_FAILURE_MESSAGE
        );
        assert_eq!(SearchError::Other(String::new()).user_message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(SearchError::Other("boom".into()).user_message(), "boom");
    }
}
