//! Request types for the memo MCP tools

use serde::{Deserialize, Serialize};

use crate::memos::Visibility;

/// Request to search memos by free text and/or filter expression
///
/// # Examples
///
/// Search with a free-text query:
/// ```ignore
/// SearchMemosRequest {
///     query: Some("meeting notes".to_string()),
///     filter: None,
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SearchMemosRequest {
    /// Free-text query, translated to a `content.contains(...)` filter
    #[serde(default)]
    pub query: Option<String>,
    /// Explicit CEL filter expression; takes precedence over `query`
    #[serde(default)]
    pub filter: Option<String>,
}

/// Request to filter memos with an explicit CEL expression
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct FilterMemosRequest {
    /// CEL filter expression, e.g. `content.contains('keyword')`
    pub filter: String,
}

/// Request to create a new memo
///
/// # Examples
///
/// Create a private memo with one tag:
/// ```ignore
/// CreateMemoRequest {
///     content: "Ship the release".to_string(),
///     visibility: Visibility::Private,
///     tags: Some(vec!["work".to_string()]),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreateMemoRequest {
    /// Memo content
    pub content: String,
    /// Visibility setting, defaults to private
    #[serde(default)]
    pub visibility: Visibility,
    /// Tags to embed in the content; when omitted, the configured default
    /// tag is applied instead
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request to update a memo's content and/or visibility
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct UpdateMemoRequest {
    /// ID of the memo to update
    pub memo_id: String,
    /// New content, if changing
    #[serde(default)]
    pub content: Option<String>,
    /// New visibility, if changing
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

/// Request to delete a memo
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DeleteMemoRequest {
    /// ID of the memo to delete, with or without the `memos/` prefix
    pub memo_id: String,
}

/// Request to remove a tag from a memo's content
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DeleteMemoTagRequest {
    /// ID of the memo, with or without the `memos/` prefix
    pub memo_id: String,
    /// Tag name to remove, without the `#` prefix
    pub tag: String,
}

/// Request to list all tags known to the instance
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ListTagsRequest {
    // No parameters needed for listing tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_memos_request_serialization() {
        let request = SearchMemosRequest {
            query: Some("test search".to_string()),
            filter: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: SearchMemosRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.query, deserialized.query);
        assert_eq!(request.filter, deserialized.filter);
    }

    #[test]
    fn test_search_memos_request_empty_arguments() {
        let deserialized: SearchMemosRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(deserialized.query, None);
        assert_eq!(deserialized.filter, None);
    }

    #[test]
    fn test_create_memo_request_defaults() {
        let deserialized: CreateMemoRequest =
            serde_json::from_str(r#"{"content": "note"}"#).unwrap();
        assert_eq!(deserialized.content, "note");
        assert_eq!(deserialized.visibility, Visibility::Private);
        assert_eq!(deserialized.tags, None);
    }

    #[test]
    fn test_create_memo_request_serialization() {
        let request = CreateMemoRequest {
            content: "Test Content".to_string(),
            visibility: Visibility::Public,
            tags: Some(vec!["work".to_string()]),
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: CreateMemoRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.content, deserialized.content);
        assert_eq!(request.visibility, deserialized.visibility);
        assert_eq!(request.tags, deserialized.tags);
    }

    #[test]
    fn test_update_memo_request_partial_fields() {
        let deserialized: UpdateMemoRequest =
            serde_json::from_str(r#"{"memo_id": "ABC123"}"#).unwrap();
        assert_eq!(deserialized.memo_id, "ABC123");
        assert_eq!(deserialized.content, None);
        assert_eq!(deserialized.visibility, None);
    }

    #[test]
    fn test_delete_memo_tag_request_serialization() {
        let request = DeleteMemoTagRequest {
            memo_id: "memos/ABC123".to_string(),
            tag: "shopping".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: DeleteMemoTagRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.memo_id, deserialized.memo_id);
        assert_eq!(request.tag, deserialized.tag);
    }

    #[test]
    fn test_visibility_wire_format() {
        let json = serde_json::to_string(&Visibility::Protected).unwrap();
        assert_eq!(json, r#""PROTECTED""#);
    }
}
