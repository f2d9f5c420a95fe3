//! Memo domain types and translation policy
//!
//! This module holds the wire-level representation of a memo together with the
//! small set of policy decisions this adapter layers on top of the remote API:
//! identifier normalization, tag-in-content encoding, and search-filter
//! construction.
//!
//! Tags are not a structural field on a memo. The remote service treats a
//! `#tag` token embedded in `content` as a tag, so adding and removing tags
//! here is literal text manipulation. That convention (including the trailing
//! trim after removal and the duplicate-token check on insert) is load-bearing
//! for compatibility and must not be "improved".

pub mod client;
pub mod mock_client;

pub use client::{MemosApi, MemosClient};

use serde::{Deserialize, Serialize};

/// Resource-name prefix the remote service uses for memo identifiers
const MEMO_NAME_PREFIX: &str = "memos/";

/// Memo visibility levels accepted by the remote service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Visible to the owning user only
    #[default]
    Private,
    /// Visible to logged-in users of the instance
    Protected,
    /// Visible to anyone
    Public,
}

/// A memo as exchanged with the remote service.
///
/// Only the fields this adapter interprets are typed; everything else the
/// server manages (timestamps, creator, and whatever future fields appear)
/// is carried through `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Memo {
    /// Resource name in the form `memos/{id}`
    #[serde(default)]
    pub name: String,
    /// Free text body; may embed `#tag` tokens
    #[serde(default)]
    pub content: String,
    /// Visibility level
    #[serde(default)]
    pub visibility: Visibility,
    /// Server-managed fields, passed through uninterpreted
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope returned by the memo collection endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMemosResponse {
    /// The memos in this page
    #[serde(default)]
    pub memos: Vec<Memo>,
}

/// Query parameters for listing memos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoListParams {
    /// Maximum number of memos to return
    pub limit: Option<u32>,
    /// CEL filter expression, passed through verbatim
    pub filter: Option<String>,
}

/// Partial update payload for a memo.
///
/// Absent fields are omitted from the PATCH body entirely, leaving the
/// server-side value untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoPatch {
    /// New content, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New visibility, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl MemoPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.visibility.is_none()
    }
}

/// Strip a leading `memos/` prefix from a memo identifier.
///
/// Callers may address memos either by bare ID or by full resource name;
/// the remote single-item endpoints want the bare form. Normalizing an
/// already-bare ID is a no-op, so the operation is idempotent.
pub fn normalize_memo_id(id: &str) -> &str {
    id.strip_prefix(MEMO_NAME_PREFIX).unwrap_or(id)
}

/// Build the effective remote filter from a free-text query and/or an
/// explicit filter expression.
///
/// An explicit expression always wins; a free-text query alone becomes
/// `content.contains('<query>')`. With neither, no filter is sent.
pub fn effective_filter(query: Option<&str>, filter_expr: Option<&str>) -> Option<String> {
    if let Some(expr) = filter_expr {
        return Some(expr.to_string());
    }
    query.map(|q| format!("content.contains('{q}')"))
}

/// Append tag tokens to memo content.
///
/// The content gains a newline, then each tag (given with or without its
/// leading `#`) is appended space-separated unless that exact token already
/// appears somewhere in the accumulated text.
pub fn content_with_tags(content: &str, tags: &[String]) -> String {
    let mut tagged = format!("{content}\n");
    for tag in tags {
        let token = if tag.starts_with('#') {
            tag.clone()
        } else {
            format!("#{tag}")
        };
        if !tagged.contains(&token) {
            tagged.push(' ');
            tagged.push_str(&token);
        }
    }
    tagged
}

/// Remove a tag token from memo content.
///
/// Every occurrence of the literal substring `#<tag>` is deleted and the
/// result is trimmed. Only the exact token is matched; there is no
/// word-boundary handling beyond the literal text.
pub fn remove_tag(content: &str, tag: &str) -> String {
    let token = format!("#{tag}");
    content.replace(&token, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_prefix() {
        assert_eq!(normalize_memo_id("memos/ABC123"), "ABC123");
    }

    #[test]
    fn test_normalize_bare_id_is_noop() {
        assert_eq!(normalize_memo_id("ABC123"), "ABC123");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_memo_id("memos/G3o72r9oijTWFxy9ueWzW7");
        let twice = normalize_memo_id(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_effective_filter_from_query() {
        assert_eq!(
            effective_filter(Some("hello"), None),
            Some("content.contains('hello')".to_string())
        );
    }

    #[test]
    fn test_effective_filter_explicit_expression_wins() {
        assert_eq!(
            effective_filter(Some("foo"), Some("createTime > 0")),
            Some("createTime > 0".to_string())
        );
    }

    #[test]
    fn test_effective_filter_neither() {
        assert_eq!(effective_filter(None, None), None);
    }

    #[test]
    fn test_content_with_tags_appends_token() {
        let result = content_with_tags("note", &["work".to_string()]);
        assert_eq!(result, "note\n #work");
    }

    #[test]
    fn test_content_with_tags_accepts_hash_prefixed() {
        let result = content_with_tags("note", &["#work".to_string()]);
        assert_eq!(result, "note\n #work");
    }

    #[test]
    fn test_content_with_tags_skips_duplicates() {
        let result = content_with_tags("note", &["work".to_string(), "#work".to_string()]);
        assert_eq!(result, "note\n #work");
    }

    #[test]
    fn test_content_with_tags_skips_tag_already_in_content() {
        // A token the author already typed is not appended again.
        let result = content_with_tags("note about #work stuff", &["work".to_string()]);
        assert_eq!(result, "note about #work stuff\n");
    }

    #[test]
    fn test_content_with_tags_empty_list() {
        assert_eq!(content_with_tags("note", &[]), "note\n");
    }

    #[test]
    fn test_remove_tag_strips_token_and_trims() {
        assert_eq!(
            remove_tag("Buy milk #shopping #home", "shopping"),
            "Buy milk  #home"
        );
    }

    #[test]
    fn test_remove_tag_trailing_token() {
        assert_eq!(remove_tag("Buy milk #shopping", "shopping"), "Buy milk");
    }

    #[test]
    fn test_remove_tag_absent_token_is_noop() {
        assert_eq!(remove_tag("Buy milk", "shopping"), "Buy milk");
    }

    #[test]
    fn test_memo_roundtrip_preserves_unknown_fields() {
        let json = serde_json::json!({
            "name": "memos/ABC",
            "content": "hello",
            "visibility": "PUBLIC",
            "createTime": "2024-01-01T00:00:00Z"
        });
        let memo: Memo = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(memo.name, "memos/ABC");
        assert_eq!(memo.visibility, Visibility::Public);
        let back = serde_json::to_value(&memo).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_list_response_tolerates_missing_memos_field() {
        let response: ListMemosResponse = serde_json::from_str("{}").unwrap();
        assert!(response.memos.is_empty());
    }

    #[test]
    fn test_memo_patch_skips_absent_fields() {
        let patch = MemoPatch {
            content: Some("new".to_string()),
            visibility: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"content": "new"}));
    }

    #[test]
    fn test_memo_patch_is_empty() {
        assert!(MemoPatch::default().is_empty());
        assert!(!MemoPatch {
            content: Some("x".to_string()),
            visibility: None
        }
        .is_empty());
    }
}
