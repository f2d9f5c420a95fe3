//! Tool handlers for MCP operations
//!
//! Each handler translates a typed tool request into remote API calls and a
//! text payload. Handlers return `Result<String>`; the conversion to protocol
//! content (including the error-as-content contract) happens once, in
//! [`super::responses::respond`].

use std::sync::Arc;

use crate::error::{MemosMcpError, Result};
use crate::memos::{
    content_with_tags, normalize_memo_id, remove_tag, MemoListParams, MemoPatch, MemosApi,
};

use super::memo_types::*;

/// Number of memos served by the `memos://recent` resource
const RECENT_MEMOS_LIMIT: u32 = 10;

/// Tool handlers for MCP server operations
#[derive(Clone)]
pub struct ToolHandlers {
    api: Arc<dyn MemosApi>,
    default_tag: Option<String>,
}

impl ToolHandlers {
    /// Create a new tool handlers instance over the given API client
    pub fn new(api: Arc<dyn MemosApi>, default_tag: Option<String>) -> Self {
        Self { api, default_tag }
    }

    /// Handle the search_memos tool operation.
    ///
    /// An explicit filter expression takes precedence over the free-text
    /// query; with neither, the unfiltered list is returned.
    pub async fn handle_search(&self, request: SearchMemosRequest) -> Result<String> {
        tracing::debug!("Searching memos, query: {:?}", request.query);

        let memos = self
            .api
            .search_memos(request.query.as_deref(), request.filter.as_deref())
            .await?;
        tracing::info!("Search returned {} memos", memos.len());
        Ok(serde_json::to_string_pretty(&memos)?)
    }

    /// Handle the filter_memos tool operation.
    ///
    /// Restricted alias of search that accepts only an explicit filter
    /// expression.
    pub async fn handle_filter(&self, request: FilterMemosRequest) -> Result<String> {
        tracing::debug!("Filtering memos with: {}", request.filter);

        let memos = self.api.search_memos(None, Some(&request.filter)).await?;
        tracing::info!("Filter returned {} memos", memos.len());
        Ok(serde_json::to_string_pretty(&memos)?)
    }

    /// Handle the create_memo tool operation.
    ///
    /// When the caller supplies no tag list, the configured default tag (if
    /// any) is applied. Tags are embedded in the submitted content per the
    /// tag-encoding convention.
    pub async fn handle_create(&self, request: CreateMemoRequest) -> Result<String> {
        tracing::debug!("Creating memo, visibility: {:?}", request.visibility);

        let tags = match request.tags {
            Some(tags) => tags,
            None => self.default_tag.clone().into_iter().collect(),
        };
        let content = content_with_tags(&request.content, &tags);

        let memo = self.api.create_memo(&content, request.visibility).await?;
        tracing::info!("Created memo {}", memo.name);
        Ok(serde_json::to_string_pretty(&memo)?)
    }

    /// Handle the update_memo tool operation.
    ///
    /// Builds a partial patch from the supplied fields. Supplying neither
    /// content nor visibility is a validation error answered without any
    /// remote call, since an empty PATCH would be a silent no-op.
    pub async fn handle_update(&self, request: UpdateMemoRequest) -> Result<String> {
        tracing::debug!("Updating memo {}", request.memo_id);

        let patch = MemoPatch {
            content: request.content,
            visibility: request.visibility,
        };
        if patch.is_empty() {
            return Err(MemosMcpError::Validation(
                "provide new content or visibility to update".to_string(),
            ));
        }

        let memo = self.api.update_memo(&request.memo_id, patch).await?;
        tracing::info!("Updated memo {}", memo.name);
        Ok(serde_json::to_string_pretty(&memo)?)
    }

    /// Handle the delete_memo tool operation.
    ///
    /// Accepts the ID with or without the `memos/` prefix and reports the
    /// normalized ID back in the confirmation.
    pub async fn handle_delete(&self, request: DeleteMemoRequest) -> Result<String> {
        let memo_id = normalize_memo_id(&request.memo_id);
        tracing::debug!("Deleting memo {memo_id}");

        self.api.delete_memo(memo_id).await?;
        tracing::info!("Deleted memo {memo_id}");
        Ok(format!("Successfully deleted memo {memo_id}"))
    }

    /// Handle the delete_memo_tag tool operation.
    ///
    /// Read-modify-write: fetches the memo, strips the literal `#tag` token
    /// from its content, and submits the trimmed content as a full content
    /// update. There is no concurrency guard; a concurrent edit between the
    /// read and the write is lost (last writer wins).
    pub async fn handle_delete_tag(&self, request: DeleteMemoTagRequest) -> Result<String> {
        if request.memo_id.is_empty() {
            return Err(MemosMcpError::Validation(
                "provide a memo ID".to_string(),
            ));
        }
        let memo_id = normalize_memo_id(&request.memo_id);
        tracing::debug!("Removing tag #{} from memo {memo_id}", request.tag);

        let memo = self.api.get_memo(memo_id).await?;
        let new_content = remove_tag(&memo.content, &request.tag);
        let patch = MemoPatch {
            content: Some(new_content),
            visibility: None,
        };
        let updated = self.api.update_memo(memo_id, patch).await?;
        tracing::info!("Removed tag #{} from memo {memo_id}", request.tag);
        Ok(serde_json::to_string_pretty(&updated)?)
    }

    /// Handle the list_tags tool operation.
    ///
    /// The tag listing is passed through uninterpreted.
    pub async fn handle_list_tags(&self, _request: ListTagsRequest) -> Result<String> {
        tracing::debug!("Listing tags");

        let tags = self.api.list_tags().await?;
        Ok(serde_json::to_string_pretty(&tags)?)
    }

    /// Serve the `memos://recent` resource: the ten most recent memos.
    pub async fn handle_recent_memos(&self) -> Result<String> {
        tracing::debug!("Reading recent memos resource");

        let memos = self
            .api
            .list_memos(MemoListParams {
                limit: Some(RECENT_MEMOS_LIMIT),
                filter: None,
            })
            .await?;
        Ok(serde_json::to_string_pretty(&memos)?)
    }

    /// Serve the `memos://all` resource: every memo the API returns.
    pub async fn handle_all_memos(&self) -> Result<String> {
        tracing::debug!("Reading all memos resource");

        let memos = self.api.list_memos(MemoListParams::default()).await?;
        Ok(serde_json::to_string_pretty(&memos)?)
    }

    /// Serve the `memos://memos/{id}` resource: a single memo.
    ///
    /// The ID is passed to the remote call exactly as given. Unlike the
    /// delete tools, this read path does not strip a `memos/` prefix.
    pub async fn handle_memo_by_id(&self, memo_id: &str) -> Result<String> {
        tracing::debug!("Reading memo resource {memo_id}");

        let memo = self.api.get_memo(memo_id).await?;
        Ok(serde_json::to_string_pretty(&memo)?)
    }
}
