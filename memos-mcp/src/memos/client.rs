//! Remote API client for the Memos service
//!
//! [`MemosClient`] is a stateless wrapper over the Memos REST API: it knows
//! the endpoint shapes, attaches the bearer token, and folds every transport
//! or HTTP failure into the library error type. Calls are fire-once: no
//! retries, no backoff, no explicit timeout beyond reqwest's defaults.
//!
//! The [`MemosApi`] trait is the seam the tool handlers depend on, so tests
//! can substitute an in-memory double (see [`super::mock_client`]).

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};

use crate::config::MemosConfig;
use crate::error::{MemosMcpError, Result};

use super::{effective_filter, ListMemosResponse, Memo, MemoListParams, MemoPatch, Visibility};

/// Operations the Memos REST API exposes to this adapter.
///
/// Every method issues exactly one HTTP request, except [`search_memos`]
/// (which builds a filter and delegates to [`list_memos`]).
///
/// [`search_memos`]: MemosApi::search_memos
/// [`list_memos`]: MemosApi::list_memos
#[async_trait]
pub trait MemosApi: Send + Sync {
    /// List memos, optionally limited and filtered
    async fn list_memos(&self, params: MemoListParams) -> Result<Vec<Memo>>;

    /// Fetch a single memo by its bare ID
    async fn get_memo(&self, id: &str) -> Result<Memo>;

    /// Create a memo with the given content and visibility
    async fn create_memo(&self, content: &str, visibility: Visibility) -> Result<Memo>;

    /// Apply a partial update to a memo; absent fields are left untouched
    async fn update_memo(&self, id: &str, patch: MemoPatch) -> Result<Memo>;

    /// Delete a memo by its bare ID
    async fn delete_memo(&self, id: &str) -> Result<()>;

    /// List all tags known to the instance, as an opaque payload
    async fn list_tags(&self) -> Result<serde_json::Value>;

    /// Search memos by free-text query and/or explicit filter expression.
    ///
    /// An explicit expression takes precedence over the free-text query.
    async fn search_memos(
        &self,
        query: Option<&str>,
        filter_expr: Option<&str>,
    ) -> Result<Vec<Memo>> {
        let params = MemoListParams {
            limit: None,
            filter: effective_filter(query, filter_expr),
        };
        self.list_memos(params).await
    }
}

/// HTTP client for the Memos REST API
#[derive(Debug, Clone)]
pub struct MemosClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL of the Memos instance, without a trailing slash
    base_url: String,
    /// API access token sent as a bearer credential
    api_key: String,
}

impl MemosClient {
    /// Create a client from the given configuration
    pub fn new(config: &MemosConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build an authorized request for the given endpoint path
    fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Connection failures become [`MemosMcpError::Transport`]; non-2xx
    /// statuses become [`MemosMcpError::Remote`] (or `MemoNotFound` for 404),
    /// with the response body preserved as the failure description.
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| MemosMcpError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Memos API request failed: {detail}");
            if status == StatusCode::NOT_FOUND {
                return Err(MemosMcpError::MemoNotFound(detail));
            }
            return Err(MemosMcpError::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<T>().await.map_err(|e| MemosMcpError::Remote {
            status: status.as_u16(),
            detail: format!("failed to decode response body: {e}"),
        })
    }

    /// As [`send`](Self::send) but discarding the response body
    async fn send_empty(&self, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| MemosMcpError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Memos API request failed: {detail}");
            if status == StatusCode::NOT_FOUND {
                return Err(MemosMcpError::MemoNotFound(detail));
            }
            return Err(MemosMcpError::Remote {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MemosApi for MemosClient {
    async fn list_memos(&self, params: MemoListParams) -> Result<Vec<Memo>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(filter) = params.filter {
            query.push(("filter", filter));
        }

        let request = self.request(Method::GET, "/api/v1/memos").query(&query);
        let response: ListMemosResponse = self.send(request).await?;
        Ok(response.memos)
    }

    async fn get_memo(&self, id: &str) -> Result<Memo> {
        let request = self.request(Method::GET, &format!("/api/v1/memos/{id}"));
        self.send(request).await
    }

    async fn create_memo(&self, content: &str, visibility: Visibility) -> Result<Memo> {
        let body = serde_json::json!({
            "content": content,
            "visibility": visibility,
        });
        let request = self.request(Method::POST, "/api/v1/memos").json(&body);
        self.send(request).await
    }

    async fn update_memo(&self, id: &str, patch: MemoPatch) -> Result<Memo> {
        let request = self
            .request(Method::PATCH, &format!("/api/v1/memos/{id}"))
            .json(&patch);
        self.send(request).await
    }

    async fn delete_memo(&self, id: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &format!("/api/v1/memos/{id}"));
        self.send_empty(request).await
    }

    async fn list_tags(&self) -> Result<serde_json::Value> {
        let request = self.request(Method::GET, "/api/v1/tag");
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> MemosClient {
        let config = MemosConfig::new("https://memos.example.com/", "test-key", None);
        MemosClient::new(&config)
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = test_client();
        assert_eq!(client.base_url, "https://memos.example.com");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 1 on loopback is refused immediately, so no real service is
        // ever contacted.
        let config = MemosConfig::new("http://127.0.0.1:1", "test-key", None);
        let client = MemosClient::new(&config);
        let result = client.get_memo("ABC123").await;
        assert!(matches!(result, Err(MemosMcpError::Transport(_))));
    }

    #[tokio::test]
    async fn test_search_memos_builds_contains_filter() {
        // The default search implementation routes through list_memos with
        // the constructed filter; capture it with a recording double.
        use std::sync::Mutex;

        #[derive(Default)]
        struct Recorder {
            filters: Mutex<Vec<Option<String>>>,
        }

        #[async_trait]
        impl MemosApi for Recorder {
            async fn list_memos(&self, params: MemoListParams) -> Result<Vec<Memo>> {
                self.filters.lock().unwrap().push(params.filter);
                Ok(Vec::new())
            }
            async fn get_memo(&self, _id: &str) -> Result<Memo> {
                unreachable!()
            }
            async fn create_memo(&self, _content: &str, _visibility: Visibility) -> Result<Memo> {
                unreachable!()
            }
            async fn update_memo(&self, _id: &str, _patch: MemoPatch) -> Result<Memo> {
                unreachable!()
            }
            async fn delete_memo(&self, _id: &str) -> Result<()> {
                unreachable!()
            }
            async fn list_tags(&self) -> Result<serde_json::Value> {
                unreachable!()
            }
        }

        let recorder = Recorder::default();
        recorder.search_memos(Some("hello"), None).await.unwrap();
        recorder
            .search_memos(Some("foo"), Some("createTime > 0"))
            .await
            .unwrap();
        recorder.search_memos(None, None).await.unwrap();

        let filters = recorder.filters.lock().unwrap();
        assert_eq!(
            filters[0].as_deref(),
            Some("content.contains('hello')")
        );
        assert_eq!(filters[1].as_deref(), Some("createTime > 0"));
        assert_eq!(filters[2], None);
    }
}
