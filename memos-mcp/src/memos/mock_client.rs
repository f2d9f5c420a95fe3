//! In-memory test double for the Memos API
//!
//! Records every call so tests can assert not just on results but on how many
//! remote operations a handler performed (the update-precondition and
//! read-modify-write properties depend on exact call counts).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{MemosMcpError, Result};

use super::{Memo, MemoListParams, MemoPatch, MemosApi, Visibility};

/// Recorded calls made against a [`MockMemosApi`]
#[derive(Debug, Default)]
pub struct CallLog {
    /// Parameters of every `list_memos` call
    pub list: Vec<MemoListParams>,
    /// IDs passed to `get_memo`
    pub get: Vec<String>,
    /// Content/visibility pairs passed to `create_memo`
    pub create: Vec<(String, Visibility)>,
    /// ID/patch pairs passed to `update_memo`
    pub update: Vec<(String, MemoPatch)>,
    /// IDs passed to `delete_memo`
    pub delete: Vec<String>,
    /// Number of `list_tags` calls
    pub tags: usize,
}

impl CallLog {
    /// Total number of remote operations performed
    pub fn total(&self) -> usize {
        self.list.len()
            + self.get.len()
            + self.create.len()
            + self.update.len()
            + self.delete.len()
            + self.tags
    }
}

/// In-memory [`MemosApi`] implementation backed by a `Vec<Memo>`
#[derive(Debug, Default)]
pub struct MockMemosApi {
    memos: Mutex<Vec<Memo>>,
    calls: Mutex<CallLog>,
    fail_transport: Mutex<Option<String>>,
    next_id: Mutex<u64>,
}

impl MockMemosApi {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-populated with the given memos
    pub fn with_memos(memos: Vec<Memo>) -> Self {
        Self {
            memos: Mutex::new(memos),
            ..Self::default()
        }
    }

    /// Build a memo value with the canonical `memos/{id}` resource name
    pub fn memo(id: &str, content: &str, visibility: Visibility) -> Memo {
        Memo {
            name: format!("memos/{id}"),
            content: content.to_string(),
            visibility,
            extra: serde_json::Map::new(),
        }
    }

    /// Make every subsequent call fail with a transport error
    pub fn fail_with_transport(&self, message: &str) {
        *self.fail_transport.lock().unwrap() = Some(message.to_string());
    }

    /// Inspect the recorded calls
    pub fn calls<R>(&self, f: impl FnOnce(&CallLog) -> R) -> R {
        f(&self.calls.lock().unwrap())
    }

    /// Snapshot of the current memo store
    pub fn memos(&self) -> Vec<Memo> {
        self.memos.lock().unwrap().clone()
    }

    fn check_transport(&self) -> Result<()> {
        if let Some(message) = self.fail_transport.lock().unwrap().as_ref() {
            return Err(MemosMcpError::Transport(message.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl MemosApi for MockMemosApi {
    async fn list_memos(&self, params: MemoListParams) -> Result<Vec<Memo>> {
        self.calls.lock().unwrap().list.push(params.clone());
        self.check_transport()?;
        let memos = self.memos.lock().unwrap();
        let limit = params.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(memos.iter().take(limit).cloned().collect())
    }

    async fn get_memo(&self, id: &str) -> Result<Memo> {
        self.calls.lock().unwrap().get.push(id.to_string());
        self.check_transport()?;
        let name = format!("memos/{id}");
        self.memos
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| MemosMcpError::MemoNotFound(id.to_string()))
    }

    async fn create_memo(&self, content: &str, visibility: Visibility) -> Result<Memo> {
        self.calls
            .lock()
            .unwrap()
            .create
            .push((content.to_string(), visibility));
        self.check_transport()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let memo = Self::memo(&format!("mock{next_id}"), content, visibility);
        self.memos.lock().unwrap().push(memo.clone());
        Ok(memo)
    }

    async fn update_memo(&self, id: &str, patch: MemoPatch) -> Result<Memo> {
        self.calls
            .lock()
            .unwrap()
            .update
            .push((id.to_string(), patch.clone()));
        self.check_transport()?;
        let name = format!("memos/{id}");
        let mut memos = self.memos.lock().unwrap();
        let memo = memos
            .iter_mut()
            .find(|m| m.name == name)
            .ok_or_else(|| MemosMcpError::MemoNotFound(id.to_string()))?;
        if let Some(content) = patch.content {
            memo.content = content;
        }
        if let Some(visibility) = patch.visibility {
            memo.visibility = visibility;
        }
        Ok(memo.clone())
    }

    async fn delete_memo(&self, id: &str) -> Result<()> {
        self.calls.lock().unwrap().delete.push(id.to_string());
        self.check_transport()?;
        let name = format!("memos/{id}");
        let mut memos = self.memos.lock().unwrap();
        let before = memos.len();
        memos.retain(|m| m.name != name);
        if memos.len() == before {
            return Err(MemosMcpError::MemoNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn list_tags(&self) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().tags += 1;
        self.check_transport()?;
        let memos = self.memos.lock().unwrap();
        let tags: Vec<serde_json::Value> = memos
            .iter()
            .flat_map(|m| {
                m.content
                    .split_whitespace()
                    .filter(|w| w.starts_with('#'))
                    .map(|w| serde_json::json!({ "name": w.trim_start_matches('#') }))
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(serde_json::Value::Array(tags))
    }
}
