//! Model Context Protocol (MCP) server support
//!
//! Binds the memo tool registry, the static prompt catalog, and the memo
//! resources to the rmcp server handler. All state lives behind `Arc`s; the
//! server itself is cheap to clone and stateless between requests.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use crate::config::MemosConfig;
use crate::memos::{MemosApi, MemosClient};

/// MCP module structure
pub mod memo_types;
pub mod prompts;
pub mod responses;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;

use tool_handlers::ToolHandlers;
use tool_registry::{register_memo_tools, ToolContext, ToolRegistry};

/// URI of the recent-memos resource
const RECENT_MEMOS_URI: &str = "memos://recent";
/// URI of the all-memos resource
const ALL_MEMOS_URI: &str = "memos://all";
/// URI prefix for addressing a single memo
const MEMO_BY_ID_PREFIX: &str = "memos://memos/";
/// URI template for addressing a single memo
const MEMO_BY_ID_TEMPLATE: &str = "memos://memos/{id}";

/// MCP server exposing a Memos instance as tools, prompts, and resources
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
    tool_handlers: Arc<ToolHandlers>,
}

impl McpServer {
    /// Create a server connected to the Memos instance named by `config`
    pub fn new(config: &MemosConfig) -> Self {
        let api: Arc<dyn MemosApi> = Arc::new(MemosClient::new(config));
        Self::with_api(api, config.default_tag.clone())
    }

    /// Create a server over an arbitrary API implementation.
    ///
    /// This is the constructor tests use to substitute a mock client.
    pub fn with_api(api: Arc<dyn MemosApi>, default_tag: Option<String>) -> Self {
        let tool_handlers = Arc::new(ToolHandlers::new(api, default_tag));
        let tool_context = Arc::new(ToolContext::new(tool_handlers.clone()));

        let mut tool_registry = ToolRegistry::new();
        register_memo_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context,
            tool_handlers,
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: Some(PromptsCapability { list_changed: None }),
            tools: Some(ToolsCapability { list_changed: None }),
            resources: Some(ResourcesCapability {
                subscribe: None,
                list_changed: None,
            }),
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn server_info() -> Implementation {
        Implementation {
            name: "memos-mcp".into(),
            version: crate::VERSION.into(),
        }
    }

    fn instructions() -> String {
        "Bridge to a Memos note-taking instance. Read memos via the memos://recent, \
         memos://all, and memos://memos/{id} resources. Use search_memos and \
         filter_memos to find notes, create_memo/update_memo/delete_memo to manage \
         them, and delete_memo_tag/list_tags to work with tags."
            .to_string()
    }

    /// Resolve a resource URI to its text payload.
    ///
    /// Resource failures follow the same contract as tool failures: the
    /// error is logged and returned as readable text content, so the host
    /// never sees a protocol fault for a reachable URI.
    async fn read_resource_text(&self, uri: &str) -> std::result::Result<String, McpError> {
        let result = if uri == RECENT_MEMOS_URI {
            self.tool_handlers.handle_recent_memos().await
        } else if uri == ALL_MEMOS_URI {
            self.tool_handlers.handle_all_memos().await
        } else if let Some(memo_id) = uri.strip_prefix(MEMO_BY_ID_PREFIX) {
            // The ID segment is forwarded exactly as given; this read path
            // intentionally skips the memos/ prefix normalization the delete
            // tools perform.
            self.tool_handlers.handle_memo_by_id(memo_id).await
        } else {
            return Err(McpError::invalid_request(
                format!("Unknown resource: {uri}"),
                None,
            ));
        };

        Ok(result.unwrap_or_else(|e| {
            tracing::error!("Failed to read resource {uri}: {e}");
            format!("Failed to read resource {uri}: {e}")
        }))
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::server_info(),
            instructions: Some(Self::instructions()),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get_tool(&request.name) {
            tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
                .await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        let prompt_list: Vec<Prompt> = prompts::PROMPTS
            .iter()
            .map(|p| Prompt {
                name: p.name.to_string(),
                description: Some(p.description.to_string()),
                arguments: None,
            })
            .collect();

        Ok(ListPromptsResult {
            prompts: prompt_list,
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        match prompts::get(&request.name) {
            Some(prompt) => Ok(GetPromptResult {
                description: Some(prompt.description.to_string()),
                messages: vec![PromptMessage {
                    role: PromptMessageRole::User,
                    content: PromptMessageContent::Text {
                        text: prompt.template.to_string(),
                    },
                }],
            }),
            None => {
                tracing::warn!("Prompt '{}' not found", request.name);
                Err(McpError::invalid_request(
                    format!("Prompt '{}' is not available", request.name),
                    None,
                ))
            }
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        let resources = vec![
            Annotated::new(
                RawResource {
                    uri: RECENT_MEMOS_URI.to_string(),
                    name: "Recent memos".to_string(),
                    description: Some("The ten most recent memos".to_string()),
                    mime_type: Some("application/json".to_string()),
                    size: None,
                },
                None,
            ),
            Annotated::new(
                RawResource {
                    uri: ALL_MEMOS_URI.to_string(),
                    name: "All memos".to_string(),
                    description: Some("Every memo on the instance".to_string()),
                    mime_type: Some("application/json".to_string()),
                    size: None,
                },
                None,
            ),
        ];

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        let templates = vec![Annotated::new(
            RawResourceTemplate {
                uri_template: MEMO_BY_ID_TEMPLATE.to_string(),
                name: "Memo by ID".to_string(),
                description: Some(
                    "A single memo addressed by its bare ID (not the memos/ resource name)"
                        .to_string(),
                ),
                mime_type: Some("application/json".to_string()),
            },
            None,
        )];

        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let text = self.read_resource_text(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: request.uri,
                mime_type: Some("application/json".to_string()),
                text,
            }],
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::server_info(),
            instructions: Some(Self::instructions()),
        }
    }
}
