

use rmcp::{
    handler::server::{
        router::tool::ToolRouter,
        router::prompt::PromptRouter,
        wrapper::Parameters,
    },
    model::*,
    tool, tool_handler, tool_router,
    prompt, prompt_handler, prompt_router,
    transport::stdio,
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::GuideConfig;
use crate::guide::{EXAMPLE_QUERIES, LocalGuide, TOPICS};
use crate::query::Category;
use crate::query::patterns::markers_for;
use crate::utils::safe_truncate;


#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct AskGuideParams {
    #[schemars(description = "Question about Udaipur's language, food, tourism, or culture")]
    pub query: String,
}

#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct ClassifyQueryParams {
    #[schemars(description = "Question to classify (no response is generated)")]
    pub query: String,
}


#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GuideUsageArgs {
    #[schemars(description = "Optional topic to focus on: 'language', 'food', 'tourism', 'culture'")]
    pub topic: Option<String>,
}


#[derive(Debug, Serialize)]
struct ToolReply {
    query: String,
    response: String,
    category: Option<Category>,
    location: Option<String>,
    time_context: Option<String>,
}


#[derive(Clone)]
pub struct GuideMcpServer {
    guide: Arc<LocalGuide>,
    config: Arc<GuideConfig>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl GuideMcpServer {
    
    pub fn new(guide: LocalGuide, config: GuideConfig) -> Self {
        Self {
            guide: Arc::new(guide),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    
    fn result_to_json<T: Serialize>(result: T) -> Result<String, McpError> {
        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    fn ask_json(&self, query: &str) -> Result<String, McpError> {
        let reply = match self.guide.try_answer(query) {
            Ok(answer) => ToolReply {
                query: answer.query,
                response: answer.response,
                category: Some(answer.intent.category),
                location: answer.intent.location,
                time_context: answer.intent.time_context,
            },
            Err(e) => {
                warn!("⚠️ Guidance returned instead of answer: {}", e);
                ToolReply {
                    query: query.trim().to_string(),
                    response: e.user_message().to_string(),
                    category: None,
                    location: None,
                    time_context: None,
                }
            }
        };
        Self::result_to_json(&reply)
    }

    fn classify_json(&self, query: &str) -> Result<String, McpError> {
        let intent = self
            .guide
            .classify(query)
            .map_err(|e| McpError::invalid_params(e.user_message().to_string(), None))?;
        Self::result_to_json(&intent)
    }

    fn topics_json(&self) -> Result<String, McpError> {
        let topics: Vec<serde_json::Value> = TOPICS
            .iter()
            .map(|(name, description)| {
                let markers = Category::from_str(name).map(markers_for).unwrap_or(&[]);
                json!({
                    "topic": name,
                    "description": description,
                    "markers": markers,
                })
            })
            .collect();

        Self::result_to_json(json!({
            "city": self.config.city_name,
            "topics": topics,
            "examples": EXAMPLE_QUERIES,
        }))
    }

    fn usage_text(topic: Option<&str>) -> String {
        let examples: Vec<&str> = match topic.and_then(|t| Category::from_str(t).ok()) {
            Some(category) if category != Category::General => {
                let markers = markers_for(category);
                EXAMPLE_QUERIES
                    .iter()
                    .copied()
                    .filter(|q| {
                        let q = q.to_lowercase();
                        markers.iter().any(|m| q.contains(m))
                    })
                    .collect()
            }
            _ => EXAMPLE_QUERIES.to_vec(),
        };

        let mut text = String::from(
            "# Udaipur Local Guide\n\nUse ask_guide to answer visitor questions. One question per call; \
             the reply is a single ready-to-show sentence block.\n\n## Topics\n",
        );
        for (name, description) in TOPICS {
            text.push_str(&format!("- **{}**: {}\n", name, description));
        }
        text.push_str("\n## Example questions\n");
        for example in examples {
            text.push_str(&format!("- {}\n", example));
        }
        text
    }
}

#[tool_router]
impl GuideMcpServer {
    
    #[tool(description = "Answer a question about Udaipur's local language, food, tourist timing/transport, or cultural etiquette. Returns: {query, response, category, location, time_context}")]
    async fn ask_guide(
        &self,
        Parameters(params): Parameters<AskGuideParams>,
    ) -> Result<CallToolResult, McpError> {
        let query_preview = safe_truncate(&params.query, 50);
        info!("🧭 Answering: '{}'", query_preview);

        let json = self.ask_json(&params.query)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    
    #[tool(description = "Classify a question into a topic with extracted keywords, location and time context. Returns: {category, keywords, location, time_context}")]
    async fn classify_query(
        &self,
        Parameters(params): Parameters<ClassifyQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        let query_preview = safe_truncate(&params.query, 50);
        info!("🏷️ Classifying: '{}'", query_preview);

        let json = self.classify_json(&params.query)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    
    #[tool(description = "List supported topics, their keyword markers, and example questions")]
    async fn list_topics(&self) -> Result<CallToolResult, McpError> {
        let json = self.topics_json()?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}


#[prompt_router]
impl GuideMcpServer {
    
    #[prompt(
        name = "guide_usage",
        description = "How to use the Udaipur guide tools, optionally focused on one topic"
    )]
    async fn guide_usage(
        &self,
        Parameters(args): Parameters<GuideUsageArgs>,
    ) -> Result<GetPromptResult, McpError> {
        let text = Self::usage_text(args.topic.as_deref());

        let messages = vec![
            PromptMessage::new_text(PromptMessageRole::Assistant, text),
        ];

        Ok(GetPromptResult {
            description: Some(match args.topic {
                Some(topic) => format!("Udaipur guide usage for {}", topic),
                None => "Udaipur guide usage".to_string(),
            }),
            messages,
        })
    }
}


#[tool_handler]
#[prompt_handler]
impl ServerHandler for GuideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server_name.clone(),
                version: self.config.server_version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Udaipur Local Guide - culturally-aware answers about local greetings, food, \
                 tourist crowd timing, transportation, and etiquette. Use ask_guide for answers, \
                 classify_query to inspect how a question is understood."
                    .to_string(),
            ),
        }
    }

    
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                RawResource::new("config://guide", "guide-config".to_string())
                    .no_annotation(),
                RawResource::new("knowledge://context", "knowledge-context".to_string())
                    .no_annotation(),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match uri.as_str() {
            "config://guide" => {
                let content = serde_json::to_string_pretty(&json!({
                    "version": self.config.server_version,
                    "city": self.config.city_name,
                    "knowledge_path": self.config.knowledge_path,
                    "topic_counts": self.guide.context().topic_counts(),
                    "tools": ["ask_guide", "classify_query", "list_topics"],
                })).unwrap_or_default();

                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(content, uri)],
                })
            }
            "knowledge://context" => {
                let content = Self::result_to_json(self.guide.context())?;

                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(content, uri)],
                })
            }
            _ => Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(json!({ "uri": uri })),
            )),
        }
    }
}


pub async fn run_server(config: GuideConfig) -> anyhow::Result<()> {
    info!("🚀 Initializing Udaipur Guide MCP Server...");

    config.validate()?;
    let guide = LocalGuide::from_config(&config);

    info!("✅ Udaipur Guide MCP Server ready");
    info!("   📍 City: {}", config.city_name);
    info!("   📚 Knowledge: {}", config.knowledge_path.display());

    let server = GuideMcpServer::new(guide, config);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
