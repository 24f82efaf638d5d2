// Tool trait, registry and schema helpers

use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use anyhow::Result;
use legiscan_core::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;

    /// Whether the tool changes anything upstream
    fn tier(&self) -> ToolTier {
        ToolTier::Read
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Read-only lookups
    Read,
    /// Modifies the account's data upstream
    Write,
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name, tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// All tool schemas, sorted by name, annotated with their tier.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| {
                let mut schema = tool.schema();
                schema.annotations = Some(ToolAnnotations {
                    read_only_hint: tool.tier() == ToolTier::Read,
                });
                schema
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Run a tool. Every failure comes back as an error result.
    pub async fn call(&self, name: &str, arguments: Value) -> CallToolResult {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, "Unknown tool requested");
            return CallToolResult::error(format!("Unknown tool: {}", name));
        };

        debug!(tool = name, "Calling tool");
        match tool.execute(arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "Tool call failed");
                CallToolResult::error(format!("{:#}", e))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize tool arguments. A missing argument object counts as empty.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ValidationError> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ValidationError::Arguments(e.to_string()))
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str) -> Value {
    json!({
        "type": "integer",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

/// Two-letter state code.
pub fn json_schema_state(description: &str) -> Value {
    json!({
        "type": "string",
        "pattern": "^[A-Za-z]{2}$",
        "description": description
    })
}
