// MCP (Model Context Protocol) server exposing the LegiScan API as tools
// for agent clients (Claude Desktop, Claude Code, etc.)

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{CliArgs, ConfigError, ServerConfig};
pub use server::McpServer;
pub use tools::{build_registry, ToolRegistry};
