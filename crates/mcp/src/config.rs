// Server configuration: CLI flags, environment and an optional TOML file

use clap::Parser;
use legiscan_sdk::{LegiScanClient, LegiScanResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "legiscan-mcp.toml";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "legiscan-mcp")]
#[command(about = "MCP server exposing the LegiScan legislative API as tools", long_about = None)]
pub struct CliArgs {
    /// LegiScan API key
    #[arg(long, env = "LEGISCAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the LegiScan API endpoint
    #[arg(long, env = "LEGISCAN_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "LEGISCAN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file
    #[arg(short, long, env = "LEGISCAN_MCP_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "LEGISCAN_API_KEY environment variable is required.\n\
         Get your API key at: https://legiscan.com/legiscan"
    )]
    MissingApiKey,

    #[error("Timeout must be at least one second")]
    InvalidTimeout,

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of the optional TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub client: ClientSection,
}

/// `[client]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load the file if it exists, otherwise use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings. Flags and environment win over the file.
#[derive(Clone)]
pub struct ServerConfig {
    api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn resolve(args: CliArgs) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let file = FileConfig::load(&args.config)?;

        let base_url = args
            .base_url
            .or(file.client.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match args.timeout_secs.or(file.client.timeout_secs) {
            Some(0) => return Err(ConfigError::InvalidTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    pub fn client(&self) -> LegiScanResult<LegiScanClient> {
        LegiScanClient::builder()
            .api_key(self.api_key.clone())
            .base_url(self.base_url.clone())
            .timeout(self.timeout)
            .build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
