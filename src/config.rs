use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Per-source fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    /// Hosted database/auth service. Opaque to the aggregation core; the UI
    /// layer talks to it directly.
    pub backend: Option<BackendConfig>,
}

fn default_fetch_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    "newsdesk/0.1 (news aggregator)".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub homepage: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
            bind: default_bind(),
            sources: Vec::new(),
            backend: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a config file, falling back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
