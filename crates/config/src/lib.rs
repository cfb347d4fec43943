use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_NAME: &str = "handmade-storefront";
const CONFIG_PATH_VAR: &str = "STOREFRONT_CONFIG";
const PORT_VAR: &str = "PORT";

pub const KHALTI_SECRET_VAR: &str = "KHALTI_SECRET_KEY";
pub const KHALTI_BASE_URL: &str = "https://a.khalti.com/api/v2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_kind")]
    pub kind: String, // "mock" | "khalti"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// JSON lines file receiving one record per proxied payment call.
    pub path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_provider_kind() -> String {
    "mock".to_string()
}

fn default_base_url() -> String {
    KHALTI_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Loads the config from `$STOREFRONT_CONFIG` if set, otherwise from the
/// platform config directory. A missing file is created with defaults.
pub fn load() -> Result<AppConfig> {
    let mut cfg: AppConfig = match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) => confy::load_path(&path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => confy::load(APP_NAME, None).context("Failed to load app config")?,
    };

    if let Ok(port) = std::env::var(PORT_VAR) {
        cfg.server.port = port
            .parse()
            .with_context(|| format!("Invalid {PORT_VAR} value: {port}"))?;
        tracing::info!(port = cfg.server.port, "Port overridden from environment");
    }

    Ok(cfg)
}

/// Reads a secret from the environment. Called once at start-up.
pub fn get_secret(var: &str) -> Result<String> {
    let value = std::env::var(var).map_err(|_| anyhow!("{var} is not set"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("{var} is empty"));
    }
    Ok(value.to_string())
}
