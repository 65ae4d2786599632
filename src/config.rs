use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for the embed relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Base URL of the upstream site, used for redirects and fetches
    #[serde(default = "default_upstream_base")]
    pub upstream_base: String,

    /// Timeout for the single outbound call made per preview
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User agent sent to upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default listen address
fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_upstream_base() -> String {
    "https://dynasty-scans.com".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upstream_base: default_upstream_base(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl EmbedConfig {
    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Outbound fetch timeout
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Parsed upstream base URL
    pub fn upstream_url(&self) -> Result<Url> {
        let url = Url::parse(&self.upstream_base)
            .map_err(|e| Error::Config(format!("upstream_base {}: {}", self.upstream_base, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "upstream_base must be http(s), got {}",
                other
            ))),
        }
    }

    /// Checks the values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        self.upstream_url()?;
        if self.fetch_timeout_secs == 0 {
            return Err(Error::Config(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
