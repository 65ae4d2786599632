use clap::Parser;
use dynasty_embed::config::EmbedConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dynasty-embed")]
#[command(about = "Serves link-preview metadata for Dynasty Scans pages to chat bots")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Upstream base URL (overrides the config file)
    #[arg(short, long)]
    pub upstream: Option<String>,

    /// Outbound fetch timeout in seconds (overrides the config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Args {
    /// Applies command-line overrides on top of `config`
    pub fn apply(&self, mut config: EmbedConfig) -> EmbedConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(upstream) = &self.upstream {
            config.upstream_base = upstream.clone();
        }
        if let Some(timeout) = self.timeout {
            config.fetch_timeout_secs = timeout;
        }
        config
    }
}
