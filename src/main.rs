use clap::Parser;
use dynasty_embed::config::EmbedConfig;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging, defaulting to info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match EmbedConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => EmbedConfig::default(),
    };
    let config = args.apply(config);

    if let Err(e) = dynasty_embed::server::run(config).await {
        ::log::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
