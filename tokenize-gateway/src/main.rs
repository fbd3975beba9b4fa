use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tokenize_gateway::tokenizer_service::{TokenizerServer, TokenizerServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokenizer service: tokenize text with a selectable strategy over HTTP.
#[derive(Parser, Debug)]
#[command(name = "tokenizer", version, about)]
struct Cli {
    /// JSON config file; command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind.
    #[arg(long)]
    host: Option<String>,

    /// HTTP port to bind.
    #[arg(long)]
    http_port: Option<u16>,

    /// Hugging Face Hub model id for the WordPiece tokenizer.
    #[arg(long)]
    wordpiece_model: Option<String>,

    /// Local tokenizer.json for the WordPiece tokenizer (skips the Hub).
    #[arg(long)]
    wordpiece_path: Option<String>,

    /// Keep serving other tokenizers if one fails to load.
    #[arg(long)]
    lenient_startup: bool,

    /// Disable CORS headers.
    #[arg(long)]
    no_cors: bool,

    /// Disable per-request logging.
    #[arg(long)]
    no_request_log: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<TokenizerServiceConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerServiceConfig::from_file(path).map_err(|e| anyhow!(e))?,
            None => TokenizerServiceConfig::default(),
        };

        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.http_port {
            config = config.with_http_port(port);
        }
        if let Some(model) = self.wordpiece_model {
            config = config.with_wordpiece_model(model);
        }
        if let Some(path) = self.wordpiece_path {
            config = config.with_wordpiece_path(path);
        }
        if self.lenient_startup {
            config = config.with_strict_startup(false);
        }
        if self.no_cors {
            config = config.with_cors(false);
        }
        if self.no_request_log {
            config = config.with_log_requests(false);
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }

        Ok(config)
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    init_tracing(&config.log_level);

    info!(
        http_bind_addr = %config.http_bind_addr(),
        wordpiece_model = %config.wordpiece_model,
        strict_startup = config.strict_startup,
        "Starting tokenizer service"
    );

    let server = TokenizerServer::new(config).await.map_err(|e| anyhow!(e))?;
    server.serve().await.map_err(|e| anyhow!(e))?;

    Ok(())
}
