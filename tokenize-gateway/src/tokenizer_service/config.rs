//! Configuration for the Tokenizer Service

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tokenizer::{factory::TokenizerSources, TokenizerStrategy};

/// Configuration for the Tokenizer Service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerServiceConfig {
    /// Host to bind the tokenizer service
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port for the tokenizer service
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Hugging Face Hub model id for the WordPiece tokenizer
    #[serde(default = "default_wordpiece_model")]
    pub wordpiece_model: String,

    /// Local `tokenizer.json` to load instead of fetching from the Hub
    #[serde(default)]
    pub wordpiece_path: Option<String>,

    /// Abort startup if any tokenizer fails to load. When disabled, the
    /// failed tokenizer is reported as unavailable per request instead.
    #[serde(default = "default_true")]
    pub strict_startup: bool,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Enable request logging
    #[serde(default = "default_true")]
    pub log_requests: bool,

    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8000
}

fn default_wordpiece_model() -> String {
    TokenizerStrategy::BertBaseUncased.as_str().to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TokenizerServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            wordpiece_model: default_wordpiece_model(),
            wordpiece_path: None,
            strict_startup: default_true(),
            enable_cors: default_true(),
            log_requests: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl TokenizerServiceConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Builder pattern: set host
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Builder pattern: set HTTP port
    pub fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// Builder pattern: set WordPiece model id
    pub fn with_wordpiece_model(mut self, model: String) -> Self {
        self.wordpiece_model = model;
        self
    }

    /// Builder pattern: load WordPiece from a local file
    pub fn with_wordpiece_path(mut self, path: String) -> Self {
        self.wordpiece_path = Some(path);
        self
    }

    /// Builder pattern: set strict startup
    pub fn with_strict_startup(mut self, strict: bool) -> Self {
        self.strict_startup = strict;
        self
    }

    /// Builder pattern: enable or disable CORS
    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Builder pattern: enable or disable request logging
    pub fn with_log_requests(mut self, enable: bool) -> Self {
        self.log_requests = enable;
        self
    }

    /// Builder pattern: set log level
    pub fn with_log_level(mut self, level: String) -> Self {
        self.log_level = level;
        self
    }

    /// Get the HTTP bind address
    pub fn http_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Artifact locations for the vocabulary-backed tokenizers
    pub fn tokenizer_sources(&self) -> TokenizerSources {
        TokenizerSources {
            wordpiece_model: self.wordpiece_model.clone(),
            wordpiece_path: self.wordpiece_path.as_ref().map(PathBuf::from),
        }
    }
}
