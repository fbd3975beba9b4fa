//! Tokenizer Service Server
//!
//! HTTP server that exposes the tokenization endpoints.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use super::{
    config::TokenizerServiceConfig,
    handlers::{self, HandlerState},
    service::TokenizeService,
};
use crate::tokenizer::{factory::create_registry, TokenizerRegistry};

/// Tokenizer Service Server
pub struct TokenizerServer {
    config: TokenizerServiceConfig,
    tokenizer_registry: Arc<TokenizerRegistry>,
}

impl TokenizerServer {
    /// Create a new TokenizerServer, loading every tokenizer up front.
    ///
    /// Fails if a tokenizer cannot be loaded and `strict_startup` is set.
    pub async fn new(
        config: TokenizerServiceConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Initializing TokenizerServer");

        let sources = config.tokenizer_sources();
        let strict = config.strict_startup;

        // Fetching the WordPiece model is blocking network I/O
        let tokenizer_registry =
            tokio::task::spawn_blocking(move || create_registry(&sources, strict))
                .await?
                .map_err(|e| {
                    error!(
                        wordpiece_model = %config.wordpiece_model,
                        wordpiece_path = ?config.wordpiece_path,
                        error = %e,
                        "Failed to load tokenizers"
                    );
                    e
                })?;

        info!(tokenizers = ?tokenizer_registry, "Tokenizers loaded");

        Ok(Self {
            config,
            tokenizer_registry: Arc::new(tokenizer_registry),
        })
    }

    /// Create with pre-initialized components (for testing or custom setup)
    pub fn with_components(
        config: TokenizerServiceConfig,
        tokenizer_registry: Arc<TokenizerRegistry>,
    ) -> Self {
        Self {
            config,
            tokenizer_registry,
        }
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        let state = Arc::new(HandlerState::new(TokenizeService::new(
            self.tokenizer_registry.clone(),
        )));

        let mut router = Router::new()
            // `get` also answers HEAD with the body stripped
            .route("/health", get(handlers::health_handler))
            .route("/tokenizers", get(handlers::list_tokenizers_handler))
            .route("/tokenize", post(handlers::tokenize_handler))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        if self.config.log_requests {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.http_bind_addr();
        info!("Starting TokenizerServer on {}", addr);

        let router = self.build_router();

        let listener = TcpListener::bind(&addr).await?;
        info!("TokenizerServer listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| format!("Server error: {}", e))?;

        info!("TokenizerServer stopped");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &TokenizerServiceConfig {
        &self.config
    }

    /// Get the tokenizer registry
    pub fn tokenizer_registry(&self) -> &Arc<TokenizerRegistry> {
        &self.tokenizer_registry
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
