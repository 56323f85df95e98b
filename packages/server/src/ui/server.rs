//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::SessionHandle;

use super::{
    handler::{debug_session, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Shiritori WebSocket server
///
/// # Example
///
/// ```ignore
/// let session = SessionActor::new(banned_words, pusher, rng, clock).spawn();
/// Server::new(session).run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// セッションアクターへの入口
    session: SessionHandle,
}

impl Server {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            session: self.session.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/debug/session", get(debug_session))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Bind `host:port` and serve until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Shiritori server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await?;
        Ok(())
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}
