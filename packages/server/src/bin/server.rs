//! Shiritori session server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin shiritori-server
//! cargo run --bin shiritori-server -- --port 8080
//! PORT=8080 cargo run --bin shiritori-server
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use shiritori_server::{
    config::{DEFAULT_PORT, ServerConfig},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::JsonFileBannedWordRepository,
        rng::StdTurnRng,
    },
    ui::Server,
    usecase::{BannedWordStore, SessionActor},
};
use shiritori_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "shiritori-server")]
#[command(about = "Real-time shiritori session server", long_about = None)]
struct Args {
    /// Port number to listen on
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = ServerConfig::with_port(args.port);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. BannedWordStore
    // 3. MessagePusher
    // 4. SessionActor
    // 5. Server

    // 1. Banned word file
    let repository = Arc::new(JsonFileBannedWordRepository::new(
        config.banned_words_path.clone(),
    ));

    // 2. Load once at startup; failures fall back to an empty list
    let banned_words = BannedWordStore::load(repository).await;

    // 3. MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 4. Session actor
    let session = SessionActor::new(
        banned_words,
        message_pusher,
        Box::new(StdTurnRng::from_entropy()),
        Arc::new(SystemClock),
    )
    .spawn();

    // 5. Run the server
    let server = Server::new(session);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
