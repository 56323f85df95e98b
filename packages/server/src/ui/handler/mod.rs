//! Request handlers.

mod http;
mod websocket;

pub use http::{debug_session, health_check};
pub use websocket::websocket_handler;
