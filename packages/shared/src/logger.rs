//! Logging setup for the Shiritori binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Without `RUST_LOG`, both the server library crate and the binary log at
/// `default_log_level`; `tower_http` request traces follow the same level.
///
/// # Arguments
///
/// * `binary_name` - The binary target name (`env!("CARGO_BIN_NAME")`)
/// * `default_log_level` - One of "trace", "debug", "info", "warn", "error"
///
/// # Examples
///
/// ```no_run
/// use shiritori_shared::logger::setup_logger;
///
/// setup_logger("shiritori-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    format!(
        "shiritori_server={level},{bin}={level},tower_http={level}",
        level = default_log_level,
        bin = binary_name.replace('-', "_"),
    )
}
