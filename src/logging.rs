use std::io;

use tracing_subscriber::fmt;

use crate::config::Config;

/// Stdout carries protocol frames, so every log line goes to stderr.
pub fn init_logging(config: &Config) {
    fmt()
        .with_env_filter(config.env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}
