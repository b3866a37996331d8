// src/cli.rs
//! Shared plumbing for the kernel binaries.

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays the single result line. Level from `RUST_LOG`, default `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
