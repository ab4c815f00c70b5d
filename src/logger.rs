// SPDX-License-Identifier: GPL-3.0-only

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the embedding compositor: stderr
/// plus journald when a journal socket is reachable. Level defaults follow
/// the build profile and can be overridden through `RUST_LOG`.
pub fn init_logger() -> Result<()> {
    let default_directive = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);

    match tracing_journald::layer() {
        Ok(journald) => registry
            .with(journald)
            .try_init()
            .context("Failed to install the tracing subscriber")?,
        Err(_) => registry
            .try_init()
            .context("Failed to install the tracing subscriber")?,
    }
    log_panics::init();

    info!("Version: {}", std::env!("CARGO_PKG_VERSION"));
    Ok(())
}
