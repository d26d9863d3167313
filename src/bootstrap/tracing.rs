//! Tracing configuration for ClipBridge
//!
//! Installs a `tracing-subscriber` registry with an env filter and a fmt
//! layer writing to stderr, so stdout stays free for the host application.

use std::io;

use anyhow::Context;
use cb_core::config::LoggingConfig;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev {
            "cb_platform=debug"
        } else {
            "cb_platform=info"
        }
        .to_string(),
        if is_dev {
            "clipbridge=debug"
        } else {
            "clipbridge=info"
        }
        .to_string(),
    ]
}

/// Pick the filter: `RUST_LOG` first, then the configured directives, then
/// the built-in defaults.
fn build_env_filter(config: &LoggingConfig, is_dev: bool) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    match config.filter.as_deref() {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter: {directives}")),
        None => Ok(EnvFilter::new(build_filter_directives(is_dev).join(","))),
    }
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// Call once, before the bridge is built.
///
/// # Errors
///
/// Returns `Err` if:
/// - A global subscriber is already registered
/// - The configured filter directives are invalid
pub fn init_tracing_subscriber(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config, is_development())?;

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
