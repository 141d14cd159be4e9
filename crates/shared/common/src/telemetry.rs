//! Tracing bootstrap and per-component log context.
//!
//! The subscriber is installed once by the binary at startup. Library
//! components never reach for it directly: they are handed a [`Span`] when
//! constructed and emit their events as children of it, so callers decide
//! which context (and which fields) a component logs under.

use tracing::Span;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::{LogConfig, LogFormat};

/// Install the process-wide subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
/// Invalid filter directives fall back to `info`.
pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    }
}

/// Span handed to a component as its logging context.
pub fn component_span(component: &'static str) -> Span {
    tracing::info_span!("component", component)
}
