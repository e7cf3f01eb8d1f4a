//! Tracing layer that counts diagnostics, and subscriber setup

use crate::counter::DiagnosticCounter;
use mofgen_core::LogLevel;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that records warn and error events in a [`DiagnosticCounter`]
///
/// The layer never filters: it only observes, so it can sit next to an
/// output layer with its own level filter and still see every warning.
pub struct DiagnosticLayer {
    counter: &'static DiagnosticCounter,
}

impl DiagnosticLayer {
    /// Create a layer using the global counter
    pub fn new() -> Self {
        Self {
            counter: DiagnosticCounter::global(),
        }
    }

    /// Create a layer with a specific counter
    pub fn with_counter(counter: &'static DiagnosticCounter) -> Self {
        Self { counter }
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.counter
            .record(Self::convert_level(event.metadata().level()));
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over `level` when set. The global
/// [`DiagnosticCounter`] sees every warning regardless of the output level.
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let output = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    // Ignore the error if a global subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(output)
        .with(DiagnosticLayer::new())
        .try_init();

    tracing::debug!(%level, "logging initialized");
}
