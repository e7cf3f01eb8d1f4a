//! Warning and error counting

use mofgen_core::LogLevel;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global counter used by [`crate::init_logging`]
static GLOBAL_COUNTER: OnceCell<DiagnosticCounter> = OnceCell::new();

/// Counts warning and error events seen by a [`crate::DiagnosticLayer`]
#[derive(Debug, Default)]
pub struct DiagnosticCounter {
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

impl DiagnosticCounter {
    /// Create a counter with both counts at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global counter instance
    pub fn global() -> &'static DiagnosticCounter {
        GLOBAL_COUNTER.get_or_init(DiagnosticCounter::new)
    }

    /// Record one event; levels below warn are ignored
    pub fn record(&self, level: LogLevel) {
        match level {
            LogLevel::Warn => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// Whether anything at warn level or above was recorded
    pub fn has_warnings(&self) -> bool {
        self.warnings() + self.errors() > 0
    }

    /// Reset both counts to zero
    pub fn reset(&self) {
        self.warnings.store(0, Ordering::SeqCst);
        self.errors.store(0, Ordering::SeqCst);
    }
}
