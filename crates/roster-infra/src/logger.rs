//! `tracing` adapter for the logging port.

use roster_core::ports::Logger;

/// Forwards use-case messages to `tracing`.
///
/// Events land inside whatever span is current, so request-scoped fields
/// (request id, source, uid) set by the HTTP layer are attached for free.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
