//! Logging port.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Sink for plain human-readable messages emitted by the use-cases.
///
/// Request context (request id, caller) is attached by the implementation,
/// not passed here.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
