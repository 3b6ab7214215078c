//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod logger;
mod repository;

pub use logger::Logger;
pub use repository::{PostRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use logger::MockLogger;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockPostRepository, MockUserRepository};
