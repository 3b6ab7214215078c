//! # Roster Infrastructure
//!
//! Concrete implementations of the ports defined in `roster-core`:
//! a `tracing`-backed logger and fixture-backed repositories standing in
//! for a real store.

pub mod logger;
pub mod persistence;

pub use logger::TracingLogger;
pub use persistence::{DummyPostRepository, DummyUserRepository};
