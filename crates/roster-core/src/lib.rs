//! # Roster Core
//!
//! The domain layer of the roster service.
//! Entities, ports and use-cases live here with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod usecase;

pub use error::DomainError;
