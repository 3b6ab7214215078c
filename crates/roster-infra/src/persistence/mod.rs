//! Persistence adapters.
//!
//! No real store yet: both repositories serve seeded fixtures and echo
//! writes back to the caller.

mod post;
mod user;

pub use post::DummyPostRepository;
pub use user::DummyUserRepository;
