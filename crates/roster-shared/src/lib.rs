//! # Roster Shared
//!
//! Request bodies and error payloads shared by the HTTP layer and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
