//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Post, PostResponse, Text};
pub use user::User;
