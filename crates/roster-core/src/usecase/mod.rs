//! Use-cases - one orchestrator per resource.

mod post;
mod user;

pub use post::PostUsecase;
pub use user::UserUsecase;
