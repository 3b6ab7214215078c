mod request_id;
mod request_span;

pub use request_id::RequestIdMiddleware;
pub use request_span::RequestSpan;
