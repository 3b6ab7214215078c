//! Bearer token extractor.
//!
//! Only checks that a token is present. Tokens are not verified yet, so every
//! caller is recorded under the placeholder uid.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};

use super::error::AppError;

/// Uid recorded for callers until tokens are verified.
pub const ANONYMOUS_UID: &str = "-";

const MISSING_TOKEN: &str = "Authentication token is not set.";

/// Authenticated caller.
///
/// Use this in handlers to require a bearer token:
/// ```ignore
/// async fn protected_route(caller: Authenticated) -> impl Responder {
///     format!("Hello, {}!", caller.uid)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub uid: String,
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Authenticated, AppError> {
    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.to_string()))?;

    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);
    if token.is_empty() {
        return Err(AppError::Unauthorized(MISSING_TOKEN.to_string()));
    }

    // TODO: verify the token and resolve the caller's uid from it
    let uid = ANONYMOUS_UID.to_string();
    tracing::Span::current().record("uid", uid.as_str());

    Ok(Authenticated { uid })
}
