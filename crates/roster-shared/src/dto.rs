//! Data Transfer Objects - request types for the API.
//!
//! Fields default to empty so a missing field and a blank one are rejected
//! by the same check.

use serde::{Deserialize, Serialize};

/// Body of `POST /user` and `PUT /user/{uid}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileRequest {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserProfileRequest {
    /// Reasons this body is unacceptable; empty when it is fine.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for (name, value) in [
            ("last_name", &self.last_name),
            ("first_name", &self.first_name),
            ("email", &self.email),
        ] {
            if value.is_empty() {
                problems.push(format!("{name} is required"));
            }
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            problems.push("email must be a valid email address".to_string());
        }
        problems
    }
}

/// Body of `POST /post`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub text: String,
}
