use serde::{Deserialize, Serialize};

use crate::error::InvalidLength;

/// Bounded text value object.
///
/// The bound is measured in bytes, so multi-byte characters count for more
/// than one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    value: String,
}

impl Text {
    /// Default maximum length in bytes.
    pub const MAX_LEN: usize = 10;

    /// Validate against the default bound.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidLength> {
        Self::with_limit(value, Self::MAX_LEN)
    }

    /// Validate against a caller-provided bound.
    pub fn with_limit(value: impl Into<String>, max: usize) -> Result<Self, InvalidLength> {
        let value = value.into();
        if value.len() > max {
            return Err(InvalidLength { max });
        }
        Ok(Self { value })
    }

    /// Rebuild from a trusted source (e.g. storage) without validation.
    pub fn reconstitute(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Post entity - a short text record with no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    text: Text,
}

/// Wire view of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub text: String,
}

impl Post {
    /// Create a new post, validating its text against the default bound.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidLength> {
        Ok(Self {
            text: Text::new(text)?,
        })
    }

    pub fn with_limit(text: impl Into<String>, max: usize) -> Result<Self, InvalidLength> {
        Ok(Self {
            text: Text::with_limit(text, max)?,
        })
    }

    /// Rebuild a post loaded from storage. Skips validation.
    pub fn reconstitute(text: impl Into<String>) -> Self {
        Self {
            text: Text::reconstitute(text),
        }
    }

    pub fn text_value(&self) -> &str {
        self.text.value()
    }

    pub fn to_response(&self) -> PostResponse {
        PostResponse {
            text: self.text_value().to_string(),
        }
    }
}
