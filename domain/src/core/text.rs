//! Bounded text value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of question and choice texts.
pub const MAX_TEXT_LEN: usize = 200;

/// Non-empty text of at most [`MAX_TEXT_LEN`] characters (Value Object)
///
/// Used for both question and choice texts. Length is counted in
/// characters, not bytes, so multi-byte text gets the same budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedText(String);

impl BoundedText {
    /// Validate `content` for the given field name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn parse(field: &'static str, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyText { field });
        }
        let len = trimmed.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(DomainError::TextTooLong {
                field,
                len,
                max: MAX_TEXT_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BoundedText {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("text", value)
    }
}

impl From<BoundedText> for String {
    fn from(text: BoundedText) -> Self {
        text.0
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BoundedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
