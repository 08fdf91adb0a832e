//! Collection reposition input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CollectionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexInputError {
    #[error("index must contain digits only")]
    NotDigits,
    #[error("index {0} is out of range")]
    OutOfRange(String),
}

/// Text of the reposition field. Only digit strings are ever accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionIndexInput(String);

impl CollectionIndexInput {
    /// Seed the field with a collection's current index.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self(index.max(0).to_string())
    }

    /// Accept `candidate` when it is made of ASCII digits (or empty).
    ///
    /// Returns whether the field changed; rejected input leaves it as is.
    pub fn accept(&mut self, candidate: &str) -> bool {
        if is_digits(candidate) {
            candidate.clone_into(&mut self.0);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the field; an empty field is 0.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when the digits do not fit an `i64`.
    pub fn value(&self) -> Result<i64, IndexInputError> {
        if self.0.is_empty() {
            return Ok(0);
        }
        self.0
            .parse::<i64>()
            .map_err(|_| IndexInputError::OutOfRange(self.0.clone()))
    }

    /// Parse a submitted value in one step.
    ///
    /// # Errors
    ///
    /// Returns `NotDigits` for any non-digit character, `OutOfRange` on overflow.
    pub fn parse(raw: &str) -> Result<i64, IndexInputError> {
        let mut input = Self::default();
        if !input.accept(raw) {
            return Err(IndexInputError::NotDigits);
        }
        input.value()
    }
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Request submitted to the change-collection-index action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCollectionIndex {
    pub id: CollectionId,
    pub index: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_only() {
        let mut input = CollectionIndexInput::from_index(4);
        assert!(input.accept("12"));
        assert_eq!(input.as_str(), "12");

        assert!(!input.accept("12a"));
        assert!(!input.accept("-3"));
        assert!(!input.accept("1.5"));
        assert!(!input.accept(" 7"));
        assert_eq!(input.as_str(), "12");
    }

    #[test]
    fn test_empty_input_is_zero() {
        let mut input = CollectionIndexInput::from_index(4);
        assert!(input.accept(""));
        assert_eq!(input.value(), Ok(0));
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(
            CollectionIndexInput::parse("99999999999999999999"),
            Err(IndexInputError::OutOfRange("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(CollectionIndexInput::parse("007"), Ok(7));
        assert_eq!(CollectionIndexInput::parse("x"), Err(IndexInputError::NotDigits));
    }
}
