//! Error kinds, per-field violations, and the violation collector
//!
//! Messages are fixed strings; existing consumers compare against them, so
//! they must not change. A [`ValidationErrors`] renders as the plain
//! concatenation of its members' messages, with no separator.
//!
//! # Examples
//!
//! ```
//! use publication::{ValidationErrors, ValidatorError};
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("title", Err(ValidatorError::InvalidTitle));
//! errors.add("text", Ok(()));
//! errors.add("body", Err(ValidatorError::InvalidText));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string(), "wrong titlewrong text");
//! ```

use std::fmt;

use thiserror::Error;

use crate::Semigroup;

/// The kinds of failure the validator reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ValidatorError {
    /// The value handed to the validator is not a struct.
    #[error("wrong argument given, should be a struct")]
    NotStruct,

    /// A tag names no known rule, or the rule cannot read the field's value.
    #[error("invalid validator syntax")]
    InvalidValidatorSyntax {
        /// The offending tag.
        tag: String,
    },

    /// A tagged field is not `pub`.
    #[error("validation for unexported field is not allowed")]
    ValidateForUnexportedFields,

    /// The `title` rule rejected the value.
    #[error("wrong title")]
    InvalidTitle,

    /// The `text` rule rejected the value.
    #[error("wrong text")]
    InvalidText,
}

/// One violation: the field it was found on and its cause.
///
/// Displays as the cause alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    field: &'static str,
    #[cfg_attr(feature = "serde", serde(flatten))]
    err: ValidatorError,
}

impl ValidationError {
    /// Wrap a cause found on `field`.
    pub fn new(field: &'static str, err: ValidatorError) -> Self {
        ValidationError { field, err }
    }

    /// Name of the field the violation was found on.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The underlying cause.
    pub fn kind(&self) -> &ValidatorError {
        &self.err
    }

    /// Consume and return the underlying cause.
    pub fn into_kind(self) -> ValidatorError {
        self.err
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

/// Ordered violations collected during one validation pass.
///
/// Grows only through [`add`](Self::add), which drops `Ok` results. An empty
/// collector means "no error"; use [`into_result`](Self::into_result) rather
/// than returning an empty collection as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create an empty collector.
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    /// Record the outcome of checking `field`. `Ok` is ignored.
    pub fn add(&mut self, field: &'static str, result: Result<(), ValidatorError>) {
        if let Err(err) = result {
            self.0.push(ValidationError::new(field, err));
        }
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate violations in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// True if any violation has the given cause.
    pub fn contains(&self, kind: &ValidatorError) -> bool {
        self.0.iter().any(|e| e.kind() == kind)
    }

    /// The causes, in order.
    pub fn kinds(&self) -> Vec<ValidatorError> {
        self.0.iter().map(|e| e.kind().clone()).collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.0 {
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Semigroup for ValidationErrors {
    #[inline]
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Error returned by [`validate`](crate::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was the wrong shape; no field was looked at.
    #[error(transparent)]
    Structural(ValidatorError),

    /// One or more fields failed, in field order.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// The field violations, if this is not a structural error.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Invalid(errors) => Some(errors),
            Error::Structural(_) => None,
        }
    }

    /// True if the error is, or contains, the given cause.
    pub fn contains(&self, kind: &ValidatorError) -> bool {
        match self {
            Error::Structural(err) => err == kind,
            Error::Invalid(errors) => errors.contains(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            ValidatorError::NotStruct.to_string(),
            "wrong argument given, should be a struct"
        );
        assert_eq!(
            ValidatorError::InvalidValidatorSyntax { tag: "x".into() }.to_string(),
            "invalid validator syntax"
        );
        assert_eq!(
            ValidatorError::ValidateForUnexportedFields.to_string(),
            "validation for unexported field is not allowed"
        );
        assert_eq!(ValidatorError::InvalidTitle.to_string(), "wrong title");
        assert_eq!(ValidatorError::InvalidText.to_string(), "wrong text");
    }

    #[test]
    fn test_add_ignores_ok() {
        let mut errors = ValidationErrors::new();
        errors.add("a", Ok(()));
        errors.add("b", Ok(()));
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(), Ok(()));
    }

    #[test]
    fn test_add_keeps_order() {
        let mut errors = ValidationErrors::new();
        errors.add("b", Err(ValidatorError::InvalidText));
        errors.add("a", Err(ValidatorError::InvalidTitle));

        let fields: Vec<_> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["b", "a"]);
        assert_eq!(errors.to_string(), "wrong textwrong title");
    }

    #[test]
    fn test_validation_error_displays_cause() {
        let err = ValidationError::new("title", ValidatorError::InvalidTitle);
        assert_eq!(err.to_string(), "wrong title");
        assert_eq!(err.field(), "title");
        assert_eq!(err.into_kind(), ValidatorError::InvalidTitle);
    }

    #[test]
    fn test_combine_appends() {
        let mut left = ValidationErrors::new();
        left.add("title", Err(ValidatorError::InvalidTitle));
        let mut right = ValidationErrors::new();
        right.add("text", Err(ValidatorError::InvalidText));

        let merged = left.combine(right);
        assert_eq!(
            merged.kinds(),
            vec![ValidatorError::InvalidTitle, ValidatorError::InvalidText]
        );
    }

    #[test]
    fn test_error_renders_transparently() {
        let mut errors = ValidationErrors::new();
        errors.add("title", Err(ValidatorError::InvalidTitle));
        let err = Error::from(errors);
        assert_eq!(err.to_string(), "wrong title");
        assert!(err.contains(&ValidatorError::InvalidTitle));
        assert!(!err.contains(&ValidatorError::NotStruct));

        let err = Error::Structural(ValidatorError::NotStruct);
        assert_eq!(err.to_string(), "wrong argument given, should be a struct");
        assert!(err.violations().is_none());
    }
}
