//! The validation engine
//!
//! Walks a record's fields in declaration order and runs the rule each tag
//! selects. Every violation is collected; the only early exit is for input
//! that is not a struct at all.
//!
//! Per field:
//! - no tag: skipped
//! - tag on a non-`pub` field: `ValidateForUnexportedFields`, value untouched
//! - tag naming no rule, or non-text value: `InvalidValidatorSyntax`
//! - otherwise: the rule's result
//!
//! # Examples
//!
//! ```
//! use publication::{record, validate, ValidatorError};
//!
//! record! {
//!     pub struct Article {
//!         pub title: String => "title",
//!         pub text: String => "text",
//!     }
//! }
//!
//! let article = Article { title: String::new(), text: "hello".into() };
//! let err = validate(&article).unwrap_err();
//!
//! assert_eq!(err.to_string(), "wrong title");
//! assert!(err.contains(&ValidatorError::InvalidTitle));
//! ```

use crate::record::{Field, Inspect, Kind};
use crate::{Error, Limits, Rule, Validation, ValidationErrors, ValidatorError};

/// Field name recorded for violations that are not tied to a field.
pub const RECORD_LEVEL: &str = "";

/// Validates records against the tag rules.
///
/// Holds only its [`Limits`]; it is `Copy` and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    /// A validator with the default limits.
    pub fn new() -> Self {
        Validator::default()
    }

    /// A validator with custom limits.
    ///
    /// ```
    /// use publication::{record, Limits, Validator};
    ///
    /// record! {
    ///     pub struct Headline {
    ///         pub title: String => "title",
    ///     }
    /// }
    ///
    /// let strict = Validator::with_limits(Limits { title_max: 10, ..Limits::default() });
    /// let headline = Headline { title: "Twelve bytes".into() };
    /// assert!(strict.validate(&headline).is_err());
    /// assert!(Validator::new().validate(&headline).is_ok());
    /// ```
    pub fn with_limits(limits: Limits) -> Self {
        Validator { limits }
    }

    /// The limits in use.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Validate one record.
    ///
    /// Returns `Ok(())` when every tagged field passes. A non-struct input
    /// fails with [`Error::Structural`] before any field is looked at; all
    /// other problems come back together as [`Error::Invalid`], in field
    /// order.
    pub fn validate<R: Inspect + ?Sized>(&self, record: &R) -> Result<(), Error> {
        match record.kind() {
            Kind::Struct(fields) => self
                .check_fields(&fields)
                .into_result()
                .map_err(Error::Invalid),
            Kind::Other(_type_name) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(type_name = _type_name, "rejecting non-struct input");
                Err(Error::Structural(ValidatorError::NotStruct))
            }
        }
    }

    /// Validate one record, as an accumulating [`Validation`].
    ///
    /// Unlike [`validate`](Self::validate), a non-struct input is recorded in
    /// the collector (under [`RECORD_LEVEL`]) so results for many records can
    /// be merged with [`Validation::all_vec`].
    pub fn check<R: Inspect + ?Sized>(&self, record: &R) -> Validation<(), ValidationErrors> {
        let errors = match record.kind() {
            Kind::Struct(fields) => self.check_fields(&fields),
            Kind::Other(_) => {
                let mut errors = ValidationErrors::new();
                errors.add(RECORD_LEVEL, Err(ValidatorError::NotStruct));
                errors
            }
        };
        Validation::from_result(errors.into_result())
    }

    /// Validate a batch of records, reporting every violation from every
    /// record in order.
    pub fn validate_all<R: Inspect>(&self, records: &[R]) -> Result<(), Error> {
        Validation::all_vec(records.iter().map(|record| self.check(record)))
            .map(|_| ())
            .into_result()
            .map_err(Error::Invalid)
    }

    fn check_fields(&self, fields: &[Field<'_>]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in fields {
            let outcome = self.check_field(field);

            #[cfg(feature = "tracing")]
            trace_outcome(field, &outcome);

            if let Some(result) = outcome {
                errors.add(field.name(), result);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            fields = fields.len(),
            violations = errors.len(),
            "validation finished"
        );

        errors
    }

    /// `None` when the field is not subject to validation.
    fn check_field(&self, field: &Field<'_>) -> Option<Result<(), ValidatorError>> {
        let tag = field.tag()?;

        if !field.is_exported() {
            return Some(Err(ValidatorError::ValidateForUnexportedFields));
        }

        Some(self.apply_tag(tag, field))
    }

    fn apply_tag(&self, tag: &str, field: &Field<'_>) -> Result<(), ValidatorError> {
        let rule = Rule::from_tag(tag)?;
        let text = field
            .value()
            .and_then(|value| value.as_text())
            .ok_or_else(|| ValidatorError::InvalidValidatorSyntax {
                tag: tag.to_string(),
            })?;

        rule.apply(text, &self.limits)
    }
}

#[cfg(feature = "tracing")]
fn trace_outcome(field: &Field<'_>, outcome: &Option<Result<(), ValidatorError>>) {
    match outcome {
        None => tracing::trace!(field = field.name(), "skipping untagged field"),
        Some(Ok(())) => tracing::trace!(field = field.name(), "field passed"),
        Some(Err(err)) => tracing::debug!(field = field.name(), error = %err, "field rejected"),
    }
}

/// Validate `record` with the default limits.
///
/// Shorthand for `Validator::new().validate(record)`.
pub fn validate<R: Inspect + ?Sized>(record: &R) -> Result<(), Error> {
    Validator::new().validate(record)
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    crate::record! {
        #[allow(dead_code)]
        struct Article {
            pub title: String => "title",
            pub text: String => "text",
            pub views: u64,
        }
    }

    #[traced_test]
    #[test]
    fn test_violations_are_logged() {
        let article = Article {
            title: String::new(),
            text: "hello".to_string(),
            views: 1,
        };
        let _ = validate(&article);

        assert!(logs_contain("field rejected"));
        assert!(logs_contain("wrong title"));
        assert!(logs_contain("skipping untagged field"));
        assert!(logs_contain("validation finished"));
    }

    #[traced_test]
    #[test]
    fn test_non_struct_is_logged() {
        let _ = validate(&7_i64);
        assert!(logs_contain("rejecting non-struct input"));
    }
}
