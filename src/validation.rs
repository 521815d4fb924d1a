//! Validation type for accumulating errors
//!
//! `Validation` is like `Result`, but combining two failures keeps both error
//! values (merged through [`Semigroup`]) instead of stopping at the first.
//! [`Validator::check`](crate::Validator::check) returns one of these so that
//! results for many records can be folded together.
//!
//! # Examples
//!
//! ```
//! use publication::{Validation, ValidationErrors, ValidatorError};
//!
//! let mut title = ValidationErrors::new();
//! title.add("title", Err(ValidatorError::InvalidTitle));
//! let mut text = ValidationErrors::new();
//! text.add("text", Err(ValidatorError::InvalidText));
//!
//! let merged = Validation::<(), _>::from_result(title.into_result())
//!     .and(Validation::from_result(text.into_result()));
//!
//! let Validation::Failure(errors) = merged else { unreachable!() };
//! assert_eq!(errors.to_string(), "wrong titlewrong text");
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a validation from a Result
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Both successful gives a tuple of both values. Any failure wins, and two
    /// failures are merged with `Semigroup::combine` (left first).
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine all validations from an iterator
    ///
    /// Returns every success value when nothing failed. Otherwise the errors
    /// are merged in iteration order.
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidationErrors, ValidatorError};

    fn failed(field: &'static str, err: ValidatorError) -> Validation<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.add(field, Err(err));
        Validation::from_result(errors.into_result())
    }

    fn passed() -> Validation<(), ValidationErrors> {
        Validation::from_result(ValidationErrors::new().into_result())
    }

    #[test]
    fn test_empty_collector_is_success() {
        assert_eq!(passed(), Validation::Success(()));
    }

    #[test]
    fn test_and_keeps_single_failure() {
        let v = passed().and(failed("text", ValidatorError::InvalidText));
        let errors = v.into_result().unwrap_err();
        assert_eq!(errors.kinds(), vec![ValidatorError::InvalidText]);
    }

    #[test]
    fn test_and_accumulates_in_order() {
        let v = failed("title", ValidatorError::InvalidTitle)
            .and(failed("text", ValidatorError::InvalidText));
        let errors = v.into_result().unwrap_err();
        assert_eq!(
            errors.kinds(),
            vec![ValidatorError::InvalidTitle, ValidatorError::InvalidText]
        );
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let v = Validation::<(), ValidationErrors>::all_vec(Vec::new());
        assert_eq!(v, Validation::Success(vec![]));
    }

    #[test]
    fn test_all_vec_merges_failures_in_order() {
        let v = Validation::all_vec(vec![
            failed("a", ValidatorError::InvalidTitle),
            passed(),
            failed("b", ValidatorError::ValidateForUnexportedFields),
        ]);
        let fields: Vec<_> = v
            .map(|_| ())
            .into_result()
            .unwrap_err()
            .iter()
            .map(|e| e.field())
            .collect();
        assert_eq!(fields, vec!["a", "b"]);
    }
}
