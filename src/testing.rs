//! Testing utilities for code that validates records
//!
//! Assertion macros for [`validate`](crate::validate) results, and, with the
//! `proptest` feature, strategies for strings of an exact byte length and an
//! `Arbitrary` impl for [`Rule`](crate::Rule).
//!
//! # Examples
//!
//! ```rust
//! use publication::{assert_valid, assert_violations, record, validate, ValidatorError};
//!
//! record! {
//!     pub struct Note {
//!         pub title: String => "title",
//!         pub text: String => "text",
//!     }
//! }
//!
//! assert_valid!(validate(&Note { title: "a".into(), text: "b".into() }));
//! assert_violations!(
//!     validate(&Note { title: "".into(), text: "".into() }),
//!     [ValidatorError::InvalidTitle, ValidatorError::InvalidText]
//! );
//! ```

/// Assert that a validation result is `Ok`.
///
/// Panics with the rendered error otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected valid record, got: {:?} ({})", e, e);
            }
        }
    };
}

/// Assert that a validation result failed with exactly these causes, in order.
///
/// Works for both [`Error::Invalid`](crate::Error::Invalid) (compares every
/// violation's cause) and [`Error::Structural`](crate::Error::Structural)
/// (compares the single cause).
#[macro_export]
macro_rules! assert_violations {
    ($result:expr, [$($expected:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<$crate::ValidatorError> = ::std::vec![$($expected),*];
        match $result {
            ::std::result::Result::Err($crate::Error::Invalid(errors)) => {
                assert_eq!(errors.kinds(), expected);
            }
            ::std::result::Result::Err($crate::Error::Structural(err)) => {
                assert_eq!(::std::vec![err], expected);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected violations {:?}, got a valid record", expected);
            }
        }
    }};
}

/// Proptest strategies for validator inputs.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::Rule;

    /// ASCII strings of exactly `len` bytes.
    pub fn ascii_of_len(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('a', 'z'), len)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Strings the given rule accepts under the default limits.
    pub fn accepted(rule: Rule) -> impl Strategy<Value = String> {
        let max = match rule {
            Rule::Title => crate::Limits::TITLE_MAX,
            Rule::Text => crate::Limits::TEXT_MAX,
        };
        (1..max).prop_flat_map(ascii_of_len)
    }

    /// Strings the given rule rejects under the default limits.
    pub fn rejected(rule: Rule) -> impl Strategy<Value = String> {
        let max = match rule {
            Rule::Title => crate::Limits::TITLE_MAX,
            Rule::Text => crate::Limits::TEXT_MAX,
        };
        prop_oneof![Just(String::new()), (max..max * 2).prop_flat_map(ascii_of_len)]
    }

    impl Arbitrary for Rule {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Rule::Title), Just(Rule::Text)].boxed()
        }
    }
}
