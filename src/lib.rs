//! # Publication
//!
//! Tag-driven struct field validation that reports every problem at once.
//!
//! Declare a record with [`record!`], attaching a tag to each field that
//! should be checked. [`validate`] walks the fields in declaration order,
//! runs the rule each tag names, and returns either `Ok(())` or one
//! [`Error`] holding all violations.
//!
//! | Tag       | Rule                                    | Violation      |
//! |-----------|-----------------------------------------|----------------|
//! | `"title"` | 1 to 99 bytes                           | `InvalidTitle` |
//! | `"text"`  | 1 to 499 bytes                          | `InvalidText`  |
//!
//! Tagging a non-`pub` field is itself a violation, and a tag that names no
//! rule is reported as `InvalidValidatorSyntax`.
//!
//! ## Quick Example
//!
//! ```rust
//! use publication::{record, validate, ValidatorError};
//!
//! record! {
//!     #[derive(Debug, Clone)]
//!     pub struct Publication {
//!         pub title: String => "title",
//!         pub text: String => "text",
//!         pub views: u64,
//!     }
//! }
//!
//! let ok = Publication { title: "Hello World".into(), text: "hello".into(), views: 0 };
//! assert!(validate(&ok).is_ok());
//!
//! let bad = Publication { title: String::new(), text: "x".repeat(500), views: 0 };
//! let err = validate(&bad).unwrap_err();
//! assert_eq!(err.to_string(), "wrong titlewrong text");
//! assert!(err.contains(&ValidatorError::InvalidText));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for skipped fields and violations
//! - `serde`: serialize violations, (de)serialize [`Limits`] and [`Rule`]
//! - `proptest`: strategies and `Arbitrary` impls in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod record;
pub mod rule;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use error::{Error, ValidationError, ValidationErrors, ValidatorError};
pub use record::{Field, FieldValue, Inspect, Kind, Visibility};
pub use rule::{Limits, Rule};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{validate, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ValidationErrors, ValidatorError};
    pub use crate::record::{FieldValue, Inspect};
    pub use crate::rule::{Limits, Rule};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::{validate, Validator};
    pub use crate::{assert_valid, assert_violations, record};
}
