//! Semigroup trait for merging error collections
//!
//! Violations found in different places (several fields, several records) are
//! merged with an associative `combine`, so the order in which partial results
//! are grouped never changes the final, field-ordered list.
//!
//! # Examples
//!
//! ```
//! use publication::Semigroup;
//!
//! let first = vec!["wrong title"];
//! let second = vec!["wrong text"];
//! assert_eq!(first.combine(second), vec!["wrong title", "wrong text"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the inputs are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
