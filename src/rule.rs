//! Field rules and their length limits
//!
//! A tag selects one of a closed set of rules. Tags that name no rule are an
//! error ([`ValidatorError::InvalidValidatorSyntax`]), never a silent skip.
//!
//! # Examples
//!
//! ```
//! use publication::{Limits, Rule, ValidatorError};
//!
//! let rule = Rule::from_tag("title").unwrap();
//! assert_eq!(rule, Rule::Title);
//! assert_eq!(rule.apply("Hello World", &Limits::default()), Ok(()));
//! assert_eq!(rule.apply("", &Limits::default()), Err(ValidatorError::InvalidTitle));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::ValidatorError;

/// Tag selecting the title rule.
pub const TAG_TITLE: &str = "title";
/// Tag selecting the text rule.
pub const TAG_TEXT: &str = "text";

/// Exclusive upper bounds, in bytes, for the rules.
///
/// The defaults are the bounds existing records were validated against:
/// titles shorter than 100 bytes, texts shorter than 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// A title must be shorter than this many bytes.
    pub title_max: usize,
    /// A text must be shorter than this many bytes.
    pub text_max: usize,
}

impl Limits {
    /// Default title bound.
    pub const TITLE_MAX: usize = 100;
    /// Default text bound.
    pub const TEXT_MAX: usize = 500;
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            title_max: Self::TITLE_MAX,
            text_max: Self::TEXT_MAX,
        }
    }
}

/// A validation rule attached to a field by its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rule {
    /// Non-empty, shorter than [`Limits::title_max`].
    Title,
    /// Non-empty, shorter than [`Limits::text_max`].
    Text,
}

impl Rule {
    /// All rules, in tag order.
    pub const ALL: [Rule; 2] = [Rule::Title, Rule::Text];

    /// Resolve a tag to its rule.
    pub fn from_tag(tag: &str) -> Result<Rule, ValidatorError> {
        match tag {
            TAG_TITLE => Ok(Rule::Title),
            TAG_TEXT => Ok(Rule::Text),
            other => Err(ValidatorError::InvalidValidatorSyntax {
                tag: other.to_string(),
            }),
        }
    }

    /// The tag that selects this rule.
    pub fn tag(self) -> &'static str {
        match self {
            Rule::Title => TAG_TITLE,
            Rule::Text => TAG_TEXT,
        }
    }

    /// Check `value` against this rule.
    ///
    /// Length is `value.len()`, so multi-byte characters count once per byte.
    pub fn apply(self, value: &str, limits: &Limits) -> Result<(), ValidatorError> {
        let (max, err) = match self {
            Rule::Title => (limits.title_max, ValidatorError::InvalidTitle),
            Rule::Text => (limits.text_max, ValidatorError::InvalidText),
        };

        if value.is_empty() || value.len() >= max {
            Err(err)
        } else {
            Ok(())
        }
    }
}

impl FromStr for Rule {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::from_tag(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
