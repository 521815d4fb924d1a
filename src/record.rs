//! Field introspection for validated records
//!
//! There is no runtime reflection: a type describes its own fields by
//! implementing [`Inspect`]. The [`record!`](crate::record) macro declares a
//! struct and generates that impl, listing fields in declaration order with
//! their visibility and optional tag.
//!
//! The tag plays two roles. It is the field's external (wire) name, see
//! [`Field::wire_name`], and it selects the validation [`Rule`](crate::Rule).
//! Since every tag must name a rule, a field cannot carry a tag for naming
//! alone.
//!
//! # Examples
//!
//! ```
//! use publication::{record, Inspect, Kind, Visibility};
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct Post {
//!         pub title: String => "title",
//!         pub views: u64,
//!         draft: String => "text",
//!     }
//! }
//!
//! let post = Post { title: "Hello".into(), views: 3, draft: String::new() };
//! let Kind::Struct(fields) = post.kind() else { unreachable!() };
//!
//! let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
//! assert_eq!(names, ["title", "views", "draft"]);
//! assert_eq!(fields[1].tag(), None);
//! assert_eq!(fields[2].visibility(), Visibility::Unexported);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Whether a field can be reached from outside its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`.
    Exported,
    /// Private, or restricted (`pub(crate)`, `pub(super)`, `pub(in ..)`).
    Unexported,
}

impl Visibility {
    /// Classify a visibility token as written in source.
    ///
    /// Only a bare `pub` counts as exported.
    pub fn from_token(token: &str) -> Self {
        if token.trim() == "pub" {
            Visibility::Exported
        } else {
            Visibility::Unexported
        }
    }
}

/// Read access to a field's value for the rules.
///
/// Rules only look at text; other types report `None`.
pub trait FieldValue {
    /// The value as text, if it is text.
    fn as_text(&self) -> Option<&str>;
}

impl FieldValue for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl FieldValue for Box<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl FieldValue for Rc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl FieldValue for Arc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl FieldValue for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

macro_rules! impl_field_value_non_text {
    ($($t:ty),+) => {
        $(
            impl FieldValue for $t {
                #[inline]
                fn as_text(&self) -> Option<&str> {
                    None
                }
            }
        )+
    };
}

impl_field_value_non_text!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// One declared field of a record.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    visibility: Visibility,
    tag: Option<&'static str>,
    value: Option<&'a dyn FieldValue>,
}

impl<'a> Field<'a> {
    /// A field without a tag. It is never validated.
    pub fn untagged(name: &'static str, visibility: Visibility) -> Self {
        Field {
            name,
            visibility,
            tag: None,
            value: None,
        }
    }

    /// A tagged field and a handle to its value.
    pub fn tagged(
        name: &'static str,
        visibility: Visibility,
        tag: &'static str,
        value: &'a dyn FieldValue,
    ) -> Self {
        Field {
            name,
            visibility,
            tag: Some(tag),
            value: Some(value),
        }
    }

    /// The field's identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// True for `pub` fields.
    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }

    /// The declared tag, if any.
    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// External name: the tag when present, otherwise the identifier.
    ///
    /// The tag also selects the rule, so a tag is only usable as a name when
    /// it is also a rule tag (`"title"` or `"text"`). Any other tag fails
    /// validation with `InvalidValidatorSyntax`.
    pub fn wire_name(&self) -> &'static str {
        self.tag.unwrap_or(self.name)
    }

    /// Handle to the value; `None` for untagged fields.
    pub fn value(&self) -> Option<&'a dyn FieldValue> {
        self.value
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// The shape of a value as seen by the validator.
#[derive(Debug, Clone)]
pub enum Kind<'a> {
    /// A record with fields in declaration order.
    Struct(Vec<Field<'a>>),
    /// Anything else, named by its type.
    Other(&'static str),
}

impl Kind<'_> {
    /// True for [`Kind::Struct`].
    pub fn is_struct(&self) -> bool {
        matches!(self, Kind::Struct(_))
    }
}

/// Types the validator can look inside.
///
/// Implemented by [`record!`](crate::record) for declared structs, and as
/// [`Kind::Other`] for primitives, strings and standard collections so that
/// passing one of those is reported rather than refused at compile time.
pub trait Inspect {
    /// Describe this value.
    fn kind(&self) -> Kind<'_>;
}

macro_rules! impl_inspect_other {
    ($($t:ty),+) => {
        $(
            impl Inspect for $t {
                #[inline]
                fn kind(&self) -> Kind<'_> {
                    Kind::Other(std::any::type_name::<$t>())
                }
            }
        )+
    };
}

impl_inspect_other!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String
);

impl<T> Inspect for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

impl<T> Inspect for [T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

impl<T> Inspect for Option<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(std::any::type_name::<Self>())
    }
}

/// Declare a struct and implement [`Inspect`] for it.
///
/// Append `=> "tag"` to a field to attach a tag. Attributes on the struct and
/// its fields are passed through. Generic structs need a hand-written
/// [`Inspect`] impl.
///
/// ```
/// use publication::{record, validate};
///
/// record! {
///     pub struct Article {
///         pub title: String => "title",
///         pub text: String => "text",
///     }
/// }
///
/// let article = Article { title: "Hello World".into(), text: "hello".into() };
/// assert!(validate(&article).is_ok());
/// ```
#[macro_export]
macro_rules! record {
    (@field $self:ident, $field:ident, $vis:expr) => {
        $crate::Field::untagged(::std::stringify!($field), $vis)
    };
    (@field $self:ident, $field:ident, $vis:expr, $tag:literal) => {
        $crate::Field::tagged(::std::stringify!($field), $vis, $tag, &$self.$field)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Inspect for $name {
            fn kind(&self) -> $crate::Kind<'_> {
                $crate::Kind::Struct(::std::vec![
                    $(
                        $crate::record!(
                            @field self,
                            $field,
                            $crate::Visibility::from_token(::std::stringify!($fvis))
                            $(, $tag)?
                        ),
                    )*
                ])
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::record! {
        #[allow(dead_code)]
        struct Mixed {
            pub title: String => "title",
            pub(crate) text: String => "text",
            count: u32,
            pub label: &'static str => "title",
        }
    }

    fn fields(value: &Mixed) -> Vec<Field<'_>> {
        match value.kind() {
            Kind::Struct(fields) => fields,
            Kind::Other(name) => panic!("expected struct, got {}", name),
        }
    }

    fn sample() -> Mixed {
        Mixed {
            title: "Hello".to_string(),
            text: "body".to_string(),
            count: 7,
            label: "tag",
        }
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let value = sample();
        let names: Vec<_> = fields(&value).iter().map(Field::name).collect();
        assert_eq!(names, vec!["title", "text", "count", "label"]);
    }

    #[test]
    fn test_visibility_from_declaration() {
        let value = sample();
        let vis: Vec<_> = fields(&value).iter().map(Field::visibility).collect();
        assert_eq!(
            vis,
            vec![
                Visibility::Exported,
                Visibility::Unexported,
                Visibility::Unexported,
                Visibility::Exported,
            ]
        );
    }

    #[test]
    fn test_tags_and_values() {
        let value = sample();
        let fields = fields(&value);

        assert_eq!(fields[0].tag(), Some("title"));
        assert_eq!(fields[0].value().and_then(|v| v.as_text()), Some("Hello"));
        assert_eq!(fields[2].tag(), None);
        assert!(fields[2].value().is_none());
        assert_eq!(fields[3].value().and_then(|v| v.as_text()), Some("tag"));
    }

    #[test]
    fn test_wire_name_falls_back_to_identifier() {
        let value = sample();
        let fields = fields(&value);
        assert_eq!(fields[0].wire_name(), "title");
        assert_eq!(fields[2].wire_name(), "count");
    }

    #[test]
    fn test_visibility_tokens() {
        assert_eq!(Visibility::from_token("pub"), Visibility::Exported);
        assert_eq!(Visibility::from_token(""), Visibility::Unexported);
        assert_eq!(Visibility::from_token("pub(crate)"), Visibility::Unexported);
        assert_eq!(Visibility::from_token("pub (super)"), Visibility::Unexported);
    }

    #[test]
    fn test_non_records_are_other() {
        assert!(!42_i32.kind().is_struct());
        assert!(!"text".kind().is_struct());
        assert!(!vec![1, 2].kind().is_struct());
        assert!(!Some(1).kind().is_struct());
        assert!(!HashMap::<String, String>::new().kind().is_struct());
        assert!(matches!(String::new().kind(), Kind::Other(name) if name.contains("String")));
    }

    #[test]
    fn test_non_text_values() {
        assert_eq!(3_u8.as_text(), None);
        assert_eq!(true.as_text(), None);
        assert_eq!(Cow::Borrowed("x").as_text(), Some("x"));
        assert_eq!(Arc::<str>::from("y").as_text(), Some("y"));
    }
}
