//! Field metadata for mappable types
//!
//! A type takes part in mapping by implementing [`Mappable`]: it lists its
//! fields in declaration order and hands each one to a visitor. Leaf fields
//! have the type [`Text`]; every other field must itself be [`Mappable`].
//!
//! The [`mappable!`](crate::mappable) macro declares a struct and writes the
//! implementation:
//!
//! ```
//! use jsonmap::{mappable, Text};
//!
//! mappable! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Address {
//!         pub city: Text => "town",
//!         pub street: Text,
//!     }
//! }
//!
//! mappable! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Person {
//!         pub name: Text => "profile/",
//!         pub address: Address,
//!     }
//! }
//!
//! let person: Person = jsonmap::map(
//!     r#"{"profile": {"name": "Ada"}, "address": {"town": "London"}}"#,
//! )
//! .unwrap();
//! assert_eq!(person.name.as_deref(), Some("Ada"));
//! assert_eq!(person.address.city.as_deref(), Some("London"));
//! assert_eq!(person.address.street, None);
//! ```

use crate::error::Result;
use jsonmap_core::{Field, FieldKind};

/// Leaf field type: resolved text, or `None` when the path did not resolve
pub type Text = Option<String>;

/// A struct that can be filled from a JSON document
///
/// `Default` is the parameterless constructor used to create each instance
/// before its fields are assigned.
pub trait Mappable: Default {
    /// Field descriptors in declaration order
    fn fields() -> &'static [Field];

    /// Hand every field to `visitor` for assignment, in declaration order
    fn visit_mut<V: FieldVisitor>(&mut self, visitor: &mut V) -> Result<()>;

    /// Hand every field to `inspector` for reading, in declaration order
    fn visit<I: FieldInspector>(&self, inspector: &mut I) -> Result<()>;

    /// Name used in log output
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Receives mutable access to each field of a [`Mappable`]
pub trait FieldVisitor {
    /// Visit a text field
    fn leaf(&mut self, field: &Field, slot: &mut Text) -> Result<()>;

    /// Visit a structured field
    fn nested<T: Mappable>(&mut self, field: &Field, slot: &mut T) -> Result<()>;
}

/// Receives shared access to each field of a [`Mappable`]
pub trait FieldInspector {
    /// Inspect a text field
    fn leaf(&mut self, field: &Field, value: Option<&str>) -> Result<()>;

    /// Inspect a structured field
    fn nested<T: Mappable>(&mut self, field: &Field, value: &T) -> Result<()>;
}

/// Dispatches a struct field to the leaf or nested visitor method
///
/// Implemented for [`Text`] and for every [`Mappable`] type.
pub trait MapField {
    /// Leaf or nested
    const KIND: FieldKind;

    /// Forward to [`FieldVisitor::leaf`] or [`FieldVisitor::nested`]
    fn accept_mut<V: FieldVisitor>(&mut self, field: &Field, visitor: &mut V) -> Result<()>;

    /// Forward to [`FieldInspector::leaf`] or [`FieldInspector::nested`]
    fn accept<I: FieldInspector>(&self, field: &Field, inspector: &mut I) -> Result<()>;
}

impl MapField for Text {
    const KIND: FieldKind = FieldKind::Leaf;

    fn accept_mut<V: FieldVisitor>(&mut self, field: &Field, visitor: &mut V) -> Result<()> {
        visitor.leaf(field, self)
    }

    fn accept<I: FieldInspector>(&self, field: &Field, inspector: &mut I) -> Result<()> {
        inspector.leaf(field, self.as_deref())
    }
}

impl<T: Mappable> MapField for T {
    const KIND: FieldKind = FieldKind::Nested;

    fn accept_mut<V: FieldVisitor>(&mut self, field: &Field, visitor: &mut V) -> Result<()> {
        visitor.nested(field, self)
    }

    fn accept<I: FieldInspector>(&self, field: &Field, inspector: &mut I) -> Result<()> {
        inspector.nested(field, self)
    }
}

/// Declare a struct and implement [`Mappable`] for it
///
/// Fields are written `name: Type` or `name: Type => "annotation"`. `Type` is
/// [`Text`] for leaves or another mappable struct. `Default` is derived by the
/// macro and must not be derived again.
#[macro_export]
macro_rules! mappable {
    (@annotation) => {
        ::core::option::Option::None
    };
    (@annotation $ann:literal) => {
        ::core::option::Option::Some($ann)
    };
    (@field $field:ident, $fty:ty $(, $ann:literal)?) => {
        $crate::Field::new(
            ::core::stringify!($field),
            $crate::mappable!(@annotation $($ann)?),
            <$fty as $crate::MapField>::KIND,
        )
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> $ann:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Mappable for $name {
            fn fields() -> &'static [$crate::Field] {
                const FIELDS: &[$crate::Field] = &[
                    $( $crate::mappable!(@field $field, $fty $(, $ann)?), )*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn visit_mut<V: $crate::FieldVisitor>(
                &mut self,
                visitor: &mut V,
            ) -> $crate::Result<()> {
                $(
                    $crate::MapField::accept_mut(
                        &mut self.$field,
                        &$crate::mappable!(@field $field, $fty $(, $ann)?),
                        visitor,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn visit<I: $crate::FieldInspector>(
                &self,
                inspector: &mut I,
            ) -> $crate::Result<()> {
                $(
                    $crate::MapField::accept(
                        &self.$field,
                        &$crate::mappable!(@field $field, $fty $(, $ann)?),
                        inspector,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    };
}
