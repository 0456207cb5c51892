//! Declarative field-to-attribute tables.
//!
//! Most entities render as a flat list of optional attributes. Each entry of a
//! table names the attribute and a projection that returns the rendered value,
//! or `None` when the attribute must be omitted. The projection encodes both the
//! presence predicate and the value transform, using the helpers below.

use std::fmt::Display;

use crate::element::{Element, bool_str};

/// One row of a field table.
#[derive(Debug)]
pub struct Field<T> {
    /// Attribute name on the wire.
    pub attr: &'static str,
    /// Rendered value, or `None` to omit the attribute.
    pub value: fn(&T) -> Option<String>,
}

impl<T> Field<T> {
    /// A table row.
    pub const fn new(attr: &'static str, value: fn(&T) -> Option<String>) -> Self {
        Self { attr, value }
    }
}

/// Declare a field table for `$ty`.
///
/// ```ignore
/// const USER: &[Field<UserItem>] = fields!(UserItem {
///     "email" => |u| non_empty(u.email.as_ref()),
/// });
/// ```
macro_rules! fields {
    ($ty:ty { $($attr:literal => |$item:ident| $value:expr),* $(,)? }) => {
        &[$($crate::fields::Field::new($attr, |$item: &$ty| $value)),*]
    };
}

pub(crate) use fields;

/// Set every attribute of `fields` that `item` populates, in table order.
pub fn apply<T>(element: &mut Element, item: &T, fields: &[Field<T>]) {
    for field in fields {
        if let Some(value) = (field.value)(item) {
            element.set(field.attr, value);
        }
    }
}

/// Present when set, copied verbatim (an empty string is still sent).
#[must_use]
pub fn text(value: Option<&String>) -> Option<String> {
    value.cloned()
}

/// Present when set and non-empty.
#[must_use]
pub fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Present when set, lower-cased.
#[must_use]
pub fn lower(value: Option<&String>) -> Option<String> {
    value.map(|v| v.to_lowercase())
}

/// Present when set, rendered as `"true"` / `"false"`.
#[must_use]
pub fn flag(value: Option<bool>) -> Option<String> {
    value.map(|v| bool_str(v).to_owned())
}

/// Always present, rendered as `"true"` / `"false"`.
#[must_use]
pub fn always(value: bool) -> Option<String> {
    Some(bool_str(value).to_owned())
}

/// Present when set, rendered with `Display` (numbers and wire enums).
#[must_use]
pub fn display<V: Display>(value: Option<V>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Present when set and non-zero.
#[must_use]
pub fn non_zero<V: Into<u64> + Copy>(value: Option<V>) -> Option<String> {
    value.filter(|v| (*v).into() != 0).map(|v| v.into().to_string())
}
