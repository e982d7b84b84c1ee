//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are the same value. To "modify" one, build a new
/// one. `Money` is a value object; a `Cart` (which has identity) is not.
///
/// The bounds keep implementations cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
