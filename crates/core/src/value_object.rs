//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this domain
/// an `Item` is an entity (it carries an `ItemId`), while a condition label or
/// a computed percentage is a value object.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Percentage(String);
///
/// impl ValueObject for Percentage {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
