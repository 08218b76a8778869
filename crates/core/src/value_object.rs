//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**. They are immutable once constructed and
/// compared by their attribute values, so constructors are where their
/// constraints get enforced.
///
/// - **Value Object**: two instances with the same values are equal
/// - **Entity**: two instances with the same ID are the same entity
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Percent(u8);
///
/// impl ValueObject for Percent {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
