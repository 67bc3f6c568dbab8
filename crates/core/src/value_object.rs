//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two amounts of
/// `1500` minor units are the same amount regardless of which invoice holds
/// them. To "modify" one, construct a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Amount(u64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(100), Amount(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
