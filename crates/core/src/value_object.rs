//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are interchangeable. All derived statement
/// artifacts (enriched performances, statement data) are value objects —
/// constructed fresh per computation, never cached or mutated in place.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared and logged like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
