//! Value object trait: equality by value, not identity.
//!
//! Everything the service computes for a request (inputs, assessments,
//! recommendations, responses) is a value object: built fresh per request,
//! never mutated, and discarded once the response is written.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two assessments
/// with the same percentage are the same assessment.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
