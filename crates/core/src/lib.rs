//! `supplyrisk-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no I/O, no model or HTTP concerns):
//! the domain error, request identifiers, the value-object marker and the
//! numeric helpers the scoring and messaging code rely on.

pub mod error;
pub mod id;
pub mod number;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::RequestId;
pub use number::{round_half_even, round_to_places, PyFloat};
pub use value_object::ValueObject;
