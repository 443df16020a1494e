//! Error types for the fallible container operations.
//!
//! Both conditions here are non-fatal and locally recoverable: the operation
//! that reports them has performed no mutation, so the caller can branch and
//! carry on (or retry, which fails identically).

use derive_more::{Display, Error};

/// Returned when an index lies outside a container's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of bounds for a chain of {len} elements")]
pub struct IndexOutOfBounds {
    /// The index the caller asked for.
    pub index: usize,
    /// The container's length at the time of the call.
    pub len: usize,
}

/// Raised only if a chain's length would exceed `usize::MAX`, which no real
/// allocation can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("container length overflowed")]
pub struct CapacityOverflow;
