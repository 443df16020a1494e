//! The singly-linked storage engine shared by every container in this crate.
//!
//! Nothing here is public: each container module wraps [`ChainState`] and
//! exposes only the subset of its operations that fits the container's access
//! discipline.

mod chain;
mod iter;
mod length;
mod node;

pub(crate) use chain::*;
pub(crate) use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
