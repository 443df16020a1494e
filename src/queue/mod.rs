//! A first-in-first-out container. [`Queue`] is also re-exported at the crate
//! root.

mod iter;
mod queue;

pub use iter::*;
pub use queue::*;
