#![allow(clippy::style)]

//! Utilities for working with lambda blocks.

pub mod block;
pub mod lambda;
pub mod receiver;
pub mod supplier;

pub mod prelude {
    /// Type-inference helpers.
    pub use crate::lambda::{lambda, lambda_reborrow, lambda_ref};
    /// Calling conventions.
    pub use crate::receiver::{Receive, ReceiverFn, to_explicit, to_receiver};
    /// Suppliers.
    pub use crate::supplier::{AsSupplier, supplier};
    /// Block evaluation.
    pub use crate::block::{discard, eval, pass, try_discard};
}
