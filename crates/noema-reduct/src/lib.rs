//! # noema-reduct
//!
//! Algebraic term reduction for the Noema knowledge hypergraph.
//!
//! This crate normalizes expressions built from associative-commutative
//! operators so that semantically equal expressions become structurally
//! identical:
//! - Generic fold: merges numeric operands through a policy's identity and
//!   combine operator
//! - Additive policy: constant folding, canonical operand ordering, and
//!   like-term collapsing (`x + x ==> x * 2`, `x + x*a ==> x*(a+1)`)
//! - Multiplicative policy: the fold-level sibling the additive rewrites
//!   target
//!
//! ## Purity
//!
//! `normalize` never touches shared state. Deduplication against an
//! [`noema_core::AtomStore`] happens only through the explicit `reduce`
//! entry points, which thread the store as an argument.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod additive;
pub mod fold;
pub mod multiplicative;

#[cfg(test)]
mod proptests;

pub use additive::Additive;
pub use fold::{fold, FoldPolicy};
pub use multiplicative::Multiplicative;
