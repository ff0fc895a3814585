//! # Noema
//!
//! Algebraic normalization for an immutable knowledge hypergraph.
//!
//! Noema represents knowledge as typed, immutable atoms — leaves, numeric
//! leaves, and compounds — and rewrites expressions built from
//! associative-commutative operators into a canonical form, so that
//! semantically equal expressions become structurally identical and can be
//! deduplicated, matched, and reasoned over consistently.
//!
//! ## Quick Start
//!
//! ```rust
//! use noema::prelude::*;
//!
//! let x = Atom::variable("x");
//! let sum = Atom::plus(vec![x.clone(), x.clone()]);
//!
//! // x + x ==> x * 2
//! let reduced = additive::normalize(&sum).unwrap();
//! assert_eq!(reduced, Atom::times(vec![x, Atom::number("2")]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use noema_core as core;
pub use noema_reduct as reduct;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use noema_core::{Atom, AtomError, AtomStore, AtomType, FloatVector, Handle};
    pub use noema_reduct::{additive, fold, multiplicative, FoldPolicy};
}
