//! # noema-core
//!
//! Atom data model for the Noema knowledge hypergraph.
//!
//! This crate provides:
//! - Immutable typed atoms (leaves, numeric leaves, compounds) shared via
//!   `Arc` handles with structural equality
//! - Canonical numeric leaves: parse once, serialize canonically, so
//!   numerically equal text converges on one structure
//! - Elementwise/scalar-broadcast float vector arithmetic
//! - A deduplicating atom store with atomic insert-or-fetch
//!
//! ## Design Principles
//!
//! - **Immutability**: atoms are built once; normalization builds new atoms
//! - **Structural Identity**: equal type + equal content ⇒ interchangeable
//! - **Explicit Store**: deduplication is an explicit collaborator, never
//!   ambient state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod error;
pub mod number;
pub mod store;
pub mod types;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use atom::{Atom, Handle, OutgoingSet};
pub use error::AtomError;
pub use store::AtomStore;
pub use types::AtomType;
pub use vector::FloatVector;
