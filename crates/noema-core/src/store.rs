//! The shared deduplicating atom store.
//!
//! The store is the arbiter of canonical identity: inserting an atom that
//! is structurally equal to one already held returns the existing instance
//! instead. Insert-or-fetch is atomic per structural key, so reductions
//! racing to intern equal results converge on one shared atom.

use hashbrown::HashSet;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::atom::{Atom, Handle};

/// A deduplicating set of atoms keyed by structural identity.
#[derive(Debug, Default)]
pub struct AtomStore {
    atoms: Mutex<HashSet<Handle>>,
}

impl AtomStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an atom, or fetches the structurally equal one already held.
    ///
    /// Idempotent: inserting the same structure any number of times always
    /// returns the first instance stored.
    pub fn insert_or_fetch(&self, atom: Handle) -> Handle {
        let mut atoms = self.atoms.lock();
        if let Some(existing) = atoms.get(atom.as_ref()) {
            return Arc::clone(existing);
        }
        atoms.insert(Arc::clone(&atom));
        atom
    }

    /// Returns true if a structurally equal atom is held.
    #[must_use]
    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.lock().contains(atom)
    }

    /// Returns the number of atoms held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.lock().len()
    }

    /// Returns true if the store holds no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.lock().is_empty()
    }
}
