//! Immutable hypergraph atoms.
//!
//! An [`Atom`] is either a leaf (`Node`, name-bearing), a numeric leaf
//! (`Number`, carrying a float vector), or a compound (`Link`, carrying an
//! ordered child sequence). Atoms are constructed once and never mutated;
//! normalization always builds new atoms. Sharing goes through [`Handle`]
//! (`Arc<Atom>`), and identity is structural: two atoms with equal type and
//! equal content compare and hash equal regardless of where they were
//! allocated.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::AtomError;
use crate::types::AtomType;

/// A shared reference to an atom.
///
/// Ownership is shared-by-many-readers; the longest holder keeps the atom
/// alive. A bound [`crate::store::AtomStore`] is the arbiter of canonical
/// identity, not of lifetime.
pub type Handle = Arc<Atom>;

/// An ordered child sequence. Inline storage for the common small arity.
pub type OutgoingSet = SmallVec<[Handle; 4]>;

/// An immutable node in the hypergraph.
#[derive(Clone, Debug)]
pub enum Atom {
    /// A leaf holding a name string.
    Node {
        /// The type tag; always within the `Node` family.
        kind: AtomType,
        /// The leaf's name.
        name: String,
    },

    /// A numeric leaf.
    ///
    /// Invariant: `name` is always the canonical plain-text serialization
    /// of `value`, never caller-supplied text. Equality and hashing go
    /// through `name`, so numerically equal leaves built from differently
    /// formatted text are interchangeable.
    Number {
        /// The numeric payload (may be empty).
        value: Vec<f64>,
        /// Canonical serialization of `value`.
        name: String,
    },

    /// A compound holding an ordered child sequence.
    Link {
        /// The type tag; always within the `Link` family.
        kind: AtomType,
        /// The children, in order.
        outgoing: OutgoingSet,
    },
}

impl Atom {
    /// Returns this atom's type tag.
    #[must_use]
    pub fn kind(&self) -> AtomType {
        match self {
            Atom::Node { kind, .. } | Atom::Link { kind, .. } => *kind,
            Atom::Number { .. } => AtomType::Number,
        }
    }

    /// Returns the name of a leaf atom, or `None` for compounds.
    ///
    /// For numeric leaves this is the canonical serialization.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Atom::Node { name, .. } | Atom::Number { name, .. } => Some(name),
            Atom::Link { .. } => None,
        }
    }

    /// Returns the numeric payload of a numeric leaf.
    #[must_use]
    pub fn value(&self) -> Option<&[f64]> {
        match self {
            Atom::Number { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the child sequence of a compound.
    #[must_use]
    pub fn outgoing(&self) -> Option<&[Handle]> {
        match self {
            Atom::Link { outgoing, .. } => Some(outgoing),
            _ => None,
        }
    }

    /// Returns the number of children (zero for leaves).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.outgoing().map_or(0, <[Handle]>::len)
    }

    /// Returns true if this is a numeric leaf.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Atom::Number { .. })
    }

    /// Returns true if this is a leaf atom (numeric or not).
    #[must_use]
    pub fn is_node(&self) -> bool {
        !matches!(self, Atom::Link { .. })
    }

    /// Returns true if this is a compound atom.
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Atom::Link { .. })
    }

    // === Constructors ===

    /// Creates a leaf atom of the given type.
    ///
    /// Types in the `Number` family are routed through the canonical
    /// numeric constructor so the name invariant holds.
    ///
    /// # Errors
    ///
    /// Returns [`AtomError::ConstructionType`] if `kind` is not a node type.
    pub fn node(kind: AtomType, name: impl Into<String>) -> Result<Handle, AtomError> {
        if !kind.is_a(AtomType::Node) {
            return Err(AtomError::ConstructionType {
                expected: AtomType::Node,
                found: kind,
            });
        }
        let name = name.into();
        if kind.is_a(AtomType::Number) {
            return Atom::number_with_type(kind, &name);
        }
        Ok(Arc::new(Atom::Node { kind, name }))
    }

    /// Creates a `Concept` leaf.
    #[must_use]
    pub fn concept(name: impl Into<String>) -> Handle {
        Arc::new(Atom::Node {
            kind: AtomType::Concept,
            name: name.into(),
        })
    }

    /// Creates a `Variable` leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Handle {
        Arc::new(Atom::Node {
            kind: AtomType::Variable,
            name: name.into(),
        })
    }

    /// Creates a compound atom of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`AtomError::ConstructionType`] if `kind` is not a link type.
    pub fn link(kind: AtomType, outgoing: impl Into<OutgoingSet>) -> Result<Handle, AtomError> {
        if !kind.is_a(AtomType::Link) {
            return Err(AtomError::ConstructionType {
                expected: AtomType::Link,
                found: kind,
            });
        }
        Ok(Arc::new(Atom::Link {
            kind,
            outgoing: outgoing.into(),
        }))
    }

    /// Creates a generic `List` compound.
    #[must_use]
    pub fn list(outgoing: impl Into<OutgoingSet>) -> Handle {
        Arc::new(Atom::Link {
            kind: AtomType::List,
            outgoing: outgoing.into(),
        })
    }

    /// Creates an additive fold compound.
    #[must_use]
    pub fn plus(outgoing: impl Into<OutgoingSet>) -> Handle {
        Arc::new(Atom::Link {
            kind: AtomType::Plus,
            outgoing: outgoing.into(),
        })
    }

    /// Creates a multiplicative fold compound.
    #[must_use]
    pub fn times(outgoing: impl Into<OutgoingSet>) -> Handle {
        Arc::new(Atom::Link {
            kind: AtomType::Times,
            outgoing: outgoing.into(),
        })
    }
}

// Structural equality. Numeric leaves compare through their canonical name
// so the f64 payload stays out of Eq and Hash.
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Atom::Node { kind: ka, name: na },
                Atom::Node { kind: kb, name: nb },
            ) => ka == kb && na == nb,
            (Atom::Number { name: na, .. }, Atom::Number { name: nb, .. }) => na == nb,
            (
                Atom::Link { kind: ka, outgoing: oa },
                Atom::Link { kind: kb, outgoing: ob },
            ) => ka == kb && oa == ob,
            _ => false,
        }
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Atom::Node { name, .. } | Atom::Number { name, .. } => name.hash(state),
            Atom::Link { outgoing, .. } => outgoing.hash(state),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Node { kind, name } => write!(f, "({kind:?} \"{name}\")"),
            Atom::Number { name, .. } => write!(f, "(Number \"{name}\")"),
            Atom::Link { kind, outgoing } => {
                write!(f, "({kind:?}")?;
                for child in outgoing {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
