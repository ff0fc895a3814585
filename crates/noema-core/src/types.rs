//! The atom type hierarchy.
//!
//! Every atom carries an [`AtomType`] tag. Types form a tree rooted at
//! [`AtomType::Atom`]; the [`AtomType::is_a`] relation walks parent links
//! and is what collaborators use to classify atoms (variable vs. numeric
//! vs. compound) without downcasting.

/// A type tag for atoms.
///
/// The hierarchy is closed: this core only needs the types the reduction
/// engine classifies against, plus `Concept` and `List` as representative
/// generic leaf and compound types.
///
/// ```text
/// Atom
///  ├── Node
///  │    ├── Concept
///  │    ├── Variable
///  │    └── Number
///  └── Link
///       ├── List
///       └── Fold
///            ├── Plus
///            └── Times
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomType {
    /// Root of the hierarchy.
    Atom,
    /// A leaf atom carrying a name.
    Node,
    /// A generic named concept.
    Concept,
    /// A free variable, matchable by the pattern engine.
    Variable,
    /// A numeric leaf; its name is the canonical rendering of a float vector.
    Number,
    /// A compound atom carrying an ordered child sequence.
    Link,
    /// A generic ordered compound with no algebraic meaning.
    List,
    /// Abstract associative-commutative fold (identity + combine operator).
    Fold,
    /// Additive fold: identity 0, combine is addition.
    Plus,
    /// Multiplicative fold: identity 1, combine is multiplication.
    Times,
}

impl AtomType {
    /// Returns the parent type, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<AtomType> {
        match self {
            AtomType::Atom => None,
            AtomType::Node | AtomType::Link => Some(AtomType::Atom),
            AtomType::Concept | AtomType::Variable | AtomType::Number => Some(AtomType::Node),
            AtomType::List | AtomType::Fold => Some(AtomType::Link),
            AtomType::Plus | AtomType::Times => Some(AtomType::Fold),
        }
    }

    /// Returns true if `self` lies within the `family` subtree.
    ///
    /// The relation is reflexive: `t.is_a(t)` always holds.
    #[must_use]
    pub fn is_a(self, family: AtomType) -> bool {
        let mut current = Some(self);
        while let Some(t) = current {
            if t == family {
                return true;
            }
            current = t.parent();
        }
        false
    }

    /// Returns true if this is a leaf type.
    #[must_use]
    pub fn is_node_type(self) -> bool {
        self.is_a(AtomType::Node)
    }

    /// Returns true if this is a compound type.
    #[must_use]
    pub fn is_link_type(self) -> bool {
        self.is_a(AtomType::Link)
    }
}
