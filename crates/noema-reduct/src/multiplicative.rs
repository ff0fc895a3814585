//! The multiplicative reduction policy.
//!
//! The additive engine uses multiplicative links as both rewrite source
//! (inspecting a product's first factor) and rewrite target (`x * 2`).
//! This module supplies the fold-level sibling those rewrites need:
//! constant merging and identity annihilation only, with no
//! multiplicative-specific rewrite rules.

use noema_core::vector::{self, FloatVector};
use noema_core::{AtomError, AtomStore, AtomType, Handle};

use crate::fold::{fold, FoldPolicy};

/// The multiplicative fold policy: identity 1, combine is multiplication.
pub struct Multiplicative;

impl FoldPolicy for Multiplicative {
    const IDENTITY: f64 = 1.0;
    const LINK_TYPE: AtomType = AtomType::Times;

    fn combine(a: f64, b: f64) -> f64 {
        a * b
    }

    fn combine_values(a: &[f64], b: &[f64]) -> FloatVector {
        if a.len() == 1 {
            vector::scalar_mul(a[0], b)
        } else if b.len() == 1 {
            vector::scalar_mul(b[0], a)
        } else {
            vector::mul(a, b)
        }
    }
}

/// Normalizes a multiplicative expression. Pure: no store is consulted.
///
/// Atoms that are not multiplicative links are returned unchanged.
///
/// # Errors
///
/// Propagates any error raised while reducing a child.
pub fn normalize(expr: &Handle) -> Result<Handle, AtomError> {
    fold::<Multiplicative>(expr)
}

/// Normalizes and then interns the result when a store is supplied.
///
/// # Errors
///
/// Propagates any error from [`normalize`].
pub fn reduce(expr: &Handle, store: Option<&AtomStore>) -> Result<Handle, AtomError> {
    let normalized = normalize(expr)?;
    Ok(match store {
        Some(store) => store.insert_or_fetch(normalized),
        None => normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use noema_core::Atom;
    use smallvec::smallvec;

    #[test]
    fn test_constant_merge() {
        let product = Atom::times(smallvec![
            Atom::variable("x"),
            Atom::number("2"),
            Atom::number("3"),
        ]);
        let reduced = normalize(&product).unwrap();
        let expected = Atom::times(smallvec![Atom::variable("x"), Atom::number("6")]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_identity_annihilation() {
        let x = Atom::variable("x");
        let product = Atom::times(smallvec![x.clone(), Atom::number("1")]);
        assert_eq!(normalize(&product).unwrap(), x);
    }

    #[test]
    fn test_nested_additive_children_normalize() {
        // (1 + 2) * x ==> x * 3
        let x = Atom::variable("x");
        let sum = Atom::plus(smallvec![Atom::number("1"), Atom::number("2")]);
        let product = Atom::times(smallvec![sum, x.clone()]);
        let reduced = normalize(&product).unwrap();
        assert_eq!(reduced, Atom::times(smallvec![x, Atom::number("3")]));
    }

    #[test]
    fn test_vector_operands() {
        let product = Atom::times(smallvec![
            Atom::number_from_values(vec![1.0, 2.0, 3.0]),
            Atom::number_from_values(vec![4.0, 5.0]),
        ]);
        let reduced = normalize(&product).unwrap();
        assert_eq!(reduced, Atom::number_from_values(vec![4.0, 10.0]));
    }

    #[test]
    fn test_scalar_broadcast_into_vector() {
        let product = Atom::times(smallvec![
            Atom::number("2"),
            Atom::number_from_values(vec![4.0, 8.0]),
        ]);
        let reduced = normalize(&product).unwrap();
        assert_eq!(reduced, Atom::number_from_values(vec![8.0, 16.0]));
    }

    #[test]
    fn test_reduce_with_store() {
        let store = AtomStore::new();
        let product = Atom::times(smallvec![Atom::variable("x"), Atom::number("2")]);
        let reduced = reduce(&product, Some(&store)).unwrap();
        assert!(store.contains(&reduced));
        assert_eq!(store.len(), 1);
    }
}
