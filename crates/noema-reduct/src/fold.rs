//! Generic associative-commutative fold reduction.
//!
//! A fold policy supplies an identity scalar and a combine operator; the
//! [`fold`] pass merges every numeric child of a fold link through the
//! policy, annihilates the identity, and rebuilds the link. Concrete
//! policies ([`crate::additive::Additive`], [`crate::multiplicative::Multiplicative`])
//! layer their own rewrites on top of this pass.

use noema_core::vector::FloatVector;
use noema_core::{Atom, AtomError, AtomType, Handle, OutgoingSet};

/// An associative-commutative reduction policy.
///
/// A policy is purely structural: it carries no result, only the identity
/// element, the combine operator, and the link type it reduces.
pub trait FoldPolicy {
    /// The identity element of the combine operator.
    const IDENTITY: f64;

    /// The link type this policy reduces.
    const LINK_TYPE: AtomType;

    /// Combines two scalars.
    fn combine(a: f64, b: f64) -> f64;

    /// Combines two value vectors.
    ///
    /// Single-element operands broadcast over the other vector with the
    /// scalar as left operand; multi-element operands combine elementwise
    /// over the shorter overlap.
    fn combine_values(a: &[f64], b: &[f64]) -> FloatVector;
}

/// Runs the generic fold pass over a fold link.
///
/// 1. Reduces every child post-order through its own policy.
/// 2. Partitions reduced children into numeric and other, preserving
///    relative order within each partition.
/// 3. Folds the numeric children pairwise through the policy's combine
///    operator, seeded at the identity, leaving at most one residual
///    numeric child.
/// 4. Drops the residual if it equals the identity, unwraps a lone
///    survivor, and otherwise rebuilds the link from the other children
///    followed by the residual.
///
/// Atoms that are not links of the policy's type are returned unchanged.
///
/// # Errors
///
/// Propagates any error raised while reducing a child.
pub fn fold<P: FoldPolicy>(expr: &Handle) -> Result<Handle, AtomError> {
    if !expr.kind().is_a(P::LINK_TYPE) {
        return Ok(expr.clone());
    }
    let Some(children) = expr.outgoing() else {
        return Ok(expr.clone());
    };

    let mut others = OutgoingSet::new();
    let mut acc: Option<Vec<f64>> = None;

    for child in children {
        let reduced = reduce_child(child)?;
        if let Some(values) = reduced.value() {
            acc = Some(match acc {
                None => values.to_vec(),
                Some(a) if a.len() == 1 && values.len() == 1 => {
                    vec![P::combine(a[0], values[0])]
                }
                Some(a) => P::combine_values(&a, values).into_values(),
            });
        } else {
            others.push(reduced);
        }
    }

    let residual = acc.unwrap_or_else(|| vec![P::IDENTITY]);

    if others.is_empty() {
        return Ok(Atom::number_from_values(residual));
    }
    if residual == [P::IDENTITY] {
        if others.len() == 1 {
            return Ok(others.swap_remove(0));
        }
        return Atom::link(expr.kind(), others);
    }
    others.push(Atom::number_from_values(residual));
    Atom::link(expr.kind(), others)
}

/// Reduces one child through the policy matching its type.
///
/// Leaves and non-fold links pass through unchanged.
fn reduce_child(child: &Handle) -> Result<Handle, AtomError> {
    let kind = child.kind();
    if kind.is_a(AtomType::Plus) {
        crate::additive::normalize(child)
    } else if kind.is_a(AtomType::Times) {
        crate::multiplicative::normalize(child)
    } else {
        Ok(child.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::additive::Additive;
    use crate::multiplicative::Multiplicative;
    use smallvec::smallvec;

    #[test]
    fn test_constant_folding() {
        let sum = Atom::plus(smallvec![
            Atom::number_from_values(vec![1.0]),
            Atom::number_from_values(vec![2.5]),
            Atom::number_from_values(vec![0.5]),
        ]);
        let reduced = fold::<Additive>(&sum).unwrap();
        assert_eq!(reduced, Atom::number_from_values(vec![4.0]));
    }

    #[test]
    fn test_identity_annihilation() {
        let x = Atom::variable("x");
        let sum = Atom::plus(smallvec![x.clone(), Atom::number("0")]);
        assert_eq!(fold::<Additive>(&sum).unwrap(), x);

        let y = Atom::variable("y");
        let product = Atom::times(smallvec![y.clone(), Atom::number("1")]);
        assert_eq!(fold::<Multiplicative>(&product).unwrap(), y);
    }

    #[test]
    fn test_residual_appended_after_others() {
        let x = Atom::variable("x");
        let sum = Atom::plus(smallvec![
            Atom::number("3"),
            x.clone(),
            Atom::number("4"),
        ]);
        let reduced = fold::<Additive>(&sum).unwrap();
        let expected = Atom::plus(smallvec![x, Atom::number("7")]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_vector_operands_truncate() {
        let sum = Atom::plus(smallvec![
            Atom::number_from_values(vec![1.0, 2.0]),
            Atom::number_from_values(vec![10.0, 20.0, 30.0]),
        ]);
        let reduced = fold::<Additive>(&sum).unwrap();
        assert_eq!(reduced, Atom::number_from_values(vec![11.0, 22.0]));
    }

    #[test]
    fn test_scalar_broadcast_into_vector() {
        let sum = Atom::plus(smallvec![
            Atom::number("1"),
            Atom::number_from_values(vec![10.0, 20.0]),
        ]);
        let reduced = fold::<Additive>(&sum).unwrap();
        assert_eq!(reduced, Atom::number_from_values(vec![11.0, 21.0]));
    }

    #[test]
    fn test_children_reduced_post_order() {
        let x = Atom::variable("x");
        let inner = Atom::plus(smallvec![Atom::number("1"), Atom::number("2")]);
        let outer = Atom::plus(smallvec![x.clone(), inner, Atom::number("4")]);
        let reduced = fold::<Additive>(&outer).unwrap();
        let expected = Atom::plus(smallvec![x, Atom::number("7")]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_multiplicative_constant_folding() {
        let product = Atom::times(smallvec![Atom::number("2"), Atom::number("3")]);
        let reduced = fold::<Multiplicative>(&product).unwrap();
        assert_eq!(reduced, Atom::number("6"));
    }

    #[test]
    fn test_non_fold_atoms_pass_through() {
        let c = Atom::concept("cat");
        assert_eq!(fold::<Additive>(&c).unwrap(), c);

        let l = Atom::list(smallvec![Atom::number("1"), Atom::number("2")]);
        assert_eq!(fold::<Additive>(&l).unwrap(), l);
    }
}
