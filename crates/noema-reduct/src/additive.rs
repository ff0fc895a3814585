//! The additive reduction policy.
//!
//! Specializes the generic fold for addition and layers two rewrites on
//! top: canonical operand reordering and like-term collapsing. The
//! normalization loop handles:
//!
//! ```text
//! x + x        ==>  x * 2
//! x + (x * a)  ==>  x * (a + 1)
//! ```
//!
//! There is deliberately no mirrored rule for `(x * a) + x` at the pair
//! scan itself; reordering usually places the bare operand first, and
//! downstream consumers depend on the scan behaving exactly this way.
//!
//! [`normalize`] is pure; interning is an explicit composition via
//! [`reduce`], which threads an optional [`AtomStore`] rather than
//! resolving one ambiently.

use smallvec::smallvec;

use noema_core::vector::{self, FloatVector};
use noema_core::{Atom, AtomError, AtomStore, AtomType, Handle, OutgoingSet};

use crate::fold::{fold, FoldPolicy};

/// The additive fold policy: identity 0, combine is addition.
pub struct Additive;

impl FoldPolicy for Additive {
    const IDENTITY: f64 = 0.0;
    const LINK_TYPE: AtomType = AtomType::Plus;

    fn combine(a: f64, b: f64) -> f64 {
        a + b
    }

    fn combine_values(a: &[f64], b: &[f64]) -> FloatVector {
        if a.len() == 1 {
            vector::scalar_add(a[0], b)
        } else if b.len() == 1 {
            vector::scalar_add(b[0], a)
        } else {
            vector::add(a, b)
        }
    }
}

/// Reorders an additive link into canonical band order.
///
/// Three bands, each preserving the original relative order: free
/// variables first, compound expressions next, numeric literals last.
/// The generic fold has already merged all numerics by the time this
/// runs, so more than one numeric child is a defect in the fold pass.
///
/// # Errors
///
/// - [`AtomError::ConstructionType`] if `expr` is not an additive link.
/// - [`AtomError::InvariantViolation`] if more than one numeric child is
///   present. Never silently tolerated.
pub fn reorder(expr: &Handle) -> Result<Handle, AtomError> {
    if !expr.kind().is_a(AtomType::Plus) {
        return Err(AtomError::ConstructionType {
            expected: AtomType::Plus,
            found: expr.kind(),
        });
    }
    let children = expr.outgoing().unwrap_or(&[]);

    let mut vars = OutgoingSet::new();
    let mut exprs = OutgoingSet::new();
    let mut numbers = OutgoingSet::new();

    for child in children {
        if child.kind() == AtomType::Variable {
            vars.push(child.clone());
        } else if child.is_number() {
            numbers.push(child.clone());
        } else {
            exprs.push(child.clone());
        }
    }

    if numbers.len() > 1 {
        return Err(AtomError::InvariantViolation(format!(
            "additive link holds {} numeric children; the fold pass must leave at most one",
            numbers.len()
        )));
    }

    let mut result = vars;
    result.extend(exprs);
    result.extend(numbers);
    Ok(Atom::plus(result))
}

/// Normalizes an additive expression. Pure: no store is consulted.
///
/// Runs a bounded rewrite loop: generic fold, canonical reorder, then a
/// pair scan for like terms. Each successful collapse strictly shrinks
/// the operand count, so the loop terminates in at most O(n) rounds of
/// O(n²) scans.
///
/// Atoms that do not fold to an additive link are returned unchanged.
///
/// # Errors
///
/// Propagates [`AtomError::InvariantViolation`] from [`reorder`] and any
/// construction error raised while rebuilding.
pub fn normalize(expr: &Handle) -> Result<Handle, AtomError> {
    let mut current = fold::<Additive>(expr)?;
    loop {
        if !current.kind().is_a(AtomType::Plus) {
            return Ok(current);
        }
        let reordered = reorder(&current)?;
        let children = reordered.outgoing().unwrap_or(&[]);

        let Some((i, j, replacement)) = collapse_step(children)? else {
            return Ok(reordered.clone());
        };

        let mut rebuilt: OutgoingSet = smallvec![replacement];
        for (k, child) in children.iter().enumerate() {
            if k != i && k != j {
                rebuilt.push(child.clone());
            }
        }
        current = Atom::plus(rebuilt);
        current = fold::<Additive>(&current)?;
    }
}

/// Normalizes and then interns the result when a store is supplied.
///
/// `store: None` is a legal, supported state: the freshly built atom is
/// returned unregistered.
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

/// Scans ordered pairs `(i, j)`, `i < j`, for the first like-term match.
///
/// Rules, in priority order at the first matching pair:
/// 1. `child[i]` equals `child[j]`: replace the pair with `child[i] * 2`.
/// 2. `child[j]` is a multiplicative link whose first factor equals
///    `child[i]`: replace the pair with `child[i] * (1 + rest)`, where
///    `rest` holds `child[j]`'s remaining factors and the sum is
///    normalized by this same engine.
///
/// Returns the matched indices and the replacement atom, or `None` when
/// no pair matches.
fn collapse_step(children: &[Handle]) -> Result<Option<(usize, usize, Handle)>, AtomError> {
    for i in 0..children.len() {
        for j in (i + 1)..children.len() {
            let fi = &children[i];
            let fj = &children[j];

            if fi == fj {
                let two = Atom::number("2");
                let replacement = Atom::times(smallvec![fi.clone(), two]);
                return Ok(Some((i, j, replacement)));
            }

            if fj.kind().is_a(AtomType::Times) {
                let factors = fj.outgoing().unwrap_or(&[]);
                if factors.first() == Some(fi) {
                    let mut rest: OutgoingSet = smallvec![Atom::number("1")];
                    rest.extend(factors[1..].iter().cloned());
                    let coefficient = normalize(&Atom::plus(rest))?;
                    let replacement = Atom::times(smallvec![fi.clone(), coefficient]);
                    return Ok(Some((i, j, replacement)));
                }
            }
        }
    }
    Ok(None)
}
