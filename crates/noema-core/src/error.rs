//! Error taxonomy for atom construction and reduction.

use thiserror::Error;

use crate::types::AtomType;

/// Errors raised by atom construction and reduction.
///
/// Construction errors are checked eagerly: no partially built atom ever
/// escapes. Invariant violations signal a defect in a collaborator and are
/// propagated to the caller, never swallowed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AtomError {
    /// An atom was constructed with a type outside the expected family.
    #[error("expected a type in the {expected:?} family, got {found:?}")]
    ConstructionType {
        /// The family the constructor requires.
        expected: AtomType,
        /// The type actually supplied.
        found: AtomType,
    },

    /// An internal invariant did not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
