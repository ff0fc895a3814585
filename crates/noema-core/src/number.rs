//! Canonical numeric leaves.
//!
//! A numeric leaf holds a vector of doubles, and its name is always the
//! canonical serialization of that vector — never the text a caller passed
//! in. Construction from text re-parses and re-serializes, so two leaves
//! built from differently formatted but numerically equal text are
//! byte-identical and hash-cons to the same atom.
//!
//! The scanner accepts runs of digits and `.` only. It does not read sign
//! or exponent characters: `"-1.5"` parses as `1.5` and `"1e10"` parses as
//! the two numbers `1` and `10`. Downstream data depends on this exact
//! behavior, so it is kept as-is.

use std::fmt::Write;
use std::sync::Arc;

use crate::atom::{Atom, Handle};
use crate::error::AtomError;
use crate::types::AtomType;
use crate::vector::FloatVector;

/// Parses every numeric substring out of `text`, left to right.
///
/// At each run of characters drawn from `0-9.`, the longest prefix that
/// forms a valid double is consumed and appended; scanning resumes past
/// the consumed characters. Text with no numeric run yields an empty
/// vector — a permissive parse, never an error. A run with no digit at
/// all (bare dots) is skipped.
#[must_use]
pub fn parse(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos..]
            .iter()
            .position(|b| b.is_ascii_digit() || *b == b'.')
        {
            Some(offset) => pos += offset,
            None => break,
        }

        // Longest valid double prefix: digits, at most one dot, digits.
        let start = pos;
        let mut seen_dot = false;
        let mut seen_digit = false;
        while pos < bytes.len() {
            let b = bytes[pos];
            if b.is_ascii_digit() {
                seen_digit = true;
            } else if b == b'.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
            pos += 1;
        }

        if seen_digit {
            if let Ok(v) = text[start..pos].parse::<f64>() {
                values.push(v);
            }
        }
    }

    values
}

/// Serializes a float vector to its canonical plain-text form.
///
/// Each element is rendered with the shortest round-trip representation,
/// space-separated, with a trailing separator after the last element.
#[must_use]
pub fn serialize(values: &[f64]) -> String {
    let mut out = String::new();
    for v in values {
        // Writing to a String cannot fail.
        let _ = write!(out, "{v} ");
    }
    out
}

impl Atom {
    /// Creates a numeric leaf from arbitrary text.
    ///
    /// The text is scanned with [`parse`] and the leaf's name is derived
    /// by [`serialize`], never taken verbatim.
    #[must_use]
    pub fn number(text: &str) -> Handle {
        Atom::number_from_values(parse(text))
    }

    /// Creates a numeric leaf from text with an explicit type tag.
    ///
    /// # Errors
    ///
    /// Returns [`AtomError::ConstructionType`] if `kind` is outside the
    /// `Number` family.
    pub fn number_with_type(kind: AtomType, text: &str) -> Result<Handle, AtomError> {
        if !kind.is_a(AtomType::Number) {
            return Err(AtomError::ConstructionType {
                expected: AtomType::Number,
                found: kind,
            });
        }
        Ok(Atom::number(text))
    }

    /// Creates a numeric leaf from raw values.
    #[must_use]
    pub fn number_from_values(value: Vec<f64>) -> Handle {
        let name = serialize(&value);
        Arc::new(Atom::Number { value, name })
    }

    /// Creates a numeric leaf from a transient [`FloatVector`].
    #[must_use]
    pub fn number_from_vector(fv: &FloatVector) -> Handle {
        Atom::number_from_values(fv.values().to_vec())
    }

    /// Reinterprets an existing leaf atom as a numeric leaf.
    ///
    /// The leaf's name is re-parsed; the result carries the canonical
    /// serialization, whatever the original spelling was.
    ///
    /// # Errors
    ///
    /// Returns [`AtomError::ConstructionType`] if the atom's type is
    /// outside the `Number` family.
    pub fn number_from_node(atom: &Handle) -> Result<Handle, AtomError> {
        if !atom.kind().is_a(AtomType::Number) {
            return Err(AtomError::ConstructionType {
                expected: AtomType::Number,
                found: atom.kind(),
            });
        }
        Ok(Atom::number(atom.name().unwrap_or_default()))
    }
}
