//! Elementwise and scalar-broadcast float vector arithmetic.
//!
//! These operators back the numeric side of fold reduction. They are pure:
//! every call allocates a fresh [`FloatVector`] and never mutates its
//! inputs. Elementwise operators truncate to the shorter operand — no
//! padding, no length error. Division by zero and NaN follow IEEE 754
//! semantics with no special casing.

/// A transient vector of doubles.
///
/// Produced by the arithmetic helpers below. A `FloatVector` is never
/// interned and is never an atom; it only exists to carry intermediate
/// numeric results until a caller turns it into a numeric leaf.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloatVector {
    values: Vec<f64>,
}

impl FloatVector {
    /// Creates a vector from raw values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the underlying values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the vector, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for FloatVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Scalar-broadcast addition: `scalar + v[i]` for every element.
#[must_use]
pub fn scalar_add(scalar: f64, v: &[f64]) -> FloatVector {
    FloatVector::new(v.iter().map(|x| scalar + x).collect())
}

/// Scalar-broadcast multiplication: `scalar * v[i]` for every element.
#[must_use]
pub fn scalar_mul(scalar: f64, v: &[f64]) -> FloatVector {
    FloatVector::new(v.iter().map(|x| scalar * x).collect())
}

/// Scalar-broadcast division: `scalar / v[i]` for every element.
///
/// The scalar is the left operand; this is *not* `v[i] / scalar`.
#[must_use]
pub fn scalar_div(scalar: f64, v: &[f64]) -> FloatVector {
    FloatVector::new(v.iter().map(|x| scalar / x).collect())
}

/// Elementwise addition over the overlap of `a` and `b`.
#[must_use]
pub fn add(a: &[f64], b: &[f64]) -> FloatVector {
    FloatVector::new(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise multiplication over the overlap of `a` and `b`.
#[must_use]
pub fn mul(a: &[f64], b: &[f64]) -> FloatVector {
    FloatVector::new(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// Elementwise division over the overlap of `a` and `b`.
#[must_use]
pub fn div(a: &[f64], b: &[f64]) -> FloatVector {
    FloatVector::new(a.iter().zip(b).map(|(x, y)| x / y).collect())
}
