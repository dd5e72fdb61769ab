//! Vector type for 1D numeric data.

use std::fmt;
use std::ops::Index;

use crate::error::{rejected, LinalgError, Result, Shape};

/// A fixed-length vector of `f64` values.
///
/// Every operation returns a new vector; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = Vector::from_slice(&[4.0, 2.0, 2.0]);
/// let c = a.add(&b).expect("equal lengths");
/// assert_eq!(c.as_slice(), &[5.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector of zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Creates a vector of ones.
    #[must_use]
    pub fn ones(len: usize) -> Self {
        Self {
            data: vec![1.0; len],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    /// Gets element at `i`, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if `i >= len()`.
    pub fn try_get(&self, i: usize) -> Result<f64> {
        self.data.get(i).copied().ok_or_else(|| {
            rejected(LinalgError::IndexOutOfBounds {
                axis: 0,
                index: i,
                bound: self.data.len(),
            })
        })
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the vector and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub(crate) fn shape(&self) -> Shape {
        Shape::Vector(self.data.len())
    }

    fn check_same_len(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(rejected(LinalgError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            }));
        }
        Ok(())
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the lengths differ.
    #[doc(alias = "sum")]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other, "add")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect())
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other, "sub")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect())
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.data.iter().map(|x| x * scalar).collect()
    }

    /// Computes the dot product `Σ aᵢ·bᵢ`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_same_len(other, "dot")?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// Computes the right-handed cross product of two 3D vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] unless both operands have length 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::primitives::Vector;
    ///
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y).expect("3D").as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.len() != 3 || other.len() != 3 {
            return Err(rejected(LinalgError::Dimension {
                op: "cross",
                expected: 3,
                left: self.len(),
                right: other.len(),
            }));
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Euclidean norm, `sqrt(Σ xᵢ²)`. Zero for an empty or all-zero vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Divides every element by [`norm`](Self::norm).
    ///
    /// A zero vector is not guarded: each element becomes `0.0 / 0.0`, i.e. `NaN`.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        self.data.iter().map(|x| x / n).collect()
    }

    /// Returns true if lengths match and every component is within `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
