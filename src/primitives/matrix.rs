//! Matrix type for 2D numeric data.

use std::fmt;
use std::ops::Index;

use super::Vector;
use crate::error::{rejected, LinalgError, Result, Shape};

/// A 2D matrix of `f64` values (row-major storage).
///
/// Element `(i, j)` lives at flat index `i * cols + j`. Every transforming
/// operation returns a new matrix; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Construction`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(rejected(LinalgError::Construction {
                rows,
                cols,
                len: data.len(),
            }));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRow`] naming the first row whose length
    /// differs from row 0.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(rejected(LinalgError::RaggedRow {
                row,
                len: r.len(),
                expected: cols,
            }));
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, data)
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; element_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    #[must_use]
    #[doc(alias = "eye")]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; element_count(n, n)];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col) via the flat index `row * cols + col`.
    ///
    /// # Panics
    ///
    /// Panics if the flat index is out of bounds. A column past `cols` on a
    /// row above the last one wraps into the next row, as raw row-major
    /// indexing does; use [`try_get`](Self::try_get) to reject it.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Gets element at (row, col), checking each index against its axis.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if `row >= rows` or `col >= cols`.
    pub fn try_get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows {
            return Err(rejected(LinalgError::IndexOutOfBounds {
                axis: 0,
                index: row,
                bound: self.rows,
            }));
        }
        if col >= self.cols {
            return Err(rejected(LinalgError::IndexOutOfBounds {
                axis: 1,
                index: col,
                bound: self.cols,
            }));
        }
        Ok(self.get(row, col))
    }

    /// Returns a row as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx >= rows`.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector {
        assert!(row_idx < self.rows, "row {row_idx} out of {}", self.rows);
        let start = row_idx * self.cols;
        Vector::from_slice(&self.data[start..start + self.cols])
    }

    /// Returns a column as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx >= cols`.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector {
        assert!(col_idx < self.cols, "column {col_idx} out of {}", self.cols);
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn dims(&self) -> Shape {
        Shape::Matrix(self.rows, self.cols)
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(rejected(LinalgError::ShapeMismatch {
                op,
                left: self.dims(),
                right: other.dims(),
            }));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-vector multiplication: `result[r] = Σᵢ self[r, i] * vector[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if `cols != vector.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::primitives::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    /// let v = Vector::from_slice(&[1.0, 1.0]);
    /// assert_eq!(m.apply(&v).expect("2 == 2").as_slice(), &[3.0, 7.0]);
    /// ```
    #[doc(alias = "matvec")]
    pub fn apply(&self, vector: &Vector) -> Result<Vector> {
        if self.cols != vector.len() {
            return Err(rejected(LinalgError::ShapeMismatch {
                op: "apply",
                left: self.dims(),
                right: vector.shape(),
            }));
        }
        log::trace!("apply {}x{} to [{}]", self.rows, self.cols, vector.len());

        let x = vector.as_slice();
        Ok((0..self.rows)
            .map(|r| {
                let row = &self.data[r * self.cols..(r + 1) * self.cols];
                row.iter().zip(x).map(|(a, b)| a * b).sum::<f64>()
            })
            .collect())
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if dimensions don't match.
    #[doc(alias = "sum")]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "sub")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix-matrix multiplication, `(m x k) * (k x n) = (m x n)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if `self.cols != other.rows`.
    #[doc(alias = "mul")]
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(rejected(LinalgError::ShapeMismatch {
                op: "matmul",
                left: self.dims(),
                right: other.dims(),
            }));
        }
        log::trace!(
            "matmul {}x{} * {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    #[doc(alias = "transport")]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns true if shapes match and every element is within `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

fn element_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols)
        .unwrap_or_else(|| panic!("{rows}x{cols} matrix overflows usize element count"))
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

/// One bracketed row per line, preceded by a newline.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
