//! Error types for lineal operations.
//!
//! Every failure carries the dimensions of both operands so callers can
//! diagnose a mismatch without re-inspecting their inputs.

use std::fmt;

use thiserror::Error;

/// Dimensions of an operand as reported in errors.
///
/// Matrices report `rows x cols`; vectors report their length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A matrix with `(rows, cols)`.
    Matrix(usize, usize),
    /// A vector with the given length.
    Vector(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Matrix(rows, cols) => write!(f, "{rows}x{cols}"),
            Shape::Vector(len) => write!(f, "[{len}]"),
        }
    }
}

/// Main error type for lineal operations.
///
/// # Examples
///
/// ```
/// use lineal::error::{LinalgError, Shape};
///
/// let err = LinalgError::ShapeMismatch {
///     op: "matmul",
///     left: Shape::Matrix(2, 3),
///     right: Shape::Matrix(2, 2),
/// };
/// assert!(err.to_string().contains("2x3"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("shape mismatch in {op}: left operand is {left}, right operand is {right}")]
    ShapeMismatch {
        /// Operation that rejected the operands
        op: &'static str,
        /// Shape of the receiver
        left: Shape,
        /// Shape of the argument
        right: Shape,
    },

    /// Declared matrix dimensions do not match the supplied data.
    #[error("cannot build {rows}x{cols} matrix from {len} elements")]
    Construction {
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
        /// Number of elements actually supplied
        len: usize,
    },

    /// Operation is only defined for a fixed vector dimension.
    #[error("{op} is only defined for {expected}-dimensional vectors, got {left} and {right}")]
    Dimension {
        /// Operation that rejected the operands
        op: &'static str,
        /// Required dimension
        expected: usize,
        /// Length of the receiver
        left: usize,
        /// Length of the argument
        right: usize,
    },

    /// A row passed to `from_rows` differs in length from the first row.
    #[error("ragged rows: row {row} has {len} elements, expected {expected}")]
    RaggedRow {
        /// Index of the first offending row
        row: usize,
        /// Length of that row
        len: usize,
        /// Length of row 0
        expected: usize,
    },

    /// Checked element access fell outside the container.
    #[error("index {index} out of bounds for axis {axis} with length {bound}")]
    IndexOutOfBounds {
        /// Axis of the offending index (0 = rows or vector, 1 = columns)
        axis: usize,
        /// Offending index
        index: usize,
        /// Exclusive upper bound
        bound: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Logs a rejected operation and hands the error back.
pub(crate) fn rejected(err: LinalgError) -> LinalgError {
    log::debug!("rejected: {err}");
    err
}
