//! Lineal: dense row-major matrices and vectors in pure Rust.
//!
//! Lineal provides two immutable value types with shape-checked
//! arithmetic. Every operation borrows its operands, validates their
//! dimensions up front, and returns a new value or a [`LinalgError`]
//! naming both operand shapes.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_vec(3, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//!     7.0, 8.0, 9.0,
//! ]).unwrap();
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
//!
//! let y = a.apply(&x).unwrap();
//! assert_eq!(y.as_slice(), &[14.0, 32.0, 50.0]);
//!
//! // Shape errors are returned, never coerced
//! assert!(a.matmul(&Matrix::zeros(2, 2)).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error type and result alias
//!
//! # Logging
//!
//! Rejected operations are reported at `debug` level and multiplication
//! shapes at `trace` level through the [`log`] facade. No logger is
//! installed by the library.

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{LinalgError, Result};

/// Tolerance used when comparing results of derived floating-point
/// operations, e.g. with [`Matrix::approx_eq`](primitives::Matrix::approx_eq).
pub const DEFAULT_TOLERANCE: f64 = 1e-8;
