//! Core compute primitives (Vector, Matrix).
//!
//! Both types are immutable values: every operation borrows its operands
//! and returns a freshly allocated result.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

#[cfg(test)]
mod tests_matrix_contract;
