//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::{LinalgError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::DEFAULT_TOLERANCE;
