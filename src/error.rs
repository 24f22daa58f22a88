//! Error types for plate

use thiserror::Error;

/// Result type alias using plate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or setting up a run.
/// The numeric kernels themselves cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A grid or matrix extent was zero, negative, or too large to index
    #[error("Invalid {name} ({value}): must be between 1 and {max}")]
    InvalidDimension {
        /// Which extent was rejected
        name: &'static str,
        /// The value supplied
        value: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Iteration count was not positive
    #[error("Invalid nIter ({value}): must be positive")]
    InvalidIterations {
        /// The value supplied
        value: i64,
    },

    /// Tolerance was negative or not a number
    #[error("Invalid tolerance ({value}): must be a non-negative number")]
    InvalidTolerance {
        /// The value supplied
        value: f64,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Operands of a matrix operation do not agree
    #[error("Shape mismatch: expected {expected}x{expected}, got {got}x{got}")]
    ShapeMismatch {
        /// Expected side length
        expected: usize,
        /// Actual side length
        got: usize,
    },

    /// A row index has no exact counterpart in the element type
    #[error("Row index {value} is not representable in the matrix element type")]
    Unrepresentable {
        /// The index that failed to convert
        value: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Convert a user supplied extent into a `usize`,
/// rejecting values outside `1..=max`.
pub fn checked_extent(name: &'static str, value: i64, max: i64) -> Result<usize> {
    if value < 1 || value > max {
        return Err(Error::InvalidDimension { name, value, max });
    }
    Ok(value as usize)
}
