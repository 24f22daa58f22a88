use crate::error::{Error, Result};

/// Everything needed to set up and drive a plate run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LaplaceParameters {
    /// Interior rows, the border adds one on each side.
    pub rows: usize,
    /// Interior columns, the border adds one on each side.
    pub cols: usize,
    pub max_iterations: usize,
    /// Largest permitted change in temperature.
    pub tolerance: f64,
    /// Report progress every this many iterations, 0 disables reports.
    pub progress_period: usize,
    /// Interior rows per rayon task.
    pub chunk_size: usize,
}

impl Default for LaplaceParameters {
    fn default() -> Self {
        LaplaceParameters {
            rows: 1000,
            cols: 1000,
            max_iterations: 100,
            tolerance: 0.01,
            progress_period: 100,
            chunk_size: 1,
        }
    }
}

impl LaplaceParameters {
    /// Largest interior extent, the bordered extent must fit an `i32` coord.
    pub const MAX_EXTENT: i64 = i32::MAX as i64 - 2;

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value as u64 > Self::MAX_EXTENT as u64 {
                return Err(Error::InvalidDimension {
                    name,
                    value: i64::try_from(value).unwrap_or(i64::MAX),
                    max: Self::MAX_EXTENT,
                });
            }
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterations { value: 0 });
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidDimension {
                name: "chunk_size",
                value: 0,
                max: i64::MAX,
            });
        }
        Ok(())
    }
}
