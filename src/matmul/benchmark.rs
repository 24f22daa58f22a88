use crate::error::{Error, Result};
use crate::matmul::{multiply_into, Matrix};

/// How the operand matrices are filled before timing starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixInit {
    /// `A[i][j] = i`
    RowIndex,
    /// Uniform in `[0, 1)`
    Random,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatMulParameters {
    pub size: usize,
    pub iterations: usize,
    /// Rows of the product per rayon task.
    pub chunk_size: usize,
    pub init: MatrixInit,
}

impl MatMulParameters {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidDimension {
                name: "size",
                value: 0,
                max: i64::MAX,
            });
        }
        if self.iterations == 0 {
            return Err(Error::InvalidIterations { value: 0 });
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

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatMulSummary {
    pub iterations: usize,
}

/// Repeatedly multiply `A * B`, restoring one operand from a snapshot
/// after every product: `A` after odd iterations, `B` after even ones.
pub struct MatMulBenchmark {
    params: MatMulParameters,
    a: Matrix<f32>,
    b: Matrix<f32>,
    c: Matrix<f32>,
    a_snapshot: Matrix<f32>,
    b_snapshot: Matrix<f32>,
}

impl MatMulBenchmark {
    /// Validate, allocate and fill every matrix.
    pub fn new(params: MatMulParameters) -> Result<Self> {
        params.validate()?;
        let mut a = Matrix::new(params.size)?;
        let mut b = Matrix::new(params.size)?;
        match params.init {
            MatrixInit::RowIndex => {
                a.fill_row_index(params.chunk_size)?;
                b.fill_row_index(params.chunk_size)?;
            }
            MatrixInit::Random => {
                a.fill_random(params.chunk_size);
                b.fill_random(params.chunk_size);
            }
        }
        let c = Matrix::new(params.size)?;
        let a_snapshot = a.try_clone()?;
        let b_snapshot = b.try_clone()?;
        tracing::debug!(size = params.size, init = ?params.init, "matrices ready");
        Ok(MatMulBenchmark {
            params,
            a,
            b,
            c,
            a_snapshot,
            b_snapshot,
        })
    }

    pub fn a(&self) -> &Matrix<f32> {
        &self.a
    }

    pub fn b(&self) -> &Matrix<f32> {
        &self.b
    }

    pub fn c(&self) -> &Matrix<f32> {
        &self.c
    }

    pub fn run(&mut self) -> Result<MatMulSummary> {
        profiling::scope!("matmul_benchmark: run");
        tracing::info!(
            size = self.params.size,
            iterations = self.params.iterations,
            "starting matmul benchmark"
        );
        let chunk_size = self.params.chunk_size;
        for i in 0..self.params.iterations {
            multiply_into(&self.a, &self.b, &mut self.c, chunk_size)?;
            if i % 2 == 1 {
                self.a.copy_from(&self.a_snapshot, chunk_size)?;
            } else {
                self.b.copy_from(&self.b_snapshot, chunk_size)?;
            }
            profiling::finish_frame!();
        }
        tracing::info!(iterations = self.params.iterations, "matmul benchmark finished");
        Ok(MatMulSummary {
            iterations: self.params.iterations,
        })
    }
}
