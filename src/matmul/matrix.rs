use crate::error::{Error, Result};
use crate::par_slice;
use crate::util::*;
use num_traits::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::prelude::*;
use rayon::prelude::*;
use std::io::Write;

/// Square, row major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<NumType> {
    size: usize,
    buffer: Vec<NumType>,
}

impl<NumType: NumTrait> Matrix<NumType> {
    /// Allocate a zeroed `size` x `size` matrix.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimension {
                name: "size",
                value: 0,
                max: i64::MAX,
            });
        }
        let n = size
            .checked_mul(size)
            .filter(|n| n.checked_mul(std::mem::size_of::<NumType>()).is_some())
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(n).map_err(|_| Error::OutOfMemory {
            size: n * std::mem::size_of::<NumType>(),
        })?;
        buffer.resize(n, NumType::zero());
        Ok(Matrix { size, buffer })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn buffer(&self) -> &[NumType] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [NumType] {
        &mut self.buffer
    }

    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> NumType {
        debug_assert!(row < self.size && col < self.size);
        self.buffer[row * self.size + col]
    }

    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: NumType) {
        debug_assert!(row < self.size && col < self.size);
        self.buffer[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[NumType] {
        &self.buffer[row * self.size..(row + 1) * self.size]
    }

    /// Fallible deep copy, allocated the same way as `new`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut result = Matrix::new(self.size)?;
        result.copy_from(self, 1)?;
        Ok(result)
    }

    /// Overwrite with the contents of `other`.
    pub fn copy_from(&mut self, other: &Self, chunk_size: usize) -> Result<()> {
        if other.size != self.size {
            return Err(Error::ShapeMismatch {
                expected: self.size,
                got: other.size,
            });
        }
        profiling::scope!("matrix::copy_from");
        par_slice::copy(
            &mut self.buffer,
            &other.buffer,
            chunk_size.max(1) * self.size,
        );
        Ok(())
    }

    /// Every element of row `i` becomes `i`.
    /// Fails when some row index cannot be converted to `NumType`.
    pub fn fill_row_index(&mut self, chunk_size: usize) -> Result<()>
    where
        NumType: FromPrimitive,
    {
        let size = self.size;
        let chunk_size = chunk_size.max(1);
        self.buffer
            .par_chunks_mut(chunk_size * size)
            .enumerate()
            .try_for_each(|(chunk_index, chunk): (usize, &mut [NumType])| {
                for (r, row) in chunk.chunks_exact_mut(size).enumerate() {
                    let i = chunk_index * chunk_size + r;
                    let value = NumType::from_usize(i)
                        .ok_or(Error::Unrepresentable { value: i })?;
                    for v in row {
                        *v = value;
                    }
                }
                Ok(())
            })
    }

    /// Uniform random values from the thread local generator.
    pub fn fill_random(&mut self, chunk_size: usize)
    where
        Standard: Distribution<NumType>,
    {
        let size = self.size;
        self.buffer
            .par_chunks_mut(chunk_size.max(1) * size)
            .for_each(|chunk: &mut [NumType]| {
                let mut rng = rand::thread_rng();
                for v in chunk {
                    *v = rng.gen();
                }
            });
    }

    /// Dump every element as `arr[i][j]=value`.
    pub fn show<W: Write>(&self, writer: &mut W) -> std::io::Result<()>
    where
        NumType: std::fmt::Display,
    {
        for i in 0..self.size {
            for j in 0..self.size {
                writeln!(writer, "arr[{}][{}]={:.6} ", i, j, self.get(i, j))?;
            }
        }
        Ok(())
    }
}
