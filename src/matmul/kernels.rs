use crate::error::{Error, Result};
use crate::matmul::Matrix;
use crate::util::*;
use rayon::prelude::*;

fn check_shapes<NumType: NumTrait>(
    a: &Matrix<NumType>,
    b: &Matrix<NumType>,
    c: &Matrix<NumType>,
) -> Result<()> {
    for other in [b.size(), c.size()] {
        if other != a.size() {
            return Err(Error::ShapeMismatch {
                expected: a.size(),
                got: other,
            });
        }
    }
    Ok(())
}

/// `c = a * b` using the i-j-k loop order.
/// Each element is accumulated over `k` in increasing order,
/// so results match `naive_multiply` exactly.
/// Rows of `c` are split into tasks of `chunk_size` rows.
pub fn multiply_into<NumType: NumTrait>(
    a: &Matrix<NumType>,
    b: &Matrix<NumType>,
    c: &mut Matrix<NumType>,
    chunk_size: usize,
) -> Result<()> {
    check_shapes(a, b, c)?;
    profiling::scope!("matmul::multiply_into");
    let size = a.size();
    let chunk_size = chunk_size.max(1);
    let ab = a.buffer();
    let bb = b.buffer();
    c.buffer_mut()
        .par_chunks_mut(chunk_size * size)
        .enumerate()
        .for_each(|(chunk_index, c_chunk): (usize, &mut [NumType])| {
            profiling::scope!("matmul: Thread Callback");
            for (r, c_row) in c_chunk.chunks_exact_mut(size).enumerate() {
                let i = chunk_index * chunk_size + r;
                let a_row = &ab[i * size..(i + 1) * size];
                for (j, c_ij) in c_row.iter_mut().enumerate() {
                    let mut tmp = NumType::zero();
                    for (k, a_ik) in a_row.iter().enumerate() {
                        tmp = tmp + *a_ik * bb[k * size + j];
                    }
                    *c_ij = tmp;
                }
            }
        });
    Ok(())
}

/// Single threaded reference product.
pub fn naive_multiply<NumType: NumTrait>(
    a: &Matrix<NumType>,
    b: &Matrix<NumType>,
) -> Result<Matrix<NumType>> {
    let mut c = Matrix::new(a.size())?;
    check_shapes(a, b, &c)?;
    let size = a.size();
    for i in 0..size {
        for j in 0..size {
            let mut tmp = NumType::zero();
            for k in 0..size {
                tmp = tmp + a.get(i, k) * b.get(k, j);
            }
            c.set(i, j, tmp);
        }
    }
    Ok(c)
}
