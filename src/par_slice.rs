use crate::util::NumTrait;
use rayon::prelude::*;

/// Copy `src` into `dst`.
/// Each rayon task copies `chunk_size` elements.
pub fn copy<NumType: NumTrait>(
    dst: &mut [NumType],
    src: &[NumType],
    chunk_size: usize,
) {
    debug_assert_eq!(dst.len(), src.len());
    dst.par_chunks_mut(chunk_size)
        .zip(src.par_chunks(chunk_size))
        .for_each(|(d_chunk, s_chunk)| d_chunk.copy_from_slice(s_chunk));
}
