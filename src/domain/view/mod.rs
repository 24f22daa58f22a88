mod chunk;
mod owned;

pub use chunk::*;
pub use owned::*;

use crate::util::*;
use rayon::prelude::*;

pub trait DomainView<const GRID_DIMENSION: usize>: Sync {
    fn aabb(&self) -> &AABB<GRID_DIMENSION>;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]);

    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64;

    fn set_coord(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64);

    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = DomainChunk<'a, GRID_DIMENSION>> {
        let (aabb, buffer) = self.aabb_buffer_mut();
        par_modify_access_impl(buffer, aabb, chunk_size)
    }

    fn par_set_values<F: Fn(Coord<GRID_DIMENSION>) -> f64 + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size).for_each(
            |mut d: DomainChunk<'_, GRID_DIMENSION>| {
                d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                    *value_mut = f(world_coord);
                })
            },
        );
    }
}

/// Why not just put this into DomainView::par_modify_access?
/// Rust compiler can't figure out how to borrow aabb and buffer
/// at the same time in this way.
/// By putting their borrows into one function call first we work around it.
fn par_modify_access_impl<'a, const GRID_DIMENSION: usize>(
    buffer: &'a mut [f64],
    aabb: &'a AABB<GRID_DIMENSION>,
    chunk_size: usize,
) -> impl ParallelIterator<Item = DomainChunk<'a, GRID_DIMENSION>> + 'a {
    buffer[0..aabb.buffer_size()]
        .par_chunks_mut(chunk_size.max(1))
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size.max(1);
            DomainChunk::new(offset, aabb, buffer_chunk)
        })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn par_set_values_test() {
        for chunk_size in [1, 3, 7, 1000] {
            let bounds = AABB::new(matrix![0, 5; 0, 9]);
            let mut domain = OwnedDomain::new(bounds).unwrap();
            domain.par_set_values(|c| (c[0] * 100 + c[1]) as f64, chunk_size);
            for c in bounds.coord_iter() {
                assert_eq!(domain.view(&c), (c[0] * 100 + c[1]) as f64);
            }
        }
    }

    #[test]
    fn par_modify_access_covers_buffer() {
        let bounds = AABB::new(matrix![0, 4; 0, 4]);
        let mut domain = OwnedDomain::new(bounds).unwrap();
        let touched: usize = domain
            .par_modify_access(4)
            .map(|mut d| {
                d.coord_iter_mut().for_each(|(_, v)| *v += 1.0);
                d.len()
            })
            .sum();
        assert_eq!(touched, 25);
        assert!(domain.buffer().iter().all(|v| *v == 1.0));
    }
}
