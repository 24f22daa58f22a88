use crate::util::*;

/// A contiguous piece of a domain buffer handed to one rayon task.
/// `offset` is the linear index of the first value in `buffer`.
pub struct DomainChunk<'a, const GRID_DIMENSION: usize> {
    offset: usize,
    aabb: &'a AABB<GRID_DIMENSION>,
    buffer: &'a mut [f64],
}

impl<'a, const GRID_DIMENSION: usize> DomainChunk<'a, GRID_DIMENSION> {
    pub fn new(
        offset: usize,
        aabb: &'a AABB<GRID_DIMENSION>,
        buffer: &'a mut [f64],
    ) -> Self {
        DomainChunk {
            offset,
            aabb,
            buffer,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<GRID_DIMENSION>, &mut f64)> {
        let offset = self.offset;
        let aabb = self.aabb;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut f64)| {
                let coord = aabb.linear_to_coord(offset + i);
                (coord, v)
            })
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn coord_iter_mut_test() {
        let aabb = AABB::new(matrix![0, 2; 0, 3]);
        let mut buffer = vec![0.0; 5];
        let mut chunk = DomainChunk::new(5, &aabb, &mut buffer);
        assert_eq!(chunk.offset(), 5);
        assert_eq!(chunk.len(), 5);
        for (coord, value) in chunk.coord_iter_mut() {
            *value = (10 * coord[0] + coord[1]) as f64;
        }
        assert_eq!(buffer, vec![11.0, 12.0, 13.0, 20.0, 21.0]);
    }
}
