use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This class is responsible for most indexing operations,
/// where we map between a linear buffer and coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Whether a contained coordinate sits on the outermost shell.
    pub fn on_border(&self, coord: &Coord<DIMENSION>) -> bool {
        debug_assert!(self.contains(coord));
        for d in 0..DIMENSION {
            if coord[d] == self.bounds[(d, 0)] || coord[d] == self.bounds[(d, 1)]
            {
                return true;
            }
        }
        false
    }

    /// Shrink every side by `width` cells.
    /// Used to find the interior that excludes a fixed border.
    pub fn shrink_by(&self, width: i32) -> Self {
        let mut result = *self;
        result
            .bounds
            .set_column(0, &self.bounds.column(0).add_scalar(width));
        result
            .bounds
            .set_column(1, &self.bounds.column(1).add_scalar(-width));
        result
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }

    /// Translate neighbor offsets into offsets in a linear buffer
    /// laid out by this instance.
    pub fn coord_offset_to_linear<const NEIGHBORHOOD_SIZE: usize>(
        &self,
        coord_offsets: &[Coord<DIMENSION>; NEIGHBORHOOD_SIZE],
    ) -> [isize; NEIGHBORHOOD_SIZE] {
        // highest dimension goes the fastest
        let exclusive_bounds = self.exclusive_bounds();
        let mut linear_offsets = [0; NEIGHBORHOOD_SIZE];
        let mut accumulator = 1;
        for d in (0..DIMENSION).rev() {
            for o in 0..NEIGHBORHOOD_SIZE {
                linear_offsets[o] += coord_offsets[o][d] as isize * accumulator;
            }
            accumulator *= exclusive_bounds[d] as isize;
        }

        linear_offsets
    }
}
