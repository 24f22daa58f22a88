use super::*;
use crate::error::{Error, Result};
use crate::util::*;

/// A domain that owns its buffer.
pub struct OwnedDomain<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f64>,
}

impl<const GRID_DIMENSION: usize> OwnedDomain<GRID_DIMENSION> {
    /// Allocate a zeroed domain covering `aabb`.
    /// Allocation failure is reported instead of aborting,
    /// large plates are a realistic way to run out of memory.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Result<Self> {
        let n = aabb.buffer_size();
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(n).map_err(|_| Error::OutOfMemory {
            size: n.saturating_mul(std::mem::size_of::<f64>()),
        })?;
        buffer.resize(n, 0.0);
        Ok(OwnedDomain { aabb, buffer })
    }

    /// Allocate a new domain holding a copy of `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut result = Self::new(self.aabb)?;
        result.buffer.copy_from_slice(&self.buffer);
        Ok(result)
    }
}

impl<const GRID_DIMENSION: usize> DomainView<GRID_DIMENSION>
    for OwnedDomain<GRID_DIMENSION>
{
    fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]) {
        (&self.aabb, &mut self.buffer)
    }

    #[track_caller]
    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64 {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64) {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index] = value;
    }
}
