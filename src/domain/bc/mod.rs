mod constant;
mod plate;

pub use constant::*;
pub use plate::*;

use crate::util::*;

/// Boundary conditions live in the outer shell of a domain.
/// `check` returns the fixed value for border coordinates,
/// and `None` for cells the stencil is allowed to update.
pub trait BCCheck<const GRID_DIMENSION: usize>: Sync {
    fn check(&self, world_coord: &Coord<GRID_DIMENSION>) -> Option<f64>;

    /// Value used when seeding a domain, interior cells start at zero.
    fn initial_value(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64 {
        self.check(world_coord).unwrap_or(0.0)
    }
}
