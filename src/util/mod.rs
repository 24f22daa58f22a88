pub use nalgebra::{matrix, vector};
pub use num_traits::{Num, One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;

/// Element type for buffers that are shared across rayon tasks.
pub trait NumTrait: Num + Copy + Send + Sync {}

impl<T: Num + Copy + Send + Sync> NumTrait for T {}

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Column 0 holds the min corner, column 1 the max corner.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;
