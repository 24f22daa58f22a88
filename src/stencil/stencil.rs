use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zeros();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// We view linear stencils as a combination of neighbor offsets and weights.
pub struct Stencil<const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
{
    weights: Values<NEIGHBORHOOD_SIZE>,
    offsets: [Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE],
}

impl<const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
    Stencil<GRID_DIMENSION, NEIGHBORHOOD_SIZE>
{
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [[i32; GRID_DIMENSION]; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            weights,
        }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// Weighted sum of the neighbor values, accumulated in offset order.
    #[inline]
    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        let mut result = 0.0;
        for n in 0..NEIGHBORHOOD_SIZE {
            result += self.weights[n] * args[n];
        }
        result
    }
}
