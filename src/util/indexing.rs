use crate::util::*;

pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    let mut accumulator = 1;
    for d in exclusive_bound {
        accumulator *= *d as usize;
    }
    accumulator
}

/// Row major, the last dimension moves fastest.
pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        accumulator = accumulator * exclusive_bounds[d] as usize
            + coord[d] as usize;
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zeros();
    let mut index_accumulator = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (index_accumulator % extent) as i32;
        index_accumulator /= extent;
    }
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        assert_eq!(real_buffer_size(&vector![5]), 5);
        assert_eq!(real_buffer_size(&vector![12, 12]), 144);
        assert_eq!(real_buffer_size(&vector![5, 7, 9]), 5 * 7 * 9);
    }

    #[test]
    fn coord_to_linear_index_test() {
        {
            let index = vector![5, 7, 11];
            let bound = vector![20, 20, 20];
            assert_eq!(
                coord_to_linear(&index, &bound),
                5 * 20 * 20 + 7 * 20 + 11
            );
        }

        {
            let index = vector![3, 7];
            let bound = vector![6, 12];
            assert_eq!(coord_to_linear(&index, &bound), 3 * 12 + 7);
        }

        {
            let index = vector![5];
            let bound = vector![20];
            assert_eq!(coord_to_linear(&index, &bound), 5);
        }
    }

    #[test]
    fn linear_to_coord_test() {
        {
            let bound = vector![10, 10];
            assert_eq!(linear_to_coord(67, &bound), vector![6, 7]);
        }

        {
            let bound = vector![100];
            assert_eq!(linear_to_coord(67, &bound), vector![67]);
        }

        {
            let bound = vector![4, 12];
            for i in 0..48 {
                let c = linear_to_coord(i, &bound);
                assert_eq!(coord_to_linear(&c, &bound), i);
            }
        }
    }
}
