use crate::domain::*;
use crate::error::{checked_extent, Result};
use crate::solver::LaplaceParameters;
use crate::util::*;

/// Bounding box of a plate with `rows` x `cols` interior cells
/// and a one cell border on every side.
pub fn plate_aabb(rows: usize, cols: usize) -> Result<AABB<2>> {
    let max = LaplaceParameters::MAX_EXTENT;
    let rows = checked_extent("rows", i64::try_from(rows).unwrap_or(i64::MAX), max)?;
    let cols = checked_extent("cols", i64::try_from(cols).unwrap_or(i64::MAX), max)?;
    Ok(AABB::new(matrix![0, rows as i32 + 1; 0, cols as i32 + 1]))
}

/// Double buffered temperature plate.
///
/// `previous` always holds the latest complete iteration,
/// `current` is scratch space the next update writes into.
/// Both buffers carry the same border values, so swapping them
/// never disturbs the boundary conditions.
pub struct LaplaceGrid {
    rows: usize,
    cols: usize,
    current: OwnedDomain<2>,
    previous: OwnedDomain<2>,
}

impl LaplaceGrid {
    /// Allocate the plate, zero the interior, and write border values from `bc`.
    /// `chunk_size` is the number of rows handed to each rayon task.
    pub fn new<BC: BCCheck<2>>(
        rows: usize,
        cols: usize,
        bc: &BC,
        chunk_size: usize,
    ) -> Result<Self> {
        let aabb = plate_aabb(rows, cols)?;
        let mut previous = OwnedDomain::new(aabb)?;
        let width = cols + 2;
        previous.par_set_values(
            |world_coord| bc.initial_value(&world_coord),
            chunk_size.max(1) * width,
        );
        let current = previous.try_clone()?;
        tracing::debug!(rows, cols, "plate initialized");
        Ok(LaplaceGrid {
            rows,
            cols,
            current,
            previous,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds including the border.
    pub fn aabb(&self) -> &AABB<2> {
        self.previous.aabb()
    }

    /// Bounds of the cells the stencil updates.
    pub fn interior(&self) -> AABB<2> {
        self.aabb().shrink_by(1)
    }

    /// The latest temperatures, border included.
    pub fn domain(&self) -> &OwnedDomain<2> {
        &self.previous
    }

    /// Latest temperature at `(row, col)`, border included.
    ///
    /// Panics when the cell lies outside `0..=rows + 1` x `0..=cols + 1`.
    #[track_caller]
    pub fn temperature(&self, row: usize, col: usize) -> f64 {
        assert!(
            row <= self.rows + 1 && col <= self.cols + 1,
            "cell ({}, {}) outside {} x {} plate with border",
            row,
            col,
            self.rows + 2,
            self.cols + 2
        );
        self.previous.view(&vector![row as i32, col as i32])
    }

    /// Latest values to read from, and the scratch buffer to write into.
    pub(crate) fn split_mut(&mut self) -> (&OwnedDomain<2>, &mut OwnedDomain<2>) {
        (&self.previous, &mut self.current)
    }

    /// Promote the scratch buffer to the latest iteration.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::error::Error;
    use float_cmp::assert_approx_eq;

    #[test]
    fn plate_aabb_test() {
        let aabb = plate_aabb(10, 20).unwrap();
        assert_eq!(aabb, AABB::new(matrix![0, 11; 0, 21]));
        assert_eq!(aabb.buffer_size(), 12 * 22);
        assert!(matches!(
            plate_aabb(0, 20),
            Err(Error::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            plate_aabb(3, 0),
            Err(Error::InvalidDimension { name: "cols", .. })
        ));
        assert!(plate_aabb(i32::MAX as usize, 3).is_err());
    }

    #[test]
    fn initialize_plate_test() {
        for chunk_size in [1, 2, 100] {
            let bc = PlateCheck::new(4, 5);
            let grid = LaplaceGrid::new(4, 5, &bc, chunk_size).unwrap();
            assert_eq!(grid.rows(), 4);
            assert_eq!(grid.cols(), 5);
            assert_eq!(grid.interior(), AABB::new(matrix![1, 4; 1, 5]));

            for c in grid.interior().coord_iter() {
                assert_eq!(grid.domain().view(&c), 0.0);
            }
            for row in 0..=5 {
                assert_eq!(grid.temperature(row, 0), 0.0);
            }
            for row in 1..=4 {
                assert_approx_eq!(
                    f64,
                    grid.temperature(row, 6),
                    25.0 * row as f64
                );
            }
            for col in 0..=6 {
                assert_eq!(grid.temperature(0, col), 0.0);
                assert_approx_eq!(
                    f64,
                    grid.temperature(5, col),
                    20.0 * col as f64
                );
            }
        }
    }

    #[test]
    fn both_buffers_share_border() {
        let bc = PlateCheck::new(3, 3);
        let mut grid = LaplaceGrid::new(3, 3, &bc, 1).unwrap();
        let before: Vec<f64> = grid.domain().buffer().to_vec();
        grid.swap();
        assert_eq!(grid.domain().buffer(), &before[..]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn temperature_rejects_column_past_border() {
        let grid = LaplaceGrid::new(3, 4, &PlateCheck::new(3, 4), 1).unwrap();
        assert_eq!(grid.temperature(1, 5), 100.0 / 3.0);
        grid.temperature(1, 6);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn temperature_rejects_row_past_border() {
        let grid = LaplaceGrid::new(3, 4, &PlateCheck::new(3, 4), 1).unwrap();
        grid.temperature(5, 0);
    }
}
