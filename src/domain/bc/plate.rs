use crate::domain::bc::BCCheck;
use crate::util::*;

/// Boundary of the heated plate.
///
/// ```text
///      0         0         0
///   0  +-------------------+  0
///      |                   |
///   0  |                   |  T
///      |                   |
///   0  +-------------------+ 100
///      0         T        100
/// ```
///
/// The left and top edges are held at 0.
/// The right edge ramps as `(100 / rows) * row`,
/// the bottom edge ramps as `(100 / cols) * col`.
/// Corners shared by a column edge and a row edge take the row edge value,
/// the row edges are written last when the plate is set up by hand.
/// For a non-square plate this makes the bottom right corner
/// `100 * (cols + 1) / cols` rather than `100 * (rows + 1) / rows`.
pub struct PlateCheck {
    rows: usize,
    cols: usize,
}

impl PlateCheck {
    pub const EDGE_TEMPERATURE: f64 = 100.0;

    /// `rows` and `cols` count interior cells only.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        PlateCheck { rows, cols }
    }

    fn right(&self, row: i32) -> f64 {
        (Self::EDGE_TEMPERATURE / self.rows as f64) * row as f64
    }

    fn bottom(&self, col: i32) -> f64 {
        (Self::EDGE_TEMPERATURE / self.cols as f64) * col as f64
    }
}

impl BCCheck<2> for PlateCheck {
    fn check(&self, coord: &Coord<2>) -> Option<f64> {
        let (row, col) = (coord[0], coord[1]);
        let last_row = self.rows as i64 + 1;
        let last_col = self.cols as i64 + 1;
        if row == 0 {
            Some(0.0)
        } else if row as i64 == last_row {
            Some(self.bottom(col))
        } else if col == 0 {
            Some(0.0)
        } else if col as i64 == last_col {
            Some(self.right(row))
        } else {
            None
        }
    }
}
