use crate::solver::LaplaceGrid;
use std::io::Write;

/// Observer invoked periodically while a run is in progress.
/// Reporters only get shared access and cannot change the plate.
pub trait ProgressReporter {
    fn report(&mut self, iteration: usize, grid: &LaplaceGrid);
}

/// Ignore progress.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _iteration: usize, _grid: &LaplaceGrid) {}
}

/// Print the diagonal just inside the bottom right corner,
/// the region where the plate changes the most.
pub struct DiagonalProgress<W: Write> {
    writer: W,
}

impl<W: Write> DiagonalProgress<W> {
    /// Number of diagonal cells in each report.
    pub const SAMPLES: usize = 6;

    pub fn new(writer: W) -> Self {
        DiagonalProgress { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_report(
        &mut self,
        iteration: usize,
        grid: &LaplaceGrid,
    ) -> std::io::Result<()> {
        // Non square plates sample along the shorter side.
        let n = grid.rows().min(grid.cols());
        let first = n.saturating_sub(Self::SAMPLES - 1).max(1);
        writeln!(
            self.writer,
            "---------- Iteration number: {} ------------",
            iteration
        )?;
        for i in first..=n {
            write!(self.writer, "[{},{}]: {:5.2}  ", i, i, grid.temperature(i, i))?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> ProgressReporter for DiagonalProgress<W> {
    fn report(&mut self, iteration: usize, grid: &LaplaceGrid) {
        if let Err(e) = self.write_report(iteration, grid) {
            tracing::warn!(error = %e, iteration, "failed to write progress report");
        }
    }
}
