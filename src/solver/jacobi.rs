use crate::domain::*;
use crate::solver::{LaplaceGrid, ProgressReporter};
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;

/// Error reported before the first step, guarantees the loop is entered
/// for any tolerance below it.
pub const INITIAL_MAX_DELTA: f64 = 100.0;

pub const DEFAULT_PROGRESS_PERIOD: usize = 100;

/// How a run ended. Both are normal outcomes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    /// The largest change dropped to the tolerance or below.
    Converged,
    /// The iteration cap was reached first.
    BudgetExhausted,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunSummary {
    pub state: RunState,
    /// Loop counter on exit. Counting starts at 1,
    /// so a run that never stepped reports 1.
    pub iteration: usize,
    /// Largest change seen in the final step,
    /// or `INITIAL_MAX_DELTA` if no step ran.
    pub max_delta: f64,
}

impl RunSummary {
    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.iteration - 1
    }
}

/// Apply `stencil` to every interior cell of `input`, writing into `output`.
/// Border cells of `output` are left untouched.
/// Returns the largest absolute change between `input` and `output`.
///
/// Work is split into tasks of `chunk_size` interior rows.
/// Reads only come from `input`, so the result does not depend on
/// the order cells are visited in.
pub fn jacobi_step<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<2, NEIGHBORHOOD_SIZE>,
    input: &OwnedDomain<2>,
    output: &mut OwnedDomain<2>,
    chunk_size: usize,
) -> f64 {
    profiling::scope!("jacobi_step");
    debug_assert_eq!(input.aabb(), output.aabb());
    let aabb = *input.aabb();
    let exclusive_bounds = aabb.exclusive_bounds();
    let height = exclusive_bounds[0] as usize;
    let width = exclusive_bounds[1] as usize;
    let offsets = aabb.coord_offset_to_linear(stencil.offsets());
    let chunk_size = chunk_size.max(1);
    let ib = input.buffer();

    output.buffer_mut()[width..(height - 1) * width]
        .par_chunks_mut(chunk_size * width)
        .enumerate()
        .map(|(chunk_index, output_chunk): (usize, &mut [f64])| {
            profiling::scope!("jacobi_step: Thread Callback");
            let first_row = 1 + chunk_index * chunk_size;
            let mut local_max = 0.0_f64;
            for (r, output_row) in output_chunk.chunks_exact_mut(width).enumerate()
            {
                let row_offset = (first_row + r) * width;
                for col in 1..width - 1 {
                    let linear_index = row_offset + col;
                    let args = Values::<NEIGHBORHOOD_SIZE>::from_fn(|n, _| {
                        ib[(linear_index as isize + offsets[n]) as usize]
                    });
                    let value = stencil.apply(&args);
                    local_max = local_max.max((value - ib[linear_index]).abs());
                    output_row[col] = value;
                }
            }
            local_max
        })
        .reduce(|| 0.0, f64::max)
}

/// Jacobi iteration on a bordered plate.
pub struct JacobiSolver<'a, const NEIGHBORHOOD_SIZE: usize> {
    stencil: &'a Stencil<2, NEIGHBORHOOD_SIZE>,
    grid: LaplaceGrid,
    chunk_size: usize,
    progress_period: usize,
}

impl<'a, const NEIGHBORHOOD_SIZE: usize> JacobiSolver<'a, NEIGHBORHOOD_SIZE> {
    pub fn new(
        stencil: &'a Stencil<2, NEIGHBORHOOD_SIZE>,
        grid: LaplaceGrid,
        chunk_size: usize,
    ) -> Self {
        // The border is one cell wide, neighbors may not reach further.
        debug_assert!(stencil
            .offsets()
            .iter()
            .all(|o| o.iter().all(|d| d.abs() <= 1)));
        JacobiSolver {
            stencil,
            grid,
            chunk_size,
            progress_period: DEFAULT_PROGRESS_PERIOD,
        }
    }

    /// Report every `period` iterations, 0 disables reporting.
    pub fn with_progress_period(mut self, period: usize) -> Self {
        self.progress_period = period;
        self
    }

    pub fn grid(&self) -> &LaplaceGrid {
        &self.grid
    }

    pub fn into_grid(self) -> LaplaceGrid {
        self.grid
    }

    /// Advance one iteration and return the largest change.
    pub fn step(&mut self) -> f64 {
        let (input, output) = self.grid.split_mut();
        let max_delta = jacobi_step(self.stencil, input, output, self.chunk_size);
        self.grid.swap();
        max_delta
    }

    /// Step while the largest change exceeds `tolerance`
    /// and the iteration counter has not passed `max_iterations`.
    pub fn run<Reporter: ProgressReporter>(
        &mut self,
        max_iterations: usize,
        tolerance: f64,
        reporter: &mut Reporter,
    ) -> RunSummary {
        profiling::scope!("jacobi_solver: run");
        tracing::info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            max_iterations,
            tolerance,
            "starting jacobi run"
        );

        let mut iteration = 1;
        let mut max_delta = INITIAL_MAX_DELTA;
        while max_delta > tolerance && iteration <= max_iterations {
            max_delta = self.step();

            if self.progress_period != 0 && iteration % self.progress_period == 0
            {
                tracing::debug!(iteration, max_delta, "progress");
                reporter.report(iteration, &self.grid);
            }

            iteration += 1;
            profiling::finish_frame!();
        }

        let state = if max_delta <= tolerance {
            RunState::Converged
        } else {
            RunState::BudgetExhausted
        };
        let summary = RunSummary {
            state,
            iteration,
            max_delta,
        };
        tracing::info!(
            ?state,
            steps = summary.steps(),
            max_delta,
            "jacobi run finished"
        );
        summary
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::solver::{plate_aabb, NoProgress};
    use crate::stencil::standard_stencils::laplace_2d;
    use float_cmp::assert_approx_eq;

    struct Recorder {
        iterations: Vec<usize>,
    }

    impl ProgressReporter for Recorder {
        fn report(&mut self, iteration: usize, _grid: &LaplaceGrid) {
            self.iterations.push(iteration);
        }
    }

    fn plate(rows: usize, cols: usize) -> LaplaceGrid {
        LaplaceGrid::new(rows, cols, &PlateCheck::new(rows, cols), 1).unwrap()
    }

    #[test]
    fn zero_plate_converges_immediately() {
        let stencil = laplace_2d();
        let bc = ConstantCheck::new(0.0, plate_aabb(6, 7).unwrap());
        let grid = LaplaceGrid::new(6, 7, &bc, 2).unwrap();
        let mut solver = JacobiSolver::new(&stencil, grid, 2);
        assert_eq!(solver.step(), 0.0);

        let summary = solver.run(100, 0.01, &mut NoProgress);
        assert_eq!(summary.state, RunState::Converged);
        assert_eq!(summary.max_delta, 0.0);
        assert_eq!(summary.steps(), 1);
        assert_eq!(summary.iteration, 2);
    }

    // 3x3 interior on a 4 row by 3 col bordered plate:
    // right edge (100/3) * row, bottom edge (100/3) * col.
    #[test]
    fn single_step_hand_computed() {
        let stencil = laplace_2d();
        let mut solver = JacobiSolver::new(&stencil, plate(3, 3), 1);
        let third = 100.0 / 3.0;
        let delta = solver.step();
        let grid = solver.grid();

        let expected = [
            [0.0, 0.0, 0.25 * third],
            [0.0, 0.0, 0.25 * (2.0 * third)],
            [0.25 * third, 0.25 * (2.0 * third), 0.25 * (3.0 * third + 3.0 * third)],
        ];
        for row in 0..3 {
            for col in 0..3 {
                assert_approx_eq!(
                    f64,
                    grid.temperature(row + 1, col + 1),
                    expected[row][col],
                    ulps = 2
                );
            }
        }
        // Largest change is the bottom right interior cell.
        assert_approx_eq!(f64, delta, expected[2][2], ulps = 2);
        assert_approx_eq!(f64, delta, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn step_matches_neighbor_mean() {
        let stencil = laplace_2d();
        let mut solver = JacobiSolver::new(&stencil, plate(5, 4), 2);
        for _ in 0..3 {
            solver.step();
        }
        let before = solver.grid().domain().try_clone().unwrap();
        solver.step();
        let after = solver.grid().domain();
        for c in solver.grid().interior().coord_iter() {
            let mean = 0.25
                * (before.view(&(c + vector![1, 0]))
                    + before.view(&(c + vector![-1, 0]))
                    + before.view(&(c + vector![0, 1]))
                    + before.view(&(c + vector![0, -1])));
            assert_eq!(after.view(&c), mean);
        }
    }

    #[test]
    fn border_is_never_modified() {
        let stencil = laplace_2d();
        let grid = plate(7, 5);
        let aabb = *grid.aabb();
        let border: Vec<(Coord<2>, f64)> = aabb
            .coord_iter()
            .filter(|c| aabb.on_border(c))
            .map(|c| (c, grid.domain().view(&c)))
            .collect();

        let mut solver = JacobiSolver::new(&stencil, grid, 3);
        for n in 0..25 {
            solver.step();
            for (c, v) in &border {
                assert_eq!(
                    solver.grid().domain().view(c).to_bits(),
                    v.to_bits(),
                    "step {} changed border cell {:?}",
                    n,
                    c
                );
            }
        }
    }

    #[test]
    fn chunk_size_does_not_change_results() {
        let stencil = laplace_2d();
        let mut reference = JacobiSolver::new(&stencil, plate(9, 6), 1);
        let r = reference.run(50, 0.0, &mut NoProgress);
        for chunk_size in [2, 4, 9, 100] {
            let grid = LaplaceGrid::new(9, 6, &PlateCheck::new(9, 6), chunk_size)
                .unwrap();
            let mut solver = JacobiSolver::new(&stencil, grid, chunk_size);
            let s = solver.run(50, 0.0, &mut NoProgress);
            assert_eq!(r, s);
            assert_eq!(
                reference.grid().domain().buffer(),
                solver.grid().domain().buffer()
            );
        }
    }

    #[test]
    fn zero_budget_returns_sentinel() {
        let stencil = laplace_2d();
        let mut solver = JacobiSolver::new(&stencil, plate(4, 4), 1);
        let initial = solver.grid().domain().buffer().to_vec();
        let summary = solver.run(0, 0.01, &mut NoProgress);
        assert_eq!(summary.iteration, 1);
        assert_eq!(summary.steps(), 0);
        assert_eq!(summary.max_delta, INITIAL_MAX_DELTA);
        assert_eq!(summary.state, RunState::BudgetExhausted);
        assert_eq!(solver.grid().domain().buffer(), &initial[..]);
    }

    #[test]
    fn budget_exhausted() {
        let stencil = laplace_2d();
        let mut solver = JacobiSolver::new(&stencil, plate(20, 20), 4);
        let summary = solver.run(10, 1e-12, &mut NoProgress);
        assert_eq!(summary.state, RunState::BudgetExhausted);
        assert_eq!(summary.iteration, 11);
        assert_eq!(summary.steps(), 10);
        assert!(summary.max_delta > 1e-12);
    }

    #[test]
    fn progress_period() {
        let stencil = laplace_2d();
        let mut solver =
            JacobiSolver::new(&stencil, plate(6, 6), 1).with_progress_period(3);
        let mut recorder = Recorder {
            iterations: Vec::new(),
        };
        let summary = solver.run(10, 0.0, &mut recorder);
        assert_eq!(summary.steps(), 10);
        assert_eq!(recorder.iterations, vec![3, 6, 9]);

        let mut solver =
            JacobiSolver::new(&stencil, plate(6, 6), 1).with_progress_period(0);
        let mut recorder = Recorder {
            iterations: Vec::new(),
        };
        solver.run(10, 0.0, &mut recorder);
        assert!(recorder.iterations.is_empty());
    }

    #[test]
    fn delta_does_not_grow_after_convergence() {
        let stencil = laplace_2d();
        let mut solver = JacobiSolver::new(&stencil, plate(10, 10), 2);
        let summary = solver.run(5000, 0.01, &mut NoProgress);
        assert_eq!(summary.state, RunState::Converged);
        let mut previous = summary.max_delta;
        for _ in 0..20 {
            let delta = solver.step();
            assert!(delta <= previous);
            previous = delta;
        }
    }
}
