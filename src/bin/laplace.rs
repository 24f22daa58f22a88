use plate::domain::*;
use plate::laplace_example::*;
use plate::solver::*;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("laplace")?;
    let params = args.parameters()?;

    #[cfg(feature = "profile-with-puffin")]
    let _profiler = plate::example_util::start_profiler()?;

    let now = Instant::now();

    let stencil = plate::stencil::standard_stencils::laplace_2d();
    let bc = PlateCheck::new(params.rows, params.cols);
    let grid = LaplaceGrid::new(params.rows, params.cols, &bc, params.chunk_size)?;
    let mut solver = JacobiSolver::new(&stencil, grid, params.chunk_size)
        .with_progress_period(params.progress_period);

    let mut reporter = DiagonalProgress::new(std::io::stdout().lock());
    let summary = solver.run(params.max_iterations, params.tolerance, &mut reporter);
    drop(reporter);

    let elapsed = now.elapsed().as_secs_f64();
    println!(
        "\nMax error at iteration {} was {:.6}",
        summary.steps(),
        summary.max_delta
    );
    println!("Total time was {:.6} seconds", elapsed);

    let grid = solver.into_grid();
    if args.write_image {
        if let Some(path) = args.image_path() {
            plate::image::image2d(
                grid.domain(),
                PlateCheck::EDGE_TEMPERATURE,
                &path,
            )?;
        }
    }
    if args.write_csv {
        if let Some(path) = args.csv_path() {
            plate::csv::write_csv_2d(grid.domain(), &path)?;
        }
    }
    Ok(())
}
