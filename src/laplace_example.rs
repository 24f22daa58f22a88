use crate::build_info;
use crate::error::{checked_extent, Error};
use crate::example_util::*;
use crate::solver::LaplaceParameters;
use clap::Parser;
use std::path::PathBuf;

/// Jacobi solver for heat diffusion on a plate with fixed edge temperatures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Interior rows per task.
    #[arg(short, long, default_value = "1")]
    pub chunk_size: usize,

    /// Interior rows of the plate.
    #[arg(short, long, default_value = "1000", allow_negative_numbers = true)]
    pub rows: i64,

    /// Interior columns of the plate.
    #[arg(long, default_value = "1000", allow_negative_numbers = true)]
    pub cols: i64,

    /// Stop after this many iterations.
    #[arg(short, long, default_value = "100", allow_negative_numbers = true)]
    pub max_iterations: i64,

    /// Largest permitted change in temperature.
    #[arg(long, default_value = "0.01", allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Print the corner diagonal every this many iterations, 0 disables.
    #[arg(short, long, default_value = "100")]
    pub progress_period: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Write final.png, WARNING: we do not check image size, so be reasonable.
    #[arg(short, long, requires("output_dir"))]
    pub write_image: bool,

    /// Write final.csv with every temperature.
    #[arg(long, requires("output_dir"))]
    pub write_csv: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn parameters(&self) -> Result<LaplaceParameters, Error> {
        let max = LaplaceParameters::MAX_EXTENT;
        let max_iterations = usize::try_from(self.max_iterations)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(Error::InvalidIterations {
                value: self.max_iterations,
            })?;
        let params = LaplaceParameters {
            rows: checked_extent("rows", self.rows, max)?,
            cols: checked_extent("cols", self.cols, max)?,
            max_iterations,
            tolerance: self.tolerance,
            progress_period: self.progress_period,
            chunk_size: self.chunk_size,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();
        args.setup(name)?;
        Ok(args)
    }

    fn setup(&self, name: &str) -> anyhow::Result<()> {
        if self.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }
        init_logging();
        if let Some(output_dir) = &self.output_dir {
            reset_output_dir(output_dir)?;
        }
        init_thread_pool(self.threads)?;
        Ok(())
    }

    pub fn image_path(&self) -> Option<PathBuf> {
        self.output_file("final.png")
    }

    pub fn csv_path(&self) -> Option<PathBuf> {
        self.output_file("final.csv")
    }

    fn output_file(&self, name: &str) -> Option<PathBuf> {
        let mut result = self.output_dir.as_ref()?.clone();
        result.push(name);
        Some(result)
    }
}
