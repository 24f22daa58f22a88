use crate::build_info;
use crate::error::{checked_extent, Error};
use crate::example_util::*;
use crate::matmul::{MatMulParameters, MatrixInit};
use clap::Parser;

/// Repeated dense matrix multiply benchmark.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Side length of the square matrices.
    #[arg(allow_negative_numbers = true)]
    pub size: i64,

    /// Number of products to compute.
    #[arg(allow_negative_numbers = true)]
    pub n_iter: i64,

    /// Rows of the product per task.
    #[arg(short, long, default_value = "1")]
    pub chunk_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Fill with uniform random values instead of the row index.
    #[arg(short, long)]
    pub rand_init: bool,

    /// Print every element of A, B and C after the run.
    #[arg(short, long)]
    pub show: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn parameters(&self) -> Result<MatMulParameters, Error> {
        let iterations = usize::try_from(self.n_iter)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(Error::InvalidIterations { value: self.n_iter })?;
        let params = MatMulParameters {
            size: checked_extent("size", self.size, i32::MAX as i64)?,
            iterations,
            chunk_size: self.chunk_size,
            init: if self.rand_init {
                MatrixInit::Random
            } else {
                MatrixInit::RowIndex
            },
        };
        params.validate()?;
        Ok(params)
    }

    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();
        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }
        init_logging();
        init_thread_pool(args.threads)?;
        Ok(args)
    }
}

/// Right aligned runtime in seconds, five significant digits.
pub fn format_runtime(secs: f64) -> String {
    format!("{:>8}", format_general(secs, 5))
}

/// Shortest of fixed or exponent notation with `precision` significant
/// digits and trailing zeros removed, like C's `%g`.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
