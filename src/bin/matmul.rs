use plate::matmul::*;
use plate::matmul_example::*;
use std::io::Write;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("matmul")?;
    let params = args.parameters()?;

    #[cfg(feature = "profile-with-puffin")]
    let _profiler = plate::example_util::start_profiler()?;

    let mut bench = MatMulBenchmark::new(params)?;

    let now = Instant::now();
    bench.run()?;
    let elapsed = now.elapsed().as_secs_f64();

    if args.show {
        let mut out = std::io::BufWriter::new(std::io::stdout().lock());
        bench.a().show(&mut out)?;
        bench.b().show(&mut out)?;
        bench.c().show(&mut out)?;
        out.flush()?;
    }

    let name = std::env::args().next().unwrap_or_else(|| "matmul".to_string());
    println!("{} total runtime {}", name, format_runtime(elapsed));
    Ok(())
}
