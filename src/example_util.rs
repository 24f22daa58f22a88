//! Setup shared by the `laplace` and `matmul` executables.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Log to stderr, `RUST_LOG` overrides the default `info` level.
/// Stdout is left for benchmark output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn init_thread_pool(threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("rayon_thread_{}", i))
        .build_global()?;
    tracing::debug!(threads, "rayon pool ready");
    Ok(())
}

/// Create a fresh output directory.
/// WARNING: existing contents are removed.
pub fn reset_output_dir(output_dir: &Path) -> anyhow::Result<()> {
    let _ = std::fs::remove_dir_all(output_dir);
    std::fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Keeps the puffin server alive, profiling data is flushed on drop.
#[cfg(feature = "profile-with-puffin")]
pub struct Profiler {
    _server: puffin_http::Server,
}

#[cfg(feature = "profile-with-puffin")]
pub fn start_profiler() -> anyhow::Result<Profiler> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    println!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)?;
    profiling::puffin::set_scopes_on(true);
    Ok(Profiler { _server: server })
}
