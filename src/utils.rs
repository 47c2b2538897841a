use tracing::Level;

/// Install a stderr `tracing` subscriber.
///
/// `verbose` raises the level from `WARN` to `DEBUG`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run `f` inside a dedicated rayon pool of `num_threads` workers.
///
/// # Arguments
///
/// * `num_threads` - Number of worker threads, 0 for all available cores
/// * `f` - Work to run on the pool
///
/// # Returns
///
/// The value returned by `f`, or the error raised while building the pool.
pub fn run_with_threads<F, R>(num_threads: usize, f: F) -> Result<R, rayon::ThreadPoolBuildError>
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;
    Ok(pool.install(f))
}
