use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum Error {
    InvalidDepth(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDepth(s) => write!(f, "Invalid text({}) for depth measurement.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    /// Count of measurements summed in one sliding window
    #[arg(short, long, default_value = "3")]
    pub window: NonZeroUsize,
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (defaults to `warn`).
pub fn init_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn read_depths<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut depths = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let depth = parse_depth(&line)
            .with_context(|| format!("Failed to parse depth in line {}.", ind + 1))?;
        depths.push(depth);
    }

    debug!(count = depths.len(), "read depth measurements");
    Ok(depths)
}

fn parse_depth(s: &str) -> Result<i64, Error> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidDepth(s.to_string()))
}

pub fn count_increases(depths: &[i64]) -> usize {
    depths.windows(2).filter(|w| w[1] > w[0]).count()
}

/// Counts increases between sums of consecutive windows. Neighbouring windows
/// share all but one measurement, so only the two edge values are compared.
pub fn count_window_increases(depths: &[i64], window: NonZeroUsize) -> usize {
    let window = window.get();
    if depths.len() <= window {
        return 0;
    }

    depths
        .iter()
        .zip(depths[window..].iter())
        .filter(|(leaving, entering)| entering > leaving)
        .count()
}
