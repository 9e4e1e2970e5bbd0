use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Age of a newborn member.
pub const NEWBORN_AGE: usize = 8;
/// Age a member restarts from after spawning.
pub const RESET_AGE: usize = 6;

#[derive(Debug)]
pub enum Error {
    InvalidAgeText(String),
    AgeOutOfRange(usize),
    PopulationOverflow(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidAgeText(s) => write!(f, "Invalid text({}) for age.", s),
            Error::AgeOutOfRange(n) => write!(
                f,
                "Age({}) is out of range, expect 0 to {}.",
                n, NEWBORN_AGE
            ),
            Error::PopulationOverflow(day) => write!(
                f,
                "Population count overflows on day {}.",
                day
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    /// Count of days to simulate
    #[arg(short, long, default_value_t = 80)]
    pub days: usize,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    /// Count of days to simulate
    #[arg(short, long, default_value_t = 256)]
    pub days: usize,
}

pub fn init_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Population kept as a histogram of member count per age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    counts: [u64; NEWBORN_AGE + 1],
    day: usize,
}

impl School {
    pub fn from_ages(ages: &[usize]) -> Result<Self, Error> {
        let mut counts = [0; NEWBORN_AGE + 1];
        for &age in ages {
            *counts.get_mut(age).ok_or(Error::AgeOutOfRange(age))? += 1;
        }

        Ok(Self { counts, day: 0 })
    }

    /// Simulates one day. On overflow the school is left as it was.
    pub fn advance(&mut self) -> Result<(), Error> {
        let day = self.day + 1;
        // Rotation carries age 0 into the newborn slot, the parents restart at RESET_AGE.
        let mut counts = self.counts;
        let spawn_n = counts[0];
        counts.rotate_left(1);
        counts[RESET_AGE] = counts[RESET_AGE]
            .checked_add(spawn_n)
            .ok_or(Error::PopulationOverflow(day))?;
        // Keeps the total representable as well.
        counts
            .iter()
            .try_fold(0u64, |sum, n| sum.checked_add(*n))
            .ok_or(Error::PopulationOverflow(day))?;

        self.counts = counts;
        self.day = day;
        Ok(())
    }

    pub fn advance_days(&mut self, days: usize) -> Result<(), Error> {
        for _ in 0..days {
            self.advance()?;
        }
        debug!(day = self.day, total = self.total(), "simulated school");

        Ok(())
    }

    pub fn day(&self) -> usize {
        self.day
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

pub fn read_ages<P: AsRef<Path>>(path: P) -> Result<Vec<usize>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut ages = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        for s in line.split(',') {
            let age = s
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidAgeText(s.to_string()))
                .with_context(|| format!("Failed to parse ages in line {}.", ind + 1))?;
            ages.push(age);
        }
    }

    debug!(count = ages.len(), "read ages");
    Ok(ages)
}
