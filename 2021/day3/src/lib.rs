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

const MAX_WIDTH: usize = u64::BITS as usize;

#[derive(Debug)]
pub enum Error {
    InvalidBit(char),
    InconsistentWidth(usize, usize),
    InvalidWidth(usize),
    EmptyReport,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBit(c) => write!(f, "Invalid character({}) for binary digit.", c),
            Error::InconsistentWidth(expect_n, real_n) => write!(
                f,
                "Expect {} bits per number, given {}.",
                expect_n, real_n
            ),
            Error::InvalidWidth(n) => write!(
                f,
                "Invalid width({}) of number, expect 1 to {} bits.",
                n, MAX_WIDTH
            ),
            Error::EmptyReport => write!(f, "Given diagnostic report has no number."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn init_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[derive(Debug, Clone, Copy)]
enum BitCriteria {
    MostCommon,
    LeastCommon,
}

impl BitCriteria {
    /// Which bit value to keep given the counts at one column. Ties go to 1
    /// for the most common criteria and to 0 for the least common one.
    fn keep_one(&self, one_n: usize, zero_n: usize) -> bool {
        match self {
            BitCriteria::MostCommon => one_n >= zero_n,
            BitCriteria::LeastCommon => one_n < zero_n,
        }
    }
}

#[derive(Debug)]
pub struct DiagnosticReport {
    numbers: Vec<u64>,
    width: usize,
}

impl DiagnosticReport {
    pub fn gamma_rate(&self) -> u64 {
        (0..self.width)
            .filter(|&col| {
                let one_n = self.one_count(&self.numbers, col);
                one_n > self.numbers.len() - one_n
            })
            .fold(0, |gamma, col| gamma | self.col_mask(col))
    }

    pub fn epsilon_rate(&self) -> u64 {
        !self.gamma_rate() & self.width_mask()
    }

    pub fn power_consumption(&self) -> u128 {
        u128::from(self.gamma_rate()) * u128::from(self.epsilon_rate())
    }

    pub fn oxygen_generator_rating(&self) -> u64 {
        self.rating(BitCriteria::MostCommon)
    }

    pub fn co2_scrubber_rating(&self) -> u64 {
        self.rating(BitCriteria::LeastCommon)
    }

    pub fn life_support_rating(&self) -> u128 {
        u128::from(self.oxygen_generator_rating()) * u128::from(self.co2_scrubber_rating())
    }

    fn rating(&self, criteria: BitCriteria) -> u64 {
        let mut candidates = self.numbers.clone();
        for col in 0..self.width {
            if candidates.len() <= 1 {
                break;
            }

            let one_n = self.one_count(&candidates, col);
            let zero_n = candidates.len() - one_n;
            // All candidates agree on this column, nothing to filter.
            if one_n == 0 || zero_n == 0 {
                continue;
            }

            let keep_one = criteria.keep_one(one_n, zero_n);
            let mask = self.col_mask(col);
            candidates.retain(|n| (n & mask != 0) == keep_one);
            debug!(?criteria, col, left = candidates.len(), "filtered candidates");
        }

        candidates[0]
    }

    fn one_count(&self, numbers: &[u64], col: usize) -> usize {
        let mask = self.col_mask(col);
        numbers.iter().filter(|n| *n & mask != 0).count()
    }

    // Column 0 is the most significant bit.
    fn col_mask(&self, col: usize) -> u64 {
        1 << (self.width - 1 - col)
    }

    fn width_mask(&self) -> u64 {
        u64::MAX >> (MAX_WIDTH - self.width)
    }
}

struct DiagnosticReportBuilder {
    numbers: Vec<u64>,
    width: Option<usize>,
}

impl DiagnosticReportBuilder {
    fn new() -> Self {
        Self {
            numbers: Vec::new(),
            width: None,
        }
    }

    fn add_number(&mut self, s: &str) -> Result<(), Error> {
        let s = s.trim();
        let bit_n = s.chars().count();
        let width = *self.width.get_or_insert(bit_n);
        if width != bit_n {
            return Err(Error::InconsistentWidth(width, bit_n));
        }
        if bit_n == 0 || bit_n > MAX_WIDTH {
            return Err(Error::InvalidWidth(bit_n));
        }

        let mut n = 0;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(Error::InvalidBit(c)),
            };
            n = (n << 1) | bit;
        }
        self.numbers.push(n);

        Ok(())
    }

    fn build(self) -> Result<DiagnosticReport, Error> {
        match self.width {
            Some(width) if !self.numbers.is_empty() => Ok(DiagnosticReport {
                numbers: self.numbers,
                width,
            }),
            _ => Err(Error::EmptyReport),
        }
    }
}

pub fn read_report<P: AsRef<Path>>(path: P) -> Result<DiagnosticReport> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = DiagnosticReportBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_number(&line)
            .with_context(|| format!("Failed to add number(line {}) to report.", ind + 1))?;
    }

    let report = builder.build()?;
    debug!(
        count = report.numbers.len(),
        width = report.width,
        "read diagnostic report"
    );
    Ok(report)
}
