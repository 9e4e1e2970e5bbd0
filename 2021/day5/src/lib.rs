use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Upper bound of points on one overlap grid.
pub const MAX_GRID_POINTS: usize = 1 << 26;

#[derive(Debug)]
pub enum Error {
    InvalidSegmentText(String),
    GridTooLarge(Point),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSegmentText(s) => write!(
                f,
                "Invalid text({}) for line segment, expect \"x1,y1 -> x2,y2\".",
                s
            ),
            Error::GridTooLarge(p) => write!(
                f,
                "Grid covering point({},{}) has more than {} points.",
                p.x, p.y, MAX_GRID_POINTS
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Minimum count of segments over one point to be reported
    #[arg(short, long, default_value_t = 2)]
    pub threshold: u32,
}

pub fn init_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: usize,
    y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Horizontal,
    Vertical,
    Diagonal,
    Skewed,
}

impl SegmentKind {
    pub fn is_axis_aligned(&self) -> bool {
        matches!(self, SegmentKind::Horizontal | SegmentKind::Vertical)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl TryFrom<&str> for Segment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").unwrap());
        let caps = PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidSegmentText(value.to_string()))?;
        let coord = |ind: usize| {
            // Digits only, so only an overflow can fail here.
            caps[ind]
                .parse::<usize>()
                .map_err(|_| Error::InvalidSegmentText(value.to_string()))
        };

        Ok(Segment::new(
            Point::new(coord(1)?, coord(2)?),
            Point::new(coord(3)?, coord(4)?),
        ))
    }
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn kind(&self) -> SegmentKind {
        if self.start.y == self.end.y {
            SegmentKind::Horizontal
        } else if self.start.x == self.end.x {
            SegmentKind::Vertical
        } else if self.start.x.abs_diff(self.end.x) == self.start.y.abs_diff(self.end.y) {
            SegmentKind::Diagonal
        } else {
            SegmentKind::Skewed
        }
    }

    /// Every point covered by this segment, both ends included. Skewed
    /// segments don't cover any grid point here.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        fn walk(from: usize, to: usize, step: usize) -> usize {
            if to > from {
                from + step
            } else if to < from {
                from - step
            } else {
                from
            }
        }

        let len = if self.kind() == SegmentKind::Skewed {
            None
        } else {
            Some(
                self.start
                    .x
                    .abs_diff(self.end.x)
                    .max(self.start.y.abs_diff(self.end.y)),
            )
        };
        len.into_iter().flat_map(move |len| {
            (0..=len).map(move |step| {
                Point::new(
                    walk(self.start.x, self.end.x, step),
                    walk(self.start.y, self.end.y, step),
                )
            })
        })
    }

    fn max_corner(&self) -> Point {
        Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }
}

#[derive(Debug, Clone)]
pub struct OverlapGrid {
    counts: Vec<u32>,
    width: usize,
    height: usize,
}

impl OverlapGrid {
    /// Grid just large enough for given segments, with the segments accepted
    /// by `filter` drawn on it.
    pub fn with_segments<F>(segments: &[Segment], filter: F) -> Result<Self, Error>
    where
        F: Fn(SegmentKind) -> bool,
    {
        let corner = segments
            .iter()
            .map(|s| s.max_corner())
            .fold(Point::new(0, 0), |c, p| Point::new(c.x.max(p.x), c.y.max(p.y)));
        let (width, height) = if segments.is_empty() {
            (0, 0)
        } else {
            Self::size_to_cover(&corner).ok_or(Error::GridTooLarge(corner))?
        };
        let mut grid = OverlapGrid {
            counts: vec![0; width * height],
            width,
            height,
        };
        let mut drawn_n = 0;
        for s in segments.iter().filter(|s| filter(s.kind())) {
            grid.draw(s);
            drawn_n += 1;
        }
        debug!(
            width,
            height,
            drawn = drawn_n,
            total = segments.len(),
            "drew segments on grid"
        );

        Ok(grid)
    }

    fn size_to_cover(corner: &Point) -> Option<(usize, usize)> {
        let width = corner.x.checked_add(1)?;
        let height = corner.y.checked_add(1)?;
        width
            .checked_mul(height)
            .filter(|n| *n <= MAX_GRID_POINTS)
            .map(|_| (width, height))
    }

    pub fn draw(&mut self, segment: &Segment) {
        for p in segment.points() {
            if let Some(count) = self.count_mut(&p) {
                *count += 1;
            }
        }
    }

    pub fn count(&self, p: &Point) -> u32 {
        self.index(p).map(|ind| self.counts[ind]).unwrap_or(0)
    }

    pub fn count_at_least(&self, threshold: u32) -> usize {
        self.counts.iter().filter(|c| **c >= threshold).count()
    }

    fn count_mut(&mut self, p: &Point) -> Option<&mut u32> {
        self.index(p).map(|ind| &mut self.counts[ind])
    }

    fn index(&self, p: &Point) -> Option<usize> {
        if p.x >= self.width || p.y >= self.height {
            None
        } else {
            Some(p.y * self.width + p.x)
        }
    }
}

impl Display for OverlapGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.counts.chunks(self.width.max(1)) {
            for c in row {
                if *c == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", c)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let segments = reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            let s = l.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })?;
            Segment::try_from(s.as_str())
                .with_context(|| format!("Failed to parse segment in line {}.", ind + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = segments.len(), "read segments");
    Ok(segments)
}
