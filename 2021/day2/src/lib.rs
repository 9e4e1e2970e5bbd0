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

#[derive(Debug)]
pub enum Error {
    InvalidCommandText(String),
    UnknownDirection(String),
    InvalidAmount(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCommandText(s) => write!(
                f,
                "Invalid text({}) for command, expect \"<direction> <amount>\".",
                s
            ),
            Error::UnknownDirection(s) => write!(f, "Unknown direction({}) in command.", s),
            Error::InvalidAmount(s) => write!(f, "Invalid amount({}) in command.", s),
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+) (\S+)$").unwrap());
        let caps = PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidCommandText(value.to_string()))?;
        let amount = caps[2]
            .parse::<u32>()
            .map_err(|_| Error::InvalidAmount(caps[2].to_string()))?;
        let amount = i64::from(amount);
        match &caps[1] {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    horizontal: i64,
    depth: i64,
}

impl Position {
    pub fn new(horizontal: i64, depth: i64) -> Self {
        Self { horizontal, depth }
    }

    pub fn horizontal(&self) -> i64 {
        self.horizontal
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    pub fn product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

pub trait Pilot {
    fn apply(&mut self, command: &Command);
    fn position(&self) -> &Position;

    fn steer(&mut self, commands: &[Command]) -> &Position {
        for c in commands {
            self.apply(c);
        }

        self.position()
    }
}

/// Up and down change depth directly.
#[derive(Debug, Default)]
pub struct PlainPilot {
    pos: Position,
}

impl Pilot for PlainPilot {
    fn apply(&mut self, command: &Command) {
        match *command {
            Command::Forward(n) => self.pos.horizontal += n,
            Command::Down(n) => self.pos.depth += n,
            Command::Up(n) => self.pos.depth -= n,
        }
    }

    fn position(&self) -> &Position {
        &self.pos
    }
}

/// Up and down only steer the aim, forward dives by aim times distance.
#[derive(Debug, Default)]
pub struct AimPilot {
    pos: Position,
    aim: i64,
}

impl AimPilot {
    pub fn aim(&self) -> i64 {
        self.aim
    }
}

impl Pilot for AimPilot {
    fn apply(&mut self, command: &Command) {
        match *command {
            Command::Forward(n) => {
                self.pos.horizontal += n;
                self.pos.depth += self.aim * n;
            }
            Command::Down(n) => self.aim += n,
            Command::Up(n) => self.aim -= n,
        }
    }

    fn position(&self) -> &Position {
        &self.pos
    }
}

pub fn read_commands<P: AsRef<Path>>(path: P) -> Result<Vec<Command>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let commands = reader
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
            Command::try_from(s.as_str())
                .with_context(|| format!("Failed to parse command in line {}.", ind + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = commands.len(), "read commands");
    Ok(commands)
}
