use std::{
    collections::HashMap,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub const BOARD_SIZE: usize = 5;

#[derive(Debug)]
pub enum Error {
    InvalidNumber(String),
    MissingDraws,
    InvalidRowCount(usize),
    InvalidColumnCount(usize, usize),
    DuplicateNumber(u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidNumber(s) => write!(f, "Invalid text({}) for bingo number.", s),
            Error::MissingDraws => write!(f, "Given input doesn't have the drawn numbers."),
            Error::InvalidRowCount(n) => write!(
                f,
                "Expect {} rows in one bingo board, given {}.",
                BOARD_SIZE, n
            ),
            Error::InvalidColumnCount(r, n) => write!(
                f,
                "Expect {} numbers in row {} of bingo board, given {}.",
                BOARD_SIZE,
                r + 1,
                n
            ),
            Error::DuplicateNumber(n) => {
                write!(f, "Number({}) appears more than once in bingo board.", n)
            }
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

#[derive(Debug, Clone)]
pub struct Board {
    marks: [[bool; BOARD_SIZE]; BOARD_SIZE],
    positions: HashMap<u32, (usize, usize)>,
    won: bool,
}

impl Board {
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, Error> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::InvalidRowCount(rows.len()));
        }

        let mut positions = HashMap::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(Error::InvalidColumnCount(r, row.len()));
            }

            for (c, n) in row.iter().enumerate() {
                if positions.insert(*n, (r, c)).is_some() {
                    return Err(Error::DuplicateNumber(*n));
                }
            }
        }

        Ok(Self {
            marks: [[false; BOARD_SIZE]; BOARD_SIZE],
            positions,
            won: false,
        })
    }

    /// Marks given number if it's on this board, returns true if the mark
    /// completes its row or column.
    pub fn mark(&mut self, n: u32) -> bool {
        if let Some(&(r, c)) = self.positions.get(&n) {
            self.marks[r][c] = true;
            self.is_row_complete(r) || self.is_col_complete(c)
        } else {
            false
        }
    }

    pub fn unmarked_sum(&self) -> u64 {
        self.positions
            .iter()
            .filter(|(_, (r, c))| !self.marks[*r][*c])
            .map(|(n, _)| u64::from(*n))
            .sum()
    }

    fn is_row_complete(&self, r: usize) -> bool {
        self.marks[r].iter().all(|m| *m)
    }

    fn is_col_complete(&self, c: usize) -> bool {
        self.marks.iter().all(|row| row[c])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
    board_ind: usize,
    number: u32,
    unmarked_sum: u64,
}

impl Win {
    pub fn board_ind(&self) -> usize {
        self.board_ind
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn unmarked_sum(&self) -> u64 {
        self.unmarked_sum
    }

    /// Unmarked sum times the winning number.
    pub fn score(&self) -> u128 {
        u128::from(self.unmarked_sum) * u128::from(self.number)
    }
}

#[derive(Debug, Clone)]
pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl Bingo {
    pub fn new(draws: Vec<u32>, boards: Vec<Board>) -> Self {
        Self { draws, boards }
    }

    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    pub fn first_winner(&self) -> Option<Win> {
        self.wins().into_iter().next()
    }

    /// The board completing last, only if every board completes eventually.
    pub fn last_winner(&self) -> Option<Win> {
        let mut wins = self.wins();
        if wins.len() == self.boards.len() {
            wins.pop()
        } else {
            None
        }
    }

    /// Plays a fresh copy of the game, collecting wins in the order boards
    /// complete. Boards that already won are not marked anymore.
    fn wins(&self) -> Vec<Win> {
        let mut boards = self.boards.clone();
        let mut wins = Vec::new();
        for &n in &self.draws {
            for (ind, board) in boards.iter_mut().enumerate() {
                if board.won || !board.mark(n) {
                    continue;
                }

                board.won = true;
                debug!(board = ind, number = n, "board completed");
                wins.push(Win {
                    board_ind: ind,
                    number: n,
                    unmarked_sum: board.unmarked_sum(),
                });
            }

            if wins.len() == boards.len() {
                break;
            }
        }

        wins
    }
}

pub fn read_bingo<P: AsRef<Path>>(path: P) -> Result<Bingo> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut draws = None;
    let mut boards = Vec::new();
    let mut rows = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let line = line.trim();
        if draws.is_none() {
            if !line.is_empty() {
                draws = Some(parse_draws(line).with_context(|| {
                    format!("Failed to parse drawn numbers in line {}.", ind + 1)
                })?);
            }
            continue;
        }

        if line.is_empty() {
            if !rows.is_empty() {
                boards.push(Board::from_rows(&rows).with_context(|| {
                    format!("Failed to build bingo board ending at line {}.", ind)
                })?);
                rows.clear();
            }
            continue;
        }

        rows.push(
            parse_row(line)
                .with_context(|| format!("Failed to parse board row in line {}.", ind + 1))?,
        );
    }
    if !rows.is_empty() {
        boards.push(Board::from_rows(&rows).context("Failed to build the last bingo board.")?);
    }

    let draws = draws.ok_or(Error::MissingDraws)?;
    info!(draws = draws.len(), boards = boards.len(), "read bingo game");
    Ok(Bingo::new(draws, boards))
}

fn parse_draws(s: &str) -> Result<Vec<u32>, Error> {
    s.split(',').map(parse_number).collect()
}

fn parse_row(s: &str) -> Result<Vec<u32>, Error> {
    s.split_whitespace().map(parse_number).collect()
}

fn parse_number(s: &str) -> Result<u32, Error> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DRAWS: &str =
        "7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1";
    const SAMPLE_BOARDS: [&str; 15] = [
        "22 13 17 11  0",
        " 8  2 23  4 24",
        "21  9 14 16  7",
        " 6 10  3 18  5",
        " 1 12 20 15 19",
        " 3 15  0  2 22",
        " 9 18 13 17  5",
        "19  8  7 25 23",
        "20 11 10 24  4",
        "14 21 16 12  6",
        "14 21 17 24  4",
        "10 16 15  9 19",
        "18  8 23 26 20",
        "22 11 13  6  5",
        " 2  0 12  3  7",
    ];

    fn sample() -> Bingo {
        let boards = SAMPLE_BOARDS
            .chunks(BOARD_SIZE)
            .map(|rows| {
                let rows = rows
                    .iter()
                    .map(|r| parse_row(r).unwrap())
                    .collect::<Vec<_>>();
                Board::from_rows(&rows).unwrap()
            })
            .collect();
        Bingo::new(parse_draws(SAMPLE_DRAWS).unwrap(), boards)
    }

    fn numbered_board(start: u32) -> Board {
        let rows = (0..BOARD_SIZE as u32)
            .map(|r| {
                (0..BOARD_SIZE as u32)
                    .map(|c| start + r * BOARD_SIZE as u32 + c)
                    .collect()
            })
            .collect::<Vec<Vec<u32>>>();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn sample_first_winner() {
        let win = sample().first_winner().unwrap();
        assert_eq!(win.board_ind(), 2);
        assert_eq!(win.number(), 24);
        assert_eq!(win.unmarked_sum(), 188);
        assert_eq!(win.score(), 4512);
    }

    #[test]
    fn sample_last_winner() {
        let win = sample().last_winner().unwrap();
        assert_eq!(win.board_ind(), 1);
        assert_eq!(win.number(), 13);
        assert_eq!(win.unmarked_sum(), 148);
        assert_eq!(win.score(), 1924);
    }

    #[test]
    fn marks_without_complete_line_never_win() {
        // Main diagonal of a board numbered 0..25.
        let draws = (0..BOARD_SIZE as u32).map(|i| i * 6).collect();
        let bingo = Bingo::new(draws, vec![numbered_board(0)]);
        assert_eq!(bingo.first_winner(), None);
        assert_eq!(bingo.last_winner(), None);
    }

    #[test]
    fn column_completes_board() {
        let mut board = numbered_board(0);
        for r in 0..4 {
            assert!(!board.mark(r * 5 + 2));
        }
        assert!(!board.mark(99));
        assert!(board.mark(22));
        assert_eq!(board.unmarked_sum(), (0..25).sum::<u64>() - (2 + 7 + 12 + 17 + 22));
    }

    #[test]
    fn large_numbers_sum_without_overflow() {
        let rows = (0..BOARD_SIZE as u32)
            .map(|r| {
                (0..BOARD_SIZE as u32)
                    .map(|c| u32::MAX - (r * BOARD_SIZE as u32 + c))
                    .collect()
            })
            .collect::<Vec<Vec<u32>>>();
        let mut board = Board::from_rows(&rows).unwrap();
        let expected = (0..25u64).map(|k| u64::from(u32::MAX) - k).sum::<u64>();
        assert_eq!(board.unmarked_sum(), expected);

        let bingo = Bingo::new(
            (0..BOARD_SIZE as u32).map(|c| u32::MAX - c).collect(),
            vec![board.clone()],
        );
        let win = bingo.first_winner().unwrap();
        let row_sum = (0..5u64).map(|k| u64::from(u32::MAX) - k).sum::<u64>();
        assert_eq!(win.unmarked_sum(), expected - row_sum);
        assert_eq!(
            win.score(),
            u128::from(expected - row_sum) * u128::from(u32::MAX - 4)
        );

        assert!(!board.mark(u32::MAX));
        assert_eq!(board.unmarked_sum(), expected - u64::from(u32::MAX));
    }

    #[test]
    fn last_winner_requires_every_board() {
        let draws = (0..5).collect();
        let bingo = Bingo::new(draws, vec![numbered_board(0), numbered_board(100)]);
        assert_eq!(bingo.first_winner().map(|w| w.board_ind()), Some(0));
        assert_eq!(bingo.last_winner(), None);
    }

    #[test]
    fn rejects_malformed_boards() {
        let short = vec![vec![1, 2, 3, 4, 5]; 4];
        assert!(matches!(
            Board::from_rows(&short),
            Err(Error::InvalidRowCount(4))
        ));
        let mut narrow = (0..5)
            .map(|r| (0..5).map(|c| r * 5 + c).collect())
            .collect::<Vec<Vec<u32>>>();
        narrow[3].pop();
        assert!(matches!(
            Board::from_rows(&narrow),
            Err(Error::InvalidColumnCount(3, 4))
        ));
        let repeated = vec![vec![1, 2, 3, 4, 5]; 5];
        assert!(matches!(
            Board::from_rows(&repeated),
            Err(Error::DuplicateNumber(1))
        ));
        assert!(matches!(parse_draws("1,2,x"), Err(Error::InvalidNumber(_))));
    }
}
