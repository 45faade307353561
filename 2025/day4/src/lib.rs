use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, trace};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_n, real_n) => write!(
                f,
                "Expect {} characters per row, given {}.",
                expect_n, real_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) in text of floor.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 8] = [
            Direction::Left,
            Direction::UpLeft,
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::DownRight,
            Direction::Down,
            Direction::DownLeft,
        ];

        &ALL_DIRS
    }
}

#[derive(Debug, Clone, Copy)]
struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn along(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::UpLeft if self.r > 0 && self.c > 0 => {
                Some(Position::new(self.r - 1, self.c - 1))
            }
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::UpRight if self.r > 0 => Some(Position::new(self.r - 1, self.c + 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::DownRight => Some(Position::new(self.r + 1, self.c + 1)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::DownLeft if self.c > 0 => Some(Position::new(self.r + 1, self.c - 1)),
            _ => None,
        }
    }
}

/// Outcome of removing rolls until none is accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clearing {
    rounds_n: usize,
    removed_n: usize,
}

impl Clearing {
    pub fn rounds_n(&self) -> usize {
        self.rounds_n
    }

    pub fn removed_n(&self) -> usize {
        self.removed_n
    }
}

#[derive(Debug, Clone)]
pub struct Floor {
    rolls: Vec<bool>,
    row_n: usize,
    col_n: usize,
}

impl Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.row_n {
            let row = self.rolls[(r * self.col_n)..((r + 1) * self.col_n)]
                .iter()
                .map(|is_roll| if *is_roll { '@' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

impl Floor {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        let mut builder = FloorBuilder::new();
        for row in rows {
            builder.add_row(row.as_ref())?;
        }

        Ok(builder.build())
    }

    pub fn roll_n(&self) -> usize {
        self.rolls.iter().filter(|is_roll| **is_roll).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.iter().all(|is_roll| !*is_roll)
    }

    pub fn accessible_n(&self) -> usize {
        self.accessible_positions().len()
    }

    /// Removes all rolls accessible now at once, returns how many are removed.
    pub fn remove_accessible(&mut self) -> usize {
        let accessible_positions = self.accessible_positions();
        for pos in &accessible_positions {
            let ind = self.pos_to_ind(pos);
            self.rolls[ind] = false;
        }

        accessible_positions.len()
    }

    pub fn clear(&mut self) -> Clearing {
        let mut rounds_n = 0;
        let mut removed_n = 0;
        loop {
            let round_removed_n = self.remove_accessible();
            if round_removed_n == 0 {
                break;
            }

            rounds_n += 1;
            removed_n += round_removed_n;
            debug!("Removed {} roll(s) in round {}.", round_removed_n, rounds_n);
            trace!("Floor after round {}:\n{}", rounds_n, self);
        }

        Clearing {
            rounds_n,
            removed_n,
        }
    }

    fn accessible_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let pos = Position::new(r, c);
                if self.has_roll(&pos) && self.neighbor_roll_n(&pos) < 4 {
                    positions.push(pos);
                }
            }
        }

        positions
    }

    fn neighbor_roll_n(&self, pos: &Position) -> usize {
        Direction::all_dirs()
            .iter()
            .filter_map(|dir| pos.along(*dir))
            .filter(|neighbor| self.has_roll(neighbor))
            .count()
    }

    fn has_roll(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n && self.rolls[self.pos_to_ind(pos)]
    }

    fn pos_to_ind(&self, pos: &Position) -> usize {
        pos.r * self.col_n + pos.c
    }
}

struct FloorBuilder {
    rolls: Vec<bool>,
    row_n: usize,
    col_n: Option<usize>,
}

impl FloorBuilder {
    pub fn new() -> Self {
        Self {
            rolls: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_str: &str) -> Result<(), Error> {
        let char_n = row_str.chars().count();
        if *self.col_n.get_or_insert(char_n) != char_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), char_n));
        }

        for c in row_str.chars() {
            let is_roll = match c {
                '@' => true,
                '.' => false,
                other => return Err(Error::InvalidChar(other)),
            };
            self.rolls.push(is_roll);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Floor {
        Floor {
            rolls: self.rolls,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_floor<P: AsRef<Path>>(path: P) -> Result<Floor> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = FloorBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        builder
            .add_row(line.trim())
            .with_context(|| format!("Failed to add one row(line {}) to floor.", ind + 1))?;
    }

    Ok(builder.build())
}
