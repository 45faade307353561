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
    NoStart,
    MultipleStarts(Position, Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_n, real_n) => write!(
                f,
                "Expect {} characters per row, given {}.",
                expect_n, real_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) in text of manifold.", c),
            Error::NoStart => write!(f, "Can't find start(S) in manifold."),
            Error::MultipleStarts(first, second) => write!(
                f,
                "Found more than one start in manifold, at {} and {}.",
                first, second
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    /// Print the manifold with traced beams
    #[arg(short, long)]
    pub show: bool,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Start,
    Splitter,
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '.' => Ok(Cell::Empty),
            'S' => Ok(Cell::Start),
            '^' => Ok(Cell::Splitter),
            other => Err(Error::InvalidChar(other)),
        }
    }
}

impl From<Cell> for char {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::Splitter => '^',
        }
    }
}

/// Result of sending one beam from the start down through the manifold.
#[derive(Debug, Clone)]
pub struct BeamTrace {
    splits_n: usize,
    timelines_n: u64,
    beams: Vec<bool>,
}

impl BeamTrace {
    /// How many splitters are hit by any beam.
    pub fn splits_n(&self) -> usize {
        self.splits_n
    }

    /// How many distinct paths a single particle could take.
    pub fn timelines_n(&self) -> u64 {
        self.timelines_n
    }
}

#[derive(Debug)]
pub struct Manifold {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
    start: Position,
}

impl Manifold {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        let mut builder = ManifoldBuilder::new();
        for row in rows {
            builder.add_row(row.as_ref())?;
        }

        builder.build()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn trace(&self) -> BeamTrace {
        let mut beams = vec![false; self.cells.len()];
        let mut splits_n = 0;
        let mut exited_n = 0u64;
        // Timelines arriving at each column of the current row.
        let mut timelines = vec![0u64; self.col_n];
        timelines[self.start.c] = 1;
        for r in (self.start.r + 1)..self.row_n {
            let mut next_timelines = vec![0u64; self.col_n];
            for (c, timeline_n) in timelines.iter().enumerate() {
                if *timeline_n == 0 {
                    continue;
                }

                if self.cells[self.pos_to_ind(r, c)] != Cell::Splitter {
                    next_timelines[c] += timeline_n;
                    beams[self.pos_to_ind(r, c)] = true;
                    continue;
                }

                splits_n += 1;
                for side_c in [c.checked_sub(1), Some(c + 1)] {
                    match side_c.filter(|side_c| *side_c < self.col_n) {
                        Some(side_c) => {
                            next_timelines[side_c] += timeline_n;
                            beams[self.pos_to_ind(r, side_c)] = true;
                        }
                        None => exited_n += timeline_n,
                    }
                }
            }
            timelines = next_timelines;
            trace!("Timelines after row {}: {:?}", r, timelines);
        }

        let timelines_n = timelines.iter().sum::<u64>() + exited_n;
        debug!(
            "Beam is split {} time(s), {} timeline(s) in the end, {} of them left from sides.",
            splits_n, timelines_n, exited_n
        );

        BeamTrace {
            splits_n,
            timelines_n,
            beams,
        }
    }

    /// Draws the manifold, empty cells passed by beams become `|`.
    pub fn render(&self, trace: &BeamTrace) -> String {
        let mut text = String::with_capacity(self.row_n * (self.col_n + 1));
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let ind = self.pos_to_ind(r, c);
                let cell = self.cells[ind];
                if cell == Cell::Empty && trace.beams.get(ind).copied().unwrap_or(false) {
                    text.push('|');
                } else {
                    text.push(char::from(cell));
                }
            }
            text.push('\n');
        }

        text
    }

    fn pos_to_ind(&self, r: usize, c: usize) -> usize {
        r * self.col_n + c
    }
}

struct ManifoldBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
    start: Option<Position>,
}

impl ManifoldBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
            start: None,
        }
    }

    pub fn add_row(&mut self, row_str: &str) -> Result<(), Error> {
        let char_n = row_str.chars().count();
        if *self.col_n.get_or_insert(char_n) != char_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), char_n));
        }

        for (c, ch) in row_str.chars().enumerate() {
            let cell = Cell::try_from(ch)?;
            if cell == Cell::Start {
                let pos = Position::new(self.row_n, c);
                if let Some(first) = self.start {
                    return Err(Error::MultipleStarts(first, pos));
                }
                self.start = Some(pos);
            }
            self.cells.push(cell);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Manifold, Error> {
        let start = self.start.ok_or(Error::NoStart)?;

        Ok(Manifold {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            start,
        })
    }
}

pub fn read_manifold<P: AsRef<Path>>(path: P) -> Result<Manifold> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = ManifoldBuilder::new();
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
            .with_context(|| format!("Failed to add one row(line {}) to manifold.", ind + 1))?;
    }

    builder.build().context("Failed to build manifold.")
}
