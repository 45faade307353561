use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    EmptyWorksheet,
    InvalidOperationChar(char),
    InvalidNumberText(String),
    NoOperation(usize),
    NoNumber(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyWorksheet => write!(f, "Given worksheet has no line."),
            Error::InvalidOperationChar(c) => {
                write!(f, "Invalid character({}) for operation, expect + or *.", c)
            }
            Error::InvalidNumberText(s) => write!(f, "Invalid text({}) for number.", s),
            Error::NoOperation(c) => write!(
                f,
                "Can't find operation for problem starting at column {}.",
                c
            ),
            Error::NoNumber(c) => write!(
                f,
                "Can't find any number for problem starting at column {}.",
                c
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl TryFrom<char> for Operation {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operation::Add),
            '*' => Ok(Operation::Multiply),
            other => Err(Error::InvalidOperationChar(other)),
        }
    }
}

impl Operation {
    pub fn apply(&self, numbers: &[u64]) -> u64 {
        match self {
            Operation::Add => numbers.iter().sum(),
            Operation::Multiply => numbers.iter().product(),
        }
    }
}

/// Direction the digits of a problem's numbers are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Rows,
    Columns,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operation: Operation,
    numbers: Vec<u64>,
}

impl Problem {
    pub fn new(operation: Operation, numbers: Vec<u64>) -> Self {
        Self { operation, numbers }
    }

    pub fn solve(&self) -> u64 {
        self.operation.apply(&self.numbers)
    }
}

#[derive(Debug)]
pub struct Worksheet {
    number_rows: Vec<Vec<char>>,
    operation_row: Vec<char>,
    col_n: usize,
}

impl Worksheet {
    /// The last line holds the operations, shorter lines are padded with spaces.
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        let (operation_line, number_lines) = lines.split_last().ok_or(Error::EmptyWorksheet)?;
        let col_n = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let pad = |line: &str| {
            let mut row = line.chars().collect::<Vec<_>>();
            row.resize(col_n, ' ');
            row
        };

        Ok(Self {
            number_rows: number_lines.iter().map(|line| pad(line.as_ref())).collect(),
            operation_row: pad(operation_line.as_ref()),
            col_n,
        })
    }

    pub fn problems(&self, reading: Reading) -> Result<Vec<Problem>, Error> {
        let problems = self
            .blocks()
            .into_iter()
            .map(|block| self.problem_in(block, reading))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Found {} problem(s) reading by {:?}.",
            problems.len(),
            reading
        );

        Ok(problems)
    }

    fn problem_in(&self, block: Range<usize>, reading: Reading) -> Result<Problem, Error> {
        let operation = self.operation_row[block.clone()]
            .iter()
            .find(|c| !c.is_whitespace())
            .ok_or(Error::NoOperation(block.start))
            .and_then(|c| Operation::try_from(*c))?;
        let texts = match reading {
            Reading::Rows => self
                .number_rows
                .iter()
                .map(|row| row[block.clone()].iter().collect::<String>())
                .collect::<Vec<_>>(),
            Reading::Columns => block
                .clone()
                .rev()
                .map(|c| self.number_rows.iter().map(|row| row[c]).collect::<String>())
                .collect::<Vec<_>>(),
        };
        let numbers = texts
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(|text| {
                text.parse::<u64>()
                    .map_err(|_| Error::InvalidNumberText(text.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if numbers.is_empty() {
            return Err(Error::NoNumber(block.start));
        }

        Ok(Problem::new(operation, numbers))
    }

    /// Column spans of problems, problems are separated by columns of spaces only.
    fn blocks(&self) -> Vec<Range<usize>> {
        let mut blocks = Vec::new();
        let mut block_start = None;
        for c in 0..=self.col_n {
            let is_blank = c == self.col_n || self.is_blank_column(c);
            match (block_start, is_blank) {
                (None, false) => block_start = Some(c),
                (Some(start), true) => {
                    blocks.push(start..c);
                    block_start = None;
                }
                _ => (),
            }
        }

        blocks
    }

    fn is_blank_column(&self, c: usize) -> bool {
        self.number_rows
            .iter()
            .chain(std::iter::once(&self.operation_row))
            .all(|row| row[c].is_whitespace())
    }
}

pub fn grand_total(problems: &[Problem]) -> u64 {
    problems.iter().map(|problem| problem.solve()).sum()
}

pub fn read_worksheet<P: AsRef<Path>>(path: P) -> Result<Worksheet> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        lines.push(line);
    }
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    Worksheet::new(&lines[..]).context("Failed to build worksheet.")
}
