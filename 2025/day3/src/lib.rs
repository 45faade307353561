use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidJoltageChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidJoltageChar(c) => {
                write!(f, "Invalid character({}) for battery joltage, expect 1 to 9.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    /// How many batteries to turn on in each bank
    #[arg(short, long, default_value_t = 12)]
    pub digits: usize,
}

#[derive(Debug, Clone)]
pub struct Bank {
    joltages: Vec<u8>,
}

impl TryFrom<&str> for Bank {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let joltages = value
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .filter(|d| *d > 0)
                    .map(|d| d as u8)
                    .ok_or(Error::InvalidJoltageChar(c))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { joltages })
    }
}

impl Bank {
    pub fn len(&self) -> usize {
        self.joltages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joltages.is_empty()
    }

    /// The largest number made of `digit_n` batteries in their bank order.
    pub fn max_joltage(&self, digit_n: usize) -> Option<u64> {
        if digit_n > self.joltages.len() {
            return None;
        }

        let mut joltage = 0;
        let mut start = 0;
        for left_n in (0..digit_n).rev() {
            // Keep enough batteries behind for the rest digits.
            let window = &self.joltages[start..(self.joltages.len() - left_n)];
            let (offset, max) = window
                .iter()
                .enumerate()
                .fold((0, 0), |best, (ind, j)| if *j > best.1 { (ind, *j) } else { best });
            joltage = joltage * 10 + u64::from(max);
            start += offset + 1;
        }

        Some(joltage)
    }
}

pub fn read_banks<P: AsRef<Path>>(path: P) -> Result<Vec<Bank>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, l)| l.as_ref().map(|s| !s.trim().is_empty()).unwrap_or(true))
        .map(|(ind, l)| {
            l.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Bank::try_from(s.as_str())
                    .with_context(|| format!("Failed to parse battery bank from string({}).", s))
            })
        })
        .collect()
}
