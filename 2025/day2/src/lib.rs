use std::{
    collections::BTreeSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidRangeText(String),
    ReversedRange(u64, u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRangeText(s) => write!(
                f,
                "Invalid text({}) for ID range, expect two numbers joined by a hyphen.",
                s
            ),
            Error::ReversedRange(start, end) => write!(
                f,
                "The first ID({}) of range is greater than the last one({}).",
                start, end
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// How a digit sequence must repeat to make up an invalid ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatRule {
    Twice,
    AtLeastTwice,
}

impl RepeatRule {
    pub fn matches(&self, id: u64) -> bool {
        let digits = id.to_string();
        let digits = digits.as_bytes();
        let digit_n = digits.len();
        (1..=(digit_n / 2))
            .filter(|block_len| digit_n % block_len == 0)
            .filter(|block_len| match self {
                RepeatRule::Twice => digit_n / block_len == 2,
                RepeatRule::AtLeastTwice => true,
            })
            .any(|block_len| {
                let block = &digits[..block_len];
                digits.chunks(block_len).all(|chunk| chunk == block)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl TryFrom<&str> for IdRange {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").unwrap());

        let caps = RANGE_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidRangeText(value.to_string()))?;
        let start = caps[1]
            .parse::<u64>()
            .map_err(|_| Error::InvalidRangeText(value.to_string()))?;
        let end = caps[2]
            .parse::<u64>()
            .map_err(|_| Error::InvalidRangeText(value.to_string()))?;

        IdRange::new(start, end)
    }
}

impl IdRange {
    pub fn new(start: u64, end: u64) -> Result<Self, Error> {
        if start > end {
            Err(Error::ReversedRange(start, end))
        } else {
            Ok(Self { start, end })
        }
    }

    pub fn invalid_ids(&self, rule: RepeatRule) -> Vec<u64> {
        (self.start..=self.end)
            .filter(|id| rule.matches(*id))
            .collect()
    }
}

/// Sums invalid IDs over all ranges, IDs covered by several ranges count once.
pub fn invalid_id_sum(ranges: &[IdRange], rule: RepeatRule) -> u64 {
    let invalid_ids = ranges
        .iter()
        .flat_map(|range| range.invalid_ids(rule))
        .collect::<BTreeSet<_>>();
    debug!(
        "Found {} invalid ID(s) by rule {:?}.",
        invalid_ids.len(),
        rule
    );

    invalid_ids.into_iter().sum()
}

pub fn read_ranges<P: AsRef<Path>>(path: P) -> Result<Vec<IdRange>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut ranges = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        for text in line.split(',').filter(|s| !s.trim().is_empty()) {
            let range = IdRange::try_from(text)
                .with_context(|| format!("Failed to parse ID range in line {}.", ind + 1))?;
            ranges.push(range);
        }
    }

    Ok(ranges)
}
