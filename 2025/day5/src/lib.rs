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

#[derive(Debug)]
pub enum Error {
    InvalidRangeText(String),
    ReversedRange(u64, u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRangeText(s) => write!(f, "Invalid text({}) for fresh ID range.", s),
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

/// Inclusive range of ingredient IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl TryFrom<&str> for IdRange {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let hyphen_ind = value
            .find('-')
            .ok_or(Error::InvalidRangeText(value.to_string()))?;
        let start = value[..hyphen_ind]
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidRangeText(value.to_string()))?;
        let end = value[(hyphen_ind + 1)..]
            .trim()
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

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn contains(&self, id: u64) -> bool {
        self.start <= id && id <= self.end
    }

    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Merges overlapping or adjacent ranges, the result is sorted and disjoint.
pub fn merge_ranges(ranges: &[IdRange]) -> Vec<IdRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();
    let mut merged: Vec<IdRange> = Vec::new();
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end)
            }
            _ => merged.push(range),
        }
    }
    debug!(
        "Merged {} range(s) into {} range(s).",
        ranges.len(),
        merged.len()
    );

    merged
}

#[derive(Debug)]
pub struct Inventory {
    fresh_ranges: Vec<IdRange>,
    ids: BTreeSet<u64>,
}

impl Inventory {
    pub fn new(fresh_ranges: Vec<IdRange>, ids: &[u64]) -> Self {
        Self {
            fresh_ranges,
            ids: ids.iter().copied().collect(),
        }
    }

    pub fn fresh_ranges(&self) -> &[IdRange] {
        &self.fresh_ranges
    }

    pub fn id_n(&self) -> usize {
        self.ids.len()
    }

    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh_ranges.iter().any(|range| range.contains(id))
    }

    /// How many available ingredients are fresh.
    pub fn fresh_n(&self) -> usize {
        self.ids.iter().filter(|id| self.is_fresh(**id)).count()
    }

    /// How many IDs the fresh ranges cover in all.
    pub fn fresh_id_n(&self) -> u64 {
        merge_ranges(&self.fresh_ranges)
            .iter()
            .map(|range| range.len())
            .sum()
    }
}

pub fn read_inventory<P: AsRef<Path>>(path: P) -> Result<Inventory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut fresh_ranges = Vec::new();
    let mut lines = reader.lines();
    let mut line_ind = 0;
    while let Some(line) = lines.next() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                line_ind + 1,
                path.as_ref().display()
            )
        })?;
        line_ind += 1;
        if line.trim().is_empty() {
            break;
        }

        let range = IdRange::try_from(line.as_str())
            .with_context(|| format!("Failed to parse fresh ID range in line {}.", line_ind))?;
        fresh_ranges.push(range);
    }

    let mut ids = Vec::new();
    for line in lines {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                line_ind + 1,
                path.as_ref().display()
            )
        })?;
        line_ind += 1;
        if line.trim().is_empty() {
            continue;
        }

        let id = line.trim().parse::<u64>().with_context(|| {
            format!(
                "Failed to read ingredient ID from string({}) in line {}.",
                line, line_ind
            )
        })?;
        ids.push(id);
    }

    Ok(Inventory::new(fresh_ranges, &ids))
}
