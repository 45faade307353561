use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidRotationText(String),
    EmptyDial,
    StartOutOfDial(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRotationText(s) => write!(
                f,
                "Invalid text({}) for rotation, expect L or R followed by click count.",
                s
            ),
            Error::EmptyDial => write!(f, "Dial should have at least one position."),
            Error::StartOutOfDial(start, size) => write!(
                f,
                "Start position({}) is out of dial with {} positions.",
                start, size
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Position the dial points at before the first rotation
    #[arg(long, default_value_t = 50)]
    pub start: usize,
    /// Number of positions on the dial
    #[arg(long, default_value_t = 100)]
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    turn: Turn,
    clicks: usize,
}

impl TryFrom<&str> for Rotation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ROTATION_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([LR])(\d+)$").unwrap());

        let caps = ROTATION_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidRotationText(value.to_string()))?;
        let turn = if &caps[1] == "L" {
            Turn::Left
        } else {
            Turn::Right
        };
        let clicks = caps[2]
            .parse::<usize>()
            .map_err(|_| Error::InvalidRotationText(value.to_string()))?;

        Ok(Rotation::new(turn, clicks))
    }
}

impl Rotation {
    pub fn new(turn: Turn, clicks: usize) -> Self {
        Self { turn, clicks }
    }
}

#[derive(Debug, Clone)]
pub struct Dial {
    pos: usize,
    size: usize,
}

impl Dial {
    pub fn new(start: usize, size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::EmptyDial);
        }
        if start >= size {
            return Err(Error::StartOutOfDial(start, size));
        }

        Ok(Self { pos: start, size })
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns how many times the dial points at 0 while rotating, the stop included.
    pub fn rotate(&mut self, rotation: &Rotation) -> usize {
        let clicks = rotation.clicks;
        let zero_n = match rotation.turn {
            Turn::Right => (self.pos + clicks) / self.size,
            Turn::Left if self.pos == 0 => clicks / self.size,
            Turn::Left if clicks >= self.pos => 1 + (clicks - self.pos) / self.size,
            Turn::Left => 0,
        };
        let offset = clicks % self.size;
        self.pos = match rotation.turn {
            Turn::Right => (self.pos + offset) % self.size,
            Turn::Left => (self.pos + self.size - offset) % self.size,
        };
        trace!(
            "Rotate {:?}, stop at {}, pass 0 for {} time(s).",
            rotation,
            self.pos,
            zero_n
        );

        zero_n
    }
}

pub fn read_rotations<P: AsRef<Path>>(path: P) -> Result<Vec<Rotation>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rotations = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let rotation = Rotation::try_from(line.as_str())
            .with_context(|| format!("Failed to parse rotation in line {}.", ind + 1))?;
        rotations.push(rotation);
    }

    Ok(rotations)
}
