use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::debug;

mod cluster;

pub use cluster::{ClusterEngine, ClusterId, Connection};

#[derive(Debug)]
pub enum Error {
    InvalidPointText(String),
    InvalidCoordinateText(String),
    UnknownCluster(ClusterId),
    UnknownNode(usize),
    SelfLoop(usize),
    BrokenMembership(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPointText(s) => write!(
                f,
                "Invalid text({}) for junction box position, expect three comma separated coordinates.",
                s
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
            Error::UnknownCluster(id) => write!(f, "There's no living cluster {}.", id),
            Error::UnknownNode(ind) => write!(f, "There's no node with index {}.", ind),
            Error::SelfLoop(ind) => write!(f, "Can't connect node {} to itself.", ind),
            Error::BrokenMembership(s) => write!(f, "Cluster membership is broken: {}.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    /// How many of the shortest connections to make
    #[arg(short, long, default_value_t = 1000)]
    pub limit: usize,
    /// How many of the largest circuits to multiply
    #[arg(short, long, default_value_t = 3)]
    pub top: usize,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

impl TryFrom<&str> for Point {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let coords = value
            .split(',')
            .map(|s| {
                let s = s.trim();
                s.parse::<i64>()
                    .map_err(|_| Error::InvalidCoordinateText(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        match coords[..] {
            [x, y, z] => Ok(Point::new(x, y, z)),
            _ => Err(Error::InvalidPointText(value.to_string())),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Point {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A connection candidate between two nodes, nodes are indices into the point list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    ends: (usize, usize),
    distance: f64,
}

impl Edge {
    pub fn new(from: usize, to: usize, distance: f64) -> Self {
        Self {
            ends: (from, to),
            distance,
        }
    }

    pub fn between(points: &[Point], from: usize, to: usize) -> Option<Self> {
        let distance = points.get(from)?.distance(points.get(to)?);
        Some(Self::new(from, to, distance))
    }

    pub fn ends(&self) -> (usize, usize) {
        self.ends
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// All unordered pairs of given points, shortest first. Equal distances keep the pair order of input.
pub fn sorted_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = (0..points.len())
        .tuple_combinations::<(usize, usize)>()
        .map(|(from, to)| Edge::new(from, to, points[from].distance(&points[to])))
        .collect::<Vec<_>>();
    edges.sort_by(|left, right| left.distance.total_cmp(&right.distance));
    debug!(
        "Generated {} edge(s) among {} point(s).",
        edges.len(),
        points.len()
    );

    edges
}

/// Product of cluster sizes, nothing to multiply gives 1.
pub fn size_product(sizes: &[usize]) -> usize {
    sizes.iter().product()
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();
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

        let point = Point::try_from(line.as_str())
            .with_context(|| format!("Failed to parse position in line {}.", ind + 1))?;
        points.push(point);
    }

    Ok(points)
}
