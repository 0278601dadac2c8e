//! Ships: straight runs of 1 to 3 cells built from two endpoints.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Largest `|dx| + |dy|` between the two endpoints of a ship.
const MAX_SPAN: u32 = 2;

/// Orientation of a ship longer than one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Cells share the same `x`.
    Horizontal,
    /// Cells share the same `y`.
    Vertical,
}

/// A ship identified by its normalized endpoints.
///
/// Two ships with the same footprint compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    start: Coordinate,
    finish: Coordinate,
}

impl Ship {
    /// Build a ship spanning `start` to `finish` inclusive, in either order.
    pub fn new(start: Coordinate, finish: Coordinate) -> Result<Self, BoardError> {
        if start.x != finish.x && start.y != finish.y {
            return Err(BoardError::Geometry);
        }
        let span = start.x.abs_diff(finish.x) + start.y.abs_diff(finish.y);
        if span > MAX_SPAN {
            return Err(BoardError::Geometry);
        }
        let (start, finish) = if start <= finish {
            (start, finish)
        } else {
            (finish, start)
        };
        Ok(Ship { start, finish })
    }

    /// Single-cell ship at `at`.
    pub fn single(at: Coordinate) -> Self {
        Ship {
            start: at,
            finish: at,
        }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn finish(&self) -> Coordinate {
        self.finish
    }

    /// Number of cells, 1 to 3.
    pub fn size(&self) -> usize {
        ((self.finish.x - self.start.x) + (self.finish.y - self.start.y) + 1) as usize
    }

    /// `None` for single-cell ships.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.start == self.finish {
            None
        } else if self.start.x == self.finish.x {
            Some(Orientation::Horizontal)
        } else {
            Some(Orientation::Vertical)
        }
    }

    /// Cells from `start` to `finish` in order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dx, dy) = match self.orientation() {
            Some(Orientation::Vertical) => (1, 0),
            _ => (0, 1),
        };
        (0..self.size() as i32).map(move |i| self.start.offset(dx, dy, i))
    }

    /// Cells collected into a vector.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.cells().collect()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.start.x <= coord.x
            && coord.x <= self.finish.x
            && self.start.y <= coord.y
            && coord.y <= self.finish.y
    }

    /// Smallest Chebyshev distance between any cell of `self` and any cell of `other`.
    pub fn distance(&self, other: &Ship) -> u32 {
        self.cells()
            .flat_map(|a| other.cells().map(move |b| a.distance(&b)))
            .min()
            .unwrap_or(u32::MAX)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship[{} - {}]", self.start, self.finish)
    }
}
