//! Fixed-size cell grid addressed by 1-based [`Coordinate`]s.

use core::ops::Index;

use crate::config::{HEIGHT, WIDTH};
use crate::coordinate::Coordinate;

const ROWS: usize = WIDTH as usize;
const COLS: usize = HEIGHT as usize;

/// True content of a cell, visible only to the board owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// `true` once the cell has been shot at.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// What the opponent is allowed to see of this cell.
    pub fn masked(self) -> TargetState {
        match self {
            CellState::Hit => TargetState::Hit,
            CellState::Miss => TargetState::Miss,
            CellState::Empty | CellState::Ship => TargetState::Unknown,
        }
    }
}

/// A cell as seen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TargetState {
    #[default]
    Unknown,
    Hit,
    Miss,
}

/// `WIDTH × HEIGHT` grid of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [[T; COLS]; ROWS],
}

impl<T: Copy + Default> Grid<T> {
    pub fn new() -> Self {
        Grid {
            cells: [[T::default(); COLS]; ROWS],
        }
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `true` when `coord` lies within `[1..WIDTH] × [1..HEIGHT]`.
pub fn in_bounds(coord: Coordinate) -> bool {
    (1..=WIDTH).contains(&coord.x) && (1..=HEIGHT).contains(&coord.y)
}

/// Every in-bounds coordinate, row by row.
pub fn all_coordinates() -> impl Iterator<Item = Coordinate> {
    (1..=WIDTH).flat_map(|x| (1..=HEIGHT).map(move |y| Coordinate::new(x, y)))
}

impl<T: Copy> Grid<T> {
    fn slot(coord: Coordinate) -> Option<(usize, usize)> {
        if in_bounds(coord) {
            Some(((coord.x - 1) as usize, (coord.y - 1) as usize))
        } else {
            None
        }
    }

    pub fn get(&self, coord: Coordinate) -> Option<T> {
        Self::slot(coord).map(|(r, c)| self.cells[r][c])
    }

    /// Overwrite a cell; returns `false` if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coordinate, value: T) -> bool {
        match Self::slot(coord) {
            Some((r, c)) => {
                self.cells[r][c] = value;
                true
            }
            None => false,
        }
    }

    /// Every cell paired with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, T)> + '_ {
        all_coordinates().map(move |c| (c, self[c]))
    }

    /// Rows from `x = 1` to `x = WIDTH`.
    pub fn rows(&self) -> impl Iterator<Item = &[T; COLS]> + '_ {
        self.cells.iter()
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            cells: core::array::from_fn(|r| core::array::from_fn(|c| f(self.cells[r][c]))),
        }
    }
}

impl<T: Copy> Index<Coordinate> for Grid<T> {
    type Output = T;

    /// Panics if `coord` is out of bounds; use [`Grid::get`] for untrusted input.
    fn index(&self, coord: Coordinate) -> &T {
        let (r, c) = Self::slot(coord).expect("coordinate out of bounds");
        &self.cells[r][c]
    }
}
