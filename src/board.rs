//! Board state: the fleet, its placement rules, and the cell grid shots resolve against.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::common::{BoardError, ShotResult};
use crate::config::{quota_for, FLEET_QUOTA, REQUIRED_SHIPS};
use crate::coordinate::Coordinate;
use crate::grid::{in_bounds, CellState, Grid, TargetState};
use crate::ship::Ship;

/// Minimum Chebyshev distance between cells of two different ships.
const MIN_SHIP_DISTANCE: u32 = 2;

/// A player's board.
///
/// Ships are added and removed during the build phase; [`Board::render`] then
/// stamps them into the grid and from that point on only [`Board::fire`]
/// changes cell contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    fleet: BTreeSet<Ship>,
    cells: Grid<CellState>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            fleet: BTreeSet::new(),
            cells: Grid::new(),
        }
    }

    /// Build a board from a prepared fleet, rejecting it if any placement rule fails.
    pub fn with_ships<I: IntoIterator<Item = Ship>>(ships: I) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for ship in ships {
            board.try_add_ship(ship)?;
        }
        Ok(board)
    }

    /// Ships currently on the board, in footprint order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.fleet.iter()
    }

    pub fn ship_count(&self) -> usize {
        self.fleet.len()
    }

    pub fn required_ship_count(&self) -> usize {
        REQUIRED_SHIPS
    }

    /// Number of placed ships of `size`.
    pub fn count_of_size(&self, size: usize) -> usize {
        self.fleet.iter().filter(|s| s.size() == size).count()
    }

    /// `true` when every size has reached its quota.
    pub fn is_complete(&self) -> bool {
        FLEET_QUOTA
            .iter()
            .all(|&(size, count)| self.count_of_size(size) == count)
    }

    /// Add `ship`, keeping every placement rule intact.
    ///
    /// On failure the board is left exactly as it was.
    pub fn try_add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let size = ship.size();
        if self.count_of_size(size) >= quota_for(size) {
            return Err(BoardError::CapacityExceeded { size });
        }
        if !self.fleet.insert(ship) {
            return Err(BoardError::DuplicateShip);
        }
        if let Err(e) = self.validate() {
            self.fleet.remove(&ship);
            return Err(e);
        }
        log::trace!("added {}", ship);
        Ok(())
    }

    pub fn remove_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        if self.fleet.remove(ship) {
            log::trace!("removed {}", ship);
            Ok(())
        } else {
            Err(BoardError::NotFound)
        }
    }

    /// Whether `ship` could be added right now. Leaves the board unchanged.
    pub fn can_place(&mut self, ship: Ship) -> bool {
        match self.try_add_ship(ship) {
            Ok(()) => {
                self.fleet.remove(&ship);
                true
            }
            Err(_) => false,
        }
    }

    /// Check bounds, spacing and quota over the whole fleet.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.fleet.iter().flat_map(|s| s.cells()).any(|c| !in_bounds(c)) {
            return Err(BoardError::OutOfBounds);
        }
        for (i, first) in self.fleet.iter().enumerate() {
            for second in self.fleet.iter().skip(i + 1) {
                if first.distance(second) < MIN_SHIP_DISTANCE {
                    return Err(BoardError::TooClose);
                }
            }
        }
        for &(size, _) in FLEET_QUOTA.iter() {
            if self.count_of_size(size) > quota_for(size) {
                return Err(BoardError::CapacityExceeded { size });
            }
        }
        if let Some(ship) = self.fleet.iter().find(|s| quota_for(s.size()) == 0) {
            return Err(BoardError::CapacityExceeded { size: ship.size() });
        }
        Ok(())
    }

    /// Remove every ship and reset the grid.
    pub fn clear_ships(&mut self) {
        self.fleet.clear();
        self.cells = Grid::new();
    }

    /// Stamp the fleet into the grid, wiping any previous cell contents.
    pub fn render(&mut self) {
        let mut cells = Grid::new();
        for coord in self.fleet.iter().flat_map(|s| s.cells()) {
            cells.set(coord, CellState::Ship);
        }
        self.cells = cells;
    }

    /// Shoot at `coord`. Each cell can be resolved only once.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        let state = self.cells.get(coord).ok_or(BoardError::OutOfBounds)?;
        let (next, result) = match state {
            CellState::Hit | CellState::Miss => return Err(BoardError::AlreadyTargeted),
            CellState::Ship => (CellState::Hit, ShotResult::Hit),
            CellState::Empty => (CellState::Miss, ShotResult::Miss),
        };
        self.cells.set(coord, next);
        Ok(result)
    }

    /// `true` if `coord` is on the board and has not been shot at.
    pub fn is_targetable(&self, coord: Coordinate) -> bool {
        self.cells
            .get(coord)
            .map_or(false, |state| !state.is_resolved())
    }

    /// `true` while any rendered ship cell is still unhit.
    pub fn fleet_alive(&self) -> bool {
        self.cells.iter().any(|(_, state)| state == CellState::Ship)
    }

    /// True cell contents. Only for the board's owner.
    pub fn cells(&self) -> &Grid<CellState> {
        &self.cells
    }

    /// What the opponent may see: hits, misses, and unknown everywhere else.
    pub fn hidden_view(&self) -> Grid<TargetState> {
        self.cells.map(CellState::masked)
    }

    /// Number of cells that have been shot at.
    pub fn shots_taken(&self) -> usize {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_resolved())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  alive: {},\n  shots: {}\n}}",
            self.fleet,
            self.fleet_alive(),
            self.shots_taken()
        )
    }
}
