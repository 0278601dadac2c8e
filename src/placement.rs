//! Random fleet placement by exhaustive candidate enumeration.
//!
//! Ships are placed largest first. For each ship every legal position on the
//! current board is collected and one is drawn uniformly. When some ship has no
//! legal position left the whole fleet is discarded and generation starts over.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{FLEET_QUOTA, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::grid::all_coordinates;
use crate::ship::Ship;

/// Unit steps tried from every starting cell.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Random fleet generator with a bounded number of whole-fleet restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementGenerator {
    max_attempts: usize,
}

impl PlacementGenerator {
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_PLACEMENT_ATTEMPTS)
    }

    /// `max_attempts` is clamped to at least one.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Replace the board's fleet with a complete random one.
    ///
    /// On failure the board is left with an empty fleet.
    pub fn generate_fleet<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        for attempt in 1..=self.max_attempts {
            board.clear_ships();
            match Self::try_generate(board, rng) {
                Ok(()) => {
                    log::debug!("fleet placed after {} attempt(s)", attempt);
                    return Ok(());
                }
                Err(size) => {
                    log::debug!(
                        "attempt {}: no room left for a ship of size {}, restarting",
                        attempt,
                        size
                    );
                }
            }
        }
        board.clear_ships();
        log::warn!("giving up on fleet placement after {} attempts", self.max_attempts);
        Err(BoardError::PlacementFailed {
            attempts: self.max_attempts,
        })
    }

    /// One pass over the quota. `Err` carries the size that could not be placed.
    fn try_generate<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), usize> {
        let mut quota = FLEET_QUOTA;
        quota.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        for (size, count) in quota {
            for _ in 0..count {
                let candidates = Self::candidates(board, size);
                if candidates.is_empty() {
                    return Err(size);
                }
                let ship = candidates[rng.random_range(0..candidates.len())];
                board.try_add_ship(ship).map_err(|_| size)?;
            }
        }
        Ok(())
    }

    /// Every ship of `size` that could legally be added to `board` right now.
    ///
    /// The same footprint can be reached from both of its ends (and, for size
    /// one, from all four directions); duplicates are kept so that the draw
    /// matches a plain scan over start cells and directions.
    pub fn candidates(board: &mut Board, size: usize) -> Vec<Ship> {
        if size == 0 {
            return Vec::new();
        }
        let reach = size as i32 - 1;
        let mut candidates = Vec::new();
        for start in all_coordinates() {
            for (dx, dy) in DIRECTIONS {
                let finish: Coordinate = start.offset(dx, dy, reach);
                let Ok(ship) = Ship::new(start, finish) else {
                    continue;
                };
                if board.can_place(ship) {
                    candidates.push(ship);
                }
            }
        }
        candidates
    }
}

impl Default for PlacementGenerator {
    fn default() -> Self {
        Self::new()
    }
}
