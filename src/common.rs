//! Common types for the game: board errors and shot results.

/// Result of a shot at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// The cell held part of a ship.
    Hit,
    /// The cell was empty water.
    Miss,
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Errors returned by ship construction, board mutation and the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Endpoints do not describe a straight ship of size 1 to 3.
    Geometry,
    /// A ship cell or a shot lies outside the board.
    OutOfBounds,
    /// Two ships touch, including diagonally.
    TooClose,
    /// The fleet already holds the maximum number of ships of this size.
    CapacityExceeded { size: usize },
    /// A ship with the same footprint is already on the board.
    DuplicateShip,
    /// The ship to remove is not on the board.
    NotFound,
    /// The cell was already hit or missed.
    AlreadyTargeted,
    /// Random placement gave up after this many whole-fleet attempts.
    PlacementFailed { attempts: usize },
    /// The fleet is not complete yet.
    FleetIncomplete { placed: usize, required: usize },
    /// The game already has a winner.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Geometry => write!(
                f,
                "Ship must be a horizontal or vertical line of 1 to 3 cells"
            ),
            BoardError::OutOfBounds => write!(f, "Position is outside the board"),
            BoardError::TooClose => write!(
                f,
                "Ships must be at least one cell apart, including diagonals"
            ),
            BoardError::CapacityExceeded { size } => {
                write!(f, "Too many ships of size {}", size)
            }
            BoardError::DuplicateShip => write!(f, "This ship is already on the board"),
            BoardError::NotFound => write!(f, "There is no such ship on the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell has already been shot at"),
            BoardError::PlacementFailed { attempts } => {
                write!(f, "Unable to place the fleet after {} attempts", attempts)
            }
            BoardError::FleetIncomplete { placed, required } => {
                write!(f, "Fleet is incomplete: {} of {} ships placed", placed, required)
            }
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
