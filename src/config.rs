/// Number of rows; valid `x` (row) values are `1..=WIDTH`.
pub const WIDTH: i32 = 6;
/// Number of columns; valid `y` (column) values are `1..=HEIGHT`.
pub const HEIGHT: i32 = 6;

/// Ship size paired with the maximum number of ships of that size.
pub const FLEET_QUOTA: [(usize, usize); 3] = [(1, 4), (2, 2), (3, 1)];

/// Ships each side must place before the game can start.
pub const REQUIRED_SHIPS: usize = 4 + 2 + 1;

/// Total number of ship cells in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 * 1 + 2 * 2 + 3;

/// Upper bound on whole-fleet restarts in random placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Maximum number of ships of `size`, or zero for sizes outside the quota.
pub fn quota_for(size: usize) -> usize {
    FLEET_QUOTA
        .iter()
        .find(|&&(s, _)| s == size)
        .map(|&(_, count)| count)
        .unwrap_or(0)
}
