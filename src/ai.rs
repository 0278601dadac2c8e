//! Computer targeting: a uniform draw over cells that have not been shot at.
//! Stateless; everything it knows comes from the opponent's masked view.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::Board,
    coordinate::Coordinate,
    grid::{all_coordinates, Grid, TargetState},
};

/// Cells of the masked view that have not been shot at yet.
pub fn untried_cells(view: &Grid<TargetState>) -> Vec<Coordinate> {
    view.iter()
        .filter(|&(_, state)| state == TargetState::Unknown)
        .map(|(coord, _)| coord)
        .collect()
}

/// Pick one untried cell uniformly at random, or `None` when every cell is resolved.
pub fn select_target<R: Rng + ?Sized>(
    view: &Grid<TargetState>,
    rng: &mut R,
) -> Option<Coordinate> {
    pick(&untried_cells(view), rng)
}

/// Same draw as [`select_target`], asking the board which cells are targetable.
pub fn select_target_on<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    let candidates: Vec<Coordinate> = all_coordinates()
        .filter(|&c| board.is_targetable(c))
        .collect();
    pick(&candidates, rng)
}

fn pick<R: Rng + ?Sized>(candidates: &[Coordinate], rng: &mut R) -> Option<Coordinate> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
