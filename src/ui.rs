#![cfg(feature = "std")]

//! Text rendering of boards.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    config::HEIGHT,
    grid::{CellState, Grid, TargetState},
};

const SHIP: char = '■';
const EMPTY: char = 'О';
const HIT: char = 'X';
const MISS: char = 'T';
const HIDDEN: char = '-';

pub fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => EMPTY,
        CellState::Ship => SHIP,
        CellState::Hit => HIT,
        CellState::Miss => MISS,
    }
}

pub fn target_symbol(state: TargetState) -> char {
    match state {
        TargetState::Unknown => HIDDEN,
        TargetState::Hit => HIT,
        TargetState::Miss => MISS,
    }
}

fn render_with<T: Copy>(grid: &Grid<T>, symbol: impl Fn(T) -> char) -> String {
    let mut out = String::new();
    out.push_str("  |");
    for y in 1..=HEIGHT {
        let _ = write!(out, " {}", y);
    }
    out.push('\n');
    let _ = writeln!(out, "--+{}", "--".repeat(HEIGHT as usize));
    for (i, row) in grid.rows().enumerate() {
        let _ = write!(out, "{} |", i + 1);
        for &cell in row.iter() {
            let _ = write!(out, " {}", symbol(cell));
        }
        out.push('\n');
    }
    out
}

/// The owner's board with ships shown.
pub fn render_board(cells: &Grid<CellState>) -> String {
    render_with(cells, cell_symbol)
}

/// The opponent's board: hits, misses and hidden cells only.
pub fn render_hidden(view: &Grid<TargetState>) -> String {
    render_with(view, target_symbol)
}
