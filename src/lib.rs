#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
mod placement;
mod player;
mod player_ai;
mod setup;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{select_target, select_target_on, untried_cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use setup::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
