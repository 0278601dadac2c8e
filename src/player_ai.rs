use crate::{
    ai,
    board::Board,
    common::BoardError,
    coordinate::Coordinate,
    grid::{Grid, TargetState},
    placement::PlacementGenerator,
    setup::FleetSetup,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player: random fleet, uniformly random shots.
pub struct AiPlayer {
    generator: PlacementGenerator,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            generator: PlacementGenerator::new(),
        }
    }

    pub fn with_generator(generator: PlacementGenerator) -> Self {
        Self { generator }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        mut setup: FleetSetup,
    ) -> Result<Board, BoardError> {
        setup.randomize(&self.generator, rng)?;
        setup.finish().map_err(|(_, e)| e)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Grid<TargetState>,
    ) -> Option<Coordinate> {
        ai::select_target(view, rng)
    }
}
