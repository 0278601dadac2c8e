use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    coordinate::Coordinate,
    grid::{Grid, TargetState},
    setup::FleetSetup,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Build a complete fleet and return the rendered board.
    fn place_ships(&mut self, rng: &mut SmallRng, setup: FleetSetup) -> Result<Board, BoardError>;

    /// Choose the next cell to fire at from the opponent's masked board.
    /// `None` means the player gives up (e.g. input was closed).
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Grid<TargetState>,
    ) -> Option<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coordinate, _result: ShotResult) {}

    /// Inform the player that its chosen cell was rejected; it will be asked again.
    fn handle_rejected_shot(&mut self, _coord: Coordinate, _error: BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coordinate, _result: ShotResult) {}
}
