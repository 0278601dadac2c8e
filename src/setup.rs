//! Build phase: a board that ships can be added to and removed from until it
//! is finished and handed over for play.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::placement::PlacementGenerator;
use crate::ship::Ship;

/// Actions available to the player during the build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    /// Replace the fleet with a random one.
    Randomize,
    /// Add one ship.
    AddShip,
    /// Remove one ship.
    DeleteShip,
    /// Render the fleet and start playing.
    Finish,
}

impl SetupAction {
    pub fn label(&self) -> &'static str {
        match self {
            SetupAction::Randomize => "generate a random fleet",
            SetupAction::AddShip => "add a ship",
            SetupAction::DeleteShip => "delete a ship",
            SetupAction::Finish => "finish building",
        }
    }
}

/// Board under construction.
#[derive(Debug, Clone, Default)]
pub struct FleetSetup {
    board: Board,
}

impl FleetSetup {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Read-only view of the board being built.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.board.try_add_ship(ship)
    }

    pub fn delete_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.board.remove_ship(ship)
    }

    /// Remove every ship placed so far.
    pub fn clear(&mut self) {
        self.board.clear_ships();
    }

    /// Replace the fleet with a random complete one.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        generator: &PlacementGenerator,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        generator.generate_fleet(&mut self.board, rng)
    }

    /// `true` once the fleet has every required ship.
    pub fn ready(&self) -> bool {
        self.board.is_complete()
    }

    /// Menu entries that make sense for the current fleet.
    pub fn actions(&self) -> Vec<SetupAction> {
        let mut actions = Vec::with_capacity(4);
        actions.push(SetupAction::Randomize);
        if self.board.ship_count() < self.board.required_ship_count() {
            actions.push(SetupAction::AddShip);
        }
        if self.board.ship_count() > 0 {
            actions.push(SetupAction::DeleteShip);
        }
        if self.ready() {
            actions.push(SetupAction::Finish);
        }
        actions
    }

    /// Render the fleet and return the board for play. Requires a complete fleet;
    /// otherwise the setup is handed back unchanged along with the reason.
    pub fn finish(self) -> Result<Board, (Self, BoardError)> {
        if !self.ready() {
            let err = BoardError::FleetIncomplete {
                placed: self.board.ship_count(),
                required: self.board.required_ship_count(),
            };
            return Err((self, err));
        }
        let mut board = self.board;
        board.render();
        Ok(board)
    }
}
