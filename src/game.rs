use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    coordinate::Coordinate,
    grid::{Grid, TargetState},
    player::Player,
    setup::FleetSetup,
};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// `turn` fires next.
    InProgress { turn: Side },
    /// The opponent of the winner has no ship cell left, or forfeited.
    Won(Side),
}

/// What a successful shot did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Missed; the turn passes to the other side.
    Miss,
    /// Hit; the same side fires again.
    Hit,
    /// Hit the last ship cell; the shooter wins.
    Victory,
}

impl ShotOutcome {
    pub fn result(self) -> ShotResult {
        match self {
            ShotOutcome::Miss => ShotResult::Miss,
            ShotOutcome::Hit | ShotOutcome::Victory => ShotResult::Hit,
        }
    }
}

/// Turn controller holding both rendered boards.
pub struct GameEngine {
    boards: [Board; 2],
    shots: [usize; 2],
    current: Side,
    winner: Option<Side>,
}

impl GameEngine {
    /// Start a game between two rendered boards; the human fires first.
    pub fn new(human: Board, computer: Board) -> Self {
        Self::with_first(human, computer, Side::Human)
    }

    pub fn with_first(human: Board, computer: Board, first: Side) -> Self {
        Self {
            boards: [human, computer],
            shots: [0; 2],
            current: first,
            winner: None,
        }
    }

    /// Let both players build their fleets, then start the game.
    pub fn from_players(
        human: &mut dyn Player,
        computer: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        let computer_board = computer.place_ships(rng, FleetSetup::new())?;
        let human_board = human.place_ships(rng, FleetSetup::new())?;
        Ok(Self::new(human_board, computer_board))
    }

    /// Side that fires next.
    pub fn current(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(side) => GameStatus::Won(side),
            None => GameStatus::InProgress { turn: self.current },
        }
    }

    /// Full board of `side`, for its owner's display.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Board of `side` as its opponent sees it.
    pub fn hidden_view(&self, side: Side) -> Grid<TargetState> {
        self.boards[side.index()].hidden_view()
    }

    /// Successful shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The current side fires at the opponent's board.
    ///
    /// A rejected shot changes nothing and the same side stays to fire.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }
        let shooter = self.current;
        let target = &mut self.boards[shooter.opponent().index()];
        let result = target.fire(coord)?;
        self.shots[shooter.index()] += 1;
        let outcome = match result {
            ShotResult::Miss => {
                self.current = shooter.opponent();
                ShotOutcome::Miss
            }
            ShotResult::Hit if !target.fleet_alive() => {
                self.winner = Some(shooter);
                ShotOutcome::Victory
            }
            ShotResult::Hit => ShotOutcome::Hit,
        };
        log::debug!("{:?} fired at {}: {:?}", shooter, coord, outcome);
        Ok(outcome)
    }

    /// The current side concedes.
    pub fn forfeit(&mut self) -> Result<Side, BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }
        let winner = self.current.opponent();
        log::info!("{:?} forfeited", self.current);
        self.winner = Some(winner);
        Ok(winner)
    }

    /// Alternate the two players until one fleet is sunk and return the winner.
    pub fn play<'p>(
        &mut self,
        human: &mut (dyn Player + 'p),
        computer: &mut (dyn Player + 'p),
        rng: &mut SmallRng,
    ) -> Result<Side, BoardError> {
        while self.winner.is_none() {
            let shooter = self.current;
            let view = self.hidden_view(shooter.opponent());
            let (player, opponent) = match shooter {
                Side::Human => (&mut *human, &mut *computer),
                Side::Computer => (&mut *computer, &mut *human),
            };
            let Some(coord) = player.select_target(rng, &view) else {
                self.forfeit()?;
                break;
            };
            match self.fire(coord) {
                Ok(outcome) => {
                    player.handle_shot_result(coord, outcome.result());
                    opponent.handle_opponent_shot(coord, outcome.result());
                }
                Err(e @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    player.handle_rejected_shot(coord, e);
                }
                Err(e) => return Err(e),
            }
        }
        let winner = self.winner.ok_or(BoardError::GameOver)?;
        log::info!(
            "{:?} won after {} shots",
            winner,
            self.shots_fired(winner)
        );
        Ok(winner)
    }
}
