#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    config::FLEET_QUOTA,
    coordinate::Coordinate,
    grid::{CellState, Grid, TargetState},
    placement::PlacementGenerator,
    setup::{FleetSetup, SetupAction},
    ship::Ship,
    ui::{render_board, render_hidden},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Console player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    generator: PlacementGenerator,
    own: Grid<CellState>,
    closed: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            generator: PlacementGenerator::new(),
            own: Grid::new(),
            closed: false,
        }
    }

    /// Our own board as last seen, with the opponent's shots applied.
    pub fn own_cells(&self) -> &Grid<CellState> {
        &self.own
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            self.close(e);
        }
    }

    /// A broken console ends the session the same way as end of input.
    fn close(&mut self, error: io::Error) {
        log::warn!("console closed: {}", error);
        self.closed = true;
    }

    /// Prompt and read one trimmed line. `None` on end of input or a broken console.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            self.close(e);
        }
        if self.closed {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                self.close(e);
                None
            }
        }
    }

    fn ask_coordinate(&mut self, prompt: &str) -> Option<Coordinate> {
        loop {
            let line = self.ask(prompt)?;
            match parse_coordinate(&line) {
                Some(coord) => return Some(coord),
                None => self.say("Expected two numbers: row and column"),
            }
        }
    }

    fn ask_ship(&mut self) -> Option<Result<Ship, BoardError>> {
        let start = self.ask_coordinate("Ship start (row column): ")?;
        let finish = self.ask_coordinate("Ship end (row column): ")?;
        Some(Ship::new(start, finish))
    }

    fn ask_action(&mut self, actions: &[SetupAction]) -> Option<SetupAction> {
        let mut menu = String::from("Choose an action\n");
        for (i, action) in actions.iter().enumerate() {
            menu.push_str(&format!("{} - {}\n", i + 1, action.label()));
        }
        loop {
            let line = self.ask(&menu)?;
            match line.parse::<usize>() {
                Ok(n) if (1..=actions.len()).contains(&n) => return Some(actions[n - 1]),
                _ => self.say("No such menu item"),
            }
        }
    }

    fn show_setup(&mut self, setup: &FleetSetup) {
        let mut preview = setup.board().clone();
        preview.render();
        let text = render_board(preview.cells());
        self.say(&text);
    }

    fn apply(
        &mut self,
        rng: &mut SmallRng,
        setup: &mut FleetSetup,
        action: SetupAction,
    ) -> Result<(), BoardError> {
        match action {
            SetupAction::Randomize => setup.randomize(&self.generator, rng),
            SetupAction::AddShip => match self.ask_ship() {
                Some(ship) => setup.add_ship(ship?),
                None => Ok(()),
            },
            SetupAction::DeleteShip => match self.ask_ship() {
                Some(ship) => setup.delete_ship(&ship?),
                None => Ok(()),
            },
            SetupAction::Finish => Ok(()),
        }
    }

    fn accept(&mut self, board: Board) -> Board {
        self.own = *board.cells();
        board
    }
}

/// Parse `"row column"` into a coordinate.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(x, y))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        mut setup: FleetSetup,
    ) -> Result<Board, BoardError> {
        self.say("First place your ships.");
        for (size, count) in FLEET_QUOTA {
            self.say(&format!("Ships of size {}: {}", size, count));
        }
        loop {
            self.show_setup(&setup);
            let actions = setup.actions();
            let Some(action) = self.ask_action(&actions) else {
                self.say("Input closed, generating a random fleet");
                if !setup.ready() {
                    setup.randomize(&self.generator, rng)?;
                }
                let board = setup.finish().map_err(|(_, e)| e)?;
                return Ok(self.accept(board));
            };
            if action == SetupAction::Finish {
                match setup.finish() {
                    Ok(board) => return Ok(self.accept(board)),
                    Err((back, e)) => {
                        setup = back;
                        self.say(&format!("Error: {}", e));
                        continue;
                    }
                }
            }
            if let Err(e) = self.apply(rng, &mut setup, action) {
                log::debug!("setup action {:?} rejected: {}", action, e);
                self.say(&format!("Error: {}", e));
            }
        }
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &Grid<TargetState>,
    ) -> Option<Coordinate> {
        let own = render_board(&self.own);
        let theirs = render_hidden(view);
        self.say(&format!("\nYour board:\n{}Opponent board:\n{}", own, theirs));
        self.say("Your turn to fire");
        self.ask_coordinate("Shot coordinates (row column): ")
    }

    fn handle_shot_result(&mut self, _coord: Coordinate, result: ShotResult) {
        self.say(if result.is_hit() { "You hit!" } else { "You missed!" });
    }

    fn handle_rejected_shot(&mut self, coord: Coordinate, error: BoardError) {
        self.say(&format!("Cannot fire at {}: {}", coord, error));
    }

    fn handle_opponent_shot(&mut self, coord: Coordinate, result: ShotResult) {
        let mark = if result.is_hit() {
            CellState::Hit
        } else {
            CellState::Miss
        };
        self.own.set(coord, mark);
        let verdict = if result.is_hit() { "hit" } else { "miss" };
        self.say(&format!("Opponent fired at {}: {}", coord, verdict));
    }
}
