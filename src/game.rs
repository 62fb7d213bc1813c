//! Text game session.
//!
//! Runs a full game between two controllers. An engine-controlled side asks
//! [`Engine::find_best_move`] for its turn and plays the top sequence; a
//! human-controlled side is prompted for 1-based pit numbers on the input
//! stream. The board is printed after every elementary move.
//!
//! ## Example
//!
//! ```ignore
//! use kalah_rust::game::GameSession;
//! let mut session = GameSession::new(board, engine);
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::board::{Board, Side};
use crate::engine::Engine;

/// Who chooses the moves for a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    Engine,
    Human,
}

/// Final result, with both sides' swept totals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins { player: u32, opponent: u32 },
    OpponentWins { player: u32, opponent: u32 },
    Draw { player: u32, opponent: u32 },
}

impl Outcome {
    pub fn from_board(board: &Board) -> Self {
        let player = board.player_points();
        let opponent = board.opponent_points();
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Outcome::PlayerWins { player, opponent },
            std::cmp::Ordering::Less => Outcome::OpponentWins { player, opponent },
            std::cmp::Ordering::Equal => Outcome::Draw { player, opponent },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::PlayerWins { player, opponent } => {
                write!(f, "Game over  -  Player wins {player} - {opponent}")
            }
            Outcome::OpponentWins { player, opponent } => {
                write!(f, "Game over  -  Opponent wins {opponent} - {player}")
            }
            Outcome::Draw { player, opponent } => {
                write!(f, "Game over  -  Draw {player} - {opponent}")
            }
        }
    }
}

/// A game in progress.
pub struct GameSession {
    board: Board,
    engine: Engine,
    player: Controller,
    opponent: Controller,
    opponent_starts: bool,
}

impl GameSession {
    /// Both sides engine-controlled, player moves first.
    pub fn new(board: Board, engine: Engine) -> Self {
        Self {
            board,
            engine,
            player: Controller::Engine,
            opponent: Controller::Engine,
            opponent_starts: false,
        }
    }

    pub fn with_controller(mut self, side: Side, controller: Controller) -> Self {
        match side {
            Side::Player => self.player = controller,
            Side::Opponent => self.opponent = controller,
        }
        self
    }

    pub fn with_opponent_starting(mut self, opponent_starts: bool) -> Self {
        self.opponent_starts = opponent_starts;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn controller(&self, side: Side) -> Controller {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Play until the game ends. Returns `None` if a human quit.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<Option<Outcome>> {
        let mut lines = input.lines();
        write!(output, "{}", self.board)?;

        let mut side = if self.opponent_starts {
            Side::Opponent
        } else {
            Side::Player
        };

        loop {
            if self.board.no_more_moves() {
                let outcome = Outcome::from_board(&self.board);
                writeln!(output, "{outcome}")?;
                return Ok(Some(outcome));
            }

            let finished = match self.controller(side) {
                Controller::Engine => {
                    self.engine_turn(side, &mut output)?;
                    true
                }
                Controller::Human => self.human_turn(side, &mut lines, &mut output)?,
            };
            if !finished {
                return Ok(None);
            }

            side = side.opposite();
        }
    }

    fn engine_turn<W: Write>(&mut self, side: Side, output: &mut W) -> Result<()> {
        let ranked = self
            .engine
            .find_best_move(&self.board, side)
            .with_context(|| format!("failed to find a move for {side}"))?;
        for candidate in &ranked {
            writeln!(output, "({}, {})", candidate.moves, candidate.score)?;
        }

        let best = &ranked[0];
        for &pit in best.moves.pits() {
            self.board.apply_move(side, pit)?;
            write!(output, "{}", self.board)?;
        }
        Ok(())
    }

    /// Prompt until the side's turn is over. Returns false on `q` or end of input.
    fn human_turn<B: BufRead, W: Write>(
        &mut self,
        side: Side,
        lines: &mut std::io::Lines<B>,
        output: &mut W,
    ) -> Result<bool> {
        let prompt = match side {
            Side::Player => "Player move: ",
            Side::Opponent => "Opponent move: ",
        };

        loop {
            write!(output, "{prompt}")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                return Ok(false);
            };
            let line = line.context("failed to read move")?;
            let Some(command) = line.split_whitespace().next() else {
                continue;
            };
            if command == "q" {
                return Ok(false);
            }

            let extra_turn = match command.parse::<usize>() {
                Ok(n) if n >= 1 => self.board.apply_move(side, n - 1).ok(),
                _ => None,
            };
            match extra_turn {
                Some(extra_turn) => {
                    write!(output, "{}", self.board)?;
                    if !extra_turn || self.board.no_more_moves() {
                        return Ok(true);
                    }
                }
                None => writeln!(output, "Wrong move:  {command}")?,
            }
        }
    }
}
