//! Game session: turns, outcome and rounds for one pair of players
//!
//! The session owns the live board. It is only ever filled, never cleared,
//! until the next round starts on a fresh board. Moves come either from a
//! front end (`play`) or from the engine (`play_ai`).

use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, Pos};
use crate::config::{PlayerKind, Settings};
use crate::engine::AIEngine;
use crate::error::{Error, Result};
use crate::rules::{outcome, winning_line, Outcome};

/// Round results so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress | Outcome::Win(Mark::Empty) => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// One game between two players, possibly over several rounds
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: Settings,
    board: Board,
    current_turn: Mark,
    starting_mark: Mark,
    outcome: Outcome,
    move_history: Vec<(Pos, Mark)>,
    tally: Tally,
}

impl GameSession {
    /// Start the first round; X moves first.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            board: settings.new_board(),
            settings,
            current_turn: Mark::X,
            starting_mark: Mark::X,
            outcome: Outcome::InProgress,
            move_history: Vec::new(),
            tally: Tally::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mark to move next
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Mark that opened the current round
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Who controls the side to move
    pub fn current_player(&self) -> PlayerKind {
        self.settings.player(self.current_turn)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_player() == PlayerKind::Ai
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.move_history
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Cells of the line that won the round, if it was won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let &(pos, mark) = self.move_history.last()?;
        match self.outcome {
            Outcome::Win(_) => winning_line(&self.board, pos, mark),
            _ => None,
        }
    }

    /// Place the side to move's mark at `pos`.
    ///
    /// Fails without changing anything if the round is over or the cell is
    /// taken or off the board.
    #[instrument(skip(self), fields(mark = ?self.current_turn))]
    pub fn play(&mut self, pos: Pos) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        let mark = self.current_turn;
        if !self.board.apply_move(pos, mark) {
            return Err(Error::IllegalMove(pos));
        }
        self.move_history.push((pos, mark));

        self.outcome = outcome(&self.board, pos, mark);
        match self.outcome {
            Outcome::InProgress => self.current_turn = mark.opponent(),
            finished => {
                self.tally.record(finished);
                info!(outcome = ?finished, moves = self.move_history.len(), "round finished");
            }
        }

        debug!(%pos, "move played");
        Ok(self.outcome)
    }

    /// Let the engine move for the side to move.
    ///
    /// Returns the move played. If the engine has nothing to play the round
    /// is closed as a draw and `None` is returned.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<Option<Pos>> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        match engine.get_move(&self.board, self.current_turn) {
            Some(pos) => {
                self.play(pos)?;
                Ok(Some(pos))
            }
            None => {
                debug!("no move available, closing round as a draw");
                self.outcome = Outcome::Draw;
                self.tally.record(Outcome::Draw);
                Ok(None)
            }
        }
    }

    /// Start a new round on an empty board. The other mark opens it.
    pub fn next_round(&mut self) {
        self.board = self.settings.new_board();
        self.starting_mark = self.starting_mark.opponent();
        self.current_turn = self.starting_mark;
        self.outcome = Outcome::InProgress;
        self.move_history.clear();
    }
}
