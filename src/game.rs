//! Turn-tracking game sessions on top of [`Board`].
//!
//! The board itself accepts moves from either player at any time; the
//! [`Game`] wrapper is the layer that alternates turns, remembers when
//! the game finished, and says who won. The demo binaries and the
//! self-play tests drive everything through it.

use crate::board::{Board, Coord, Outcome, Player};
use crate::strategy::Strategy;
use crate::{InvalidMove, Result};

/// Where a game stands as a whole.
///
/// Unlike [`Outcome`], which classifies a raw position for one player,
/// this is symmetric: a finished game names its winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Somebody still has a move to make.
    InProgress,
    /// The named player completed a line.
    Won(Player),
    /// The board filled up with no winner.
    Draw,
}

/// A full game with alternating turns, `X` first.
///
/// Every move goes through [`play`](Game::play) (or
/// [`play_with`](Game::play_with), which asks a [`Strategy`] first),
/// so the board inside a `Game` only ever holds positions reachable by
/// legal play.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a fresh game: empty board, `X` to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is. Once the game is over this stops
    /// updating and keeps the last mover.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Plays the side to move at `coord` and reports the resulting
    /// status.
    ///
    /// On success the turn passes to the opponent unless the move ended
    /// the game. A rejected move (out of bounds, cell taken, game
    /// already over) changes nothing, so callers handling user input
    /// can report the error and simply prompt again.
    pub fn play(&mut self, coord: Coord) -> Result<GameStatus> {
        if self.is_over() {
            return Err(InvalidMove::GameOver);
        }

        let mover = self.to_move;
        let outcome = self.board.apply_move(mover, coord)?;
        self.status = match outcome {
            Outcome::Win => GameStatus::Won(mover),
            Outcome::Tie => GameStatus::Draw,
            Outcome::Undecided => {
                self.to_move = mover.opponent();
                GameStatus::InProgress
            }
        };

        Ok(self.status)
    }

    /// Lets `strategy` take the current turn.
    ///
    /// Strategies only decline to move on decided positions, which an
    /// in-progress game never shows them, so the `None` arm folds into
    /// the same error a move after the end gets.
    pub fn play_with(&mut self, strategy: &mut dyn Strategy) -> Result<GameStatus> {
        if self.is_over() {
            return Err(InvalidMove::GameOver);
        }

        let mover = self.to_move;
        match strategy.choose_move(&mut self.board, mover) {
            Some(coord) => self.play(coord),
            None => Err(InvalidMove::GameOver),
        }
    }

    /// Starts over: clears the board and gives `X` the first move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
