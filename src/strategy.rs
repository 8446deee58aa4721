//! Interchangeable move-selection strategies.
//!
//! A [`Strategy`] is anything that can pick a move for a player. The
//! [`Searcher`](crate::Searcher) is the one that plays perfectly;
//! [`Random`] plays legal noise and exists as a baseline opponent for
//! tests and demos. A [`Game`](crate::Game) drives either through
//! [`play_with`](crate::Game::play_with) without caring which it got.

use rand::seq::SliceRandom;

use crate::board::{Board, Coord, Player};
use crate::search::Searcher;

/// Trait for move pickers.
pub trait Strategy {
    /// Picks a move for `player` on `board`, or `None` when the
    /// strategy has nothing to offer because the position is already
    /// decided.
    ///
    /// The board is borrowed mutably so implementations can explore on
    /// it in place, but it must come back in the state it arrived in.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Option<Coord>;
}

impl Strategy for Searcher {
    /// Plays the optimal move. Returns `None` on boards that are
    /// already won or full.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Option<Coord> {
        self.best_move(board, player).coord
    }
}

/// Uniformly random legal play.
///
/// Useful as a sparring partner: any strategy claiming strength should
/// at the very least never lose to this one as the second player, and
/// never fail to beat it reliably as the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Random;

impl Random {
    /// Creates a random strategy.
    pub fn new() -> Self {
        Random
    }
}

impl Strategy for Random {
    /// Picks any empty cell with equal probability. Returns `None` on
    /// a full board; unlike the searcher it does not notice won
    /// positions, so drive it through a [`Game`](crate::Game) (or stop
    /// on `Win` yourself) to avoid playing past the end.
    fn choose_move(&mut self, board: &mut Board, _player: Player) -> Option<Coord> {
        let mut rng = rand::thread_rng();
        let open: Vec<Coord> = board.empty_cells().collect();
        open.choose(&mut rng).copied()
    }
}
