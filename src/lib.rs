//! # tictactoe-minimax
//!
//! A perfect-play tic-tac-toe engine built on exhaustive minimax search.
//!
//! The 3x3 game tree is tiny by computer standards, which makes it the rare
//! game an engine can actually solve: every move this crate recommends is
//! provably optimal, with no heuristics and no depth limits involved. The
//! same property makes the crate a compact, fully checkable reference for
//! how minimax and alpha-beta pruning work.
//!
//! ## Features
//!
//! - Provably optimal move selection: the search always reaches the bottom
//!   of the game tree, so scores are true game-theoretic values
//! - One search routine behind both the exhaustive and the alpha-beta
//!   searcher, so the two are guaranteed to agree on every score
//! - Deterministic tie-breaking (first best move in row-major order) for
//!   reproducible games
//! - A [`Strategy`] trait for plugging move pickers into a game, with a
//!   uniformly [`Random`] baseline included
//! - Search statistics (nodes, cutoffs, timing) that make the effect of
//!   pruning measurable
//! - A turn-tracking [`Game`] wrapper that enforces alternation and knows
//!   when the game is over
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{Game, GameStatus, Searcher};
//!
//! fn main() -> Result<(), tictactoe_minimax::InvalidMove> {
//!     let mut game = Game::new();
//!     let mut engine = Searcher::new();
//!
//!     // Let the engine play both sides to the end.
//!     while !game.is_over() {
//!         game.play_with(&mut engine)?;
//!     }
//!
//!     // Perfect play against itself always lands on a draw.
//!     assert_eq!(game.status(), GameStatus::Draw);
//!     println!("{}", game.board());
//!     Ok(())
//! }
//! ```
//!
//! Working below the [`Game`] layer, the searcher can be pointed at any
//! position directly:
//!
//! ```
//! use tictactoe_minimax::{Board, Coord, Player, Searcher};
//!
//! let mut board = Board::new();
//! board.apply_move(Player::X, Coord::new(0, 0))?;
//! board.apply_move(Player::O, Coord::new(1, 1))?;
//!
//! let mut searcher = Searcher::new();
//! let reply = searcher.best_move(&mut board, Player::X);
//!
//! // A corner opening answered by the center is a draw with best play.
//! assert_eq!(reply.score, 0);
//! # Ok::<(), tictactoe_minimax::InvalidMove>(())
//! ```
//!
//! ## How It Works
//!
//! The searcher walks the game tree recursively on a single shared board:
//!
//! 1. **Classify**: if `X` has a completed line the position scores
//!    `+100`, if `O` has one it scores `-100`, and a full board with no
//!    winner scores `0`. Terminal positions end the recursion.
//!
//! 2. **Explore**: otherwise, each empty cell is tried in row-major
//!    order. A hypothetical move is applied in place, the opponent's
//!    best reply is found by recursion, and the move is retracted again,
//!    so the board is back to the parent position before the next
//!    candidate.
//!
//! 3. **Choose**: `X` keeps the child with the strictly greatest score,
//!    `O` the strictly least. Strict comparison is what makes the first
//!    best move in scan order win ties.
//!
//! 4. **Prune** (alpha-beta searcher only): the best score each side has
//!    locked in so far travels down the recursion as the `alpha`/`beta`
//!    bounds. Once they cross, no remaining candidate in the current
//!    loop can change the parent's decision, and the loop stops early.
//!    Pruning changes how many positions get visited, never the score.
//!
//! ## Examples
//!
//! The crate includes two runnable demos:
//!
//! - `self_play`: the engine plays both sides of one game, printing the
//!   board and search statistics after every move
//! - `play`: play against the engine from the terminal
//!
//! ```bash
//! cargo run --example self_play
//! cargo run --example play
//! ```
//!
//! Set `RUST_LOG=debug` to watch individual search calls in either demo.

pub mod board;
pub mod game;
pub mod search;
pub mod stats;
pub mod strategy;

pub use board::{Board, Coord, Outcome, Player};
pub use game::{Game, GameStatus};
pub use search::{ScoredMove, Searcher, SCORE_LIMIT, WIN_SCORE};
pub use stats::SearchStats;
pub use strategy::{Random, Strategy};

/// The ways a move can be refused
///
/// Rejected moves never alter the board, so every variant is safely
/// retryable with corrected input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// The coordinate lies outside the 3x3 grid
    #[error("{coord} is outside the 3x3 board")]
    OutOfBounds {
        /// The offending coordinate
        coord: Coord,
    },

    /// The target cell already holds a mark
    #[error("cell {coord} is already occupied")]
    Occupied {
        /// The offending coordinate
        coord: Coord,
    },

    /// The game has already been won or drawn; only the [`Game`] layer
    /// reports this
    #[error("the game is already over")]
    GameOver,
}

/// Result type for move-making operations
pub type Result<T> = std::result::Result<T, InvalidMove>;
