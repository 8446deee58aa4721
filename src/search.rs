//! Exhaustive minimax search with optional alpha-beta pruning.
//!
//! The 3x3 game tree is small enough to search to the bottom every
//! time, so the engine has no evaluation heuristic and no depth limit:
//! every score it returns is the true game-theoretic value of the
//! position. One recursive routine serves both searcher flavors; the
//! pruned one additionally carries alpha/beta bounds and abandons a
//! candidate loop as soon as they cross, which changes how much work
//! is done but never which score comes back.
//!
//! Scores are always from `X`'s point of view: positive means `X` wins
//! with perfect play, negative means `O` does, zero is a forced tie.
//! `X` picks the child with the greatest score, `O` the least.

use std::time::Instant;

use log::debug;

use crate::board::{Board, Coord, Outcome, Player, SIZE};
use crate::stats::SearchStats;

/// Score of a position some player has already won. Positive for `X`,
/// negated for `O`. Interior positions only ever score in
/// `[-WIN_SCORE, WIN_SCORE]`; at this depth there is no discounting
/// for faster wins, so every forced win scores the same.
pub const WIN_SCORE: i32 = 100;

/// Sentinel magnitude strictly outside the reachable score range.
///
/// Seeds the running best score at each node (so the first legal move
/// always improves on it) and the root alpha/beta bounds (so no legal
/// move is cut off before it has been tried).
pub const SCORE_LIMIT: i32 = 10_000;

/// A move paired with the score the search assigned to it.
///
/// `coord` is `None` only for positions with nothing left to decide: a
/// full board, or one a player has already won. Callers that drive an
/// actual game never see that case as long as they stop playing once
/// the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// The chosen cell, or `None` when the position is terminal.
    pub coord: Option<Coord>,

    /// Game-theoretic value of the position, from `X`'s point of view.
    pub score: i32,
}

/// Perfect-play move finder over a shared scratch board.
///
/// The searcher explores continuations by applying a hypothetical move
/// in place, recursing for the opponent, and retracting the move before
/// trying the next candidate. It therefore needs exclusive access to
/// the board for the duration of a call, and hands it back in exactly
/// the state it received it.
///
/// Where several moves share the best score, the first one in row-major
/// order wins, so results are fully deterministic.
///
/// # Example
///
/// ```
/// use tictactoe_minimax::{Board, Coord, Player, Searcher};
///
/// let mut board = Board::new();
/// board.apply_move(Player::X, Coord::new(1, 1))?;
///
/// let mut searcher = Searcher::new();
/// let reply = searcher.best_move(&mut board, Player::O);
///
/// // Perfect play never loses to a center opening.
/// assert_eq!(reply.score, 0);
/// # Ok::<(), tictactoe_minimax::InvalidMove>(())
/// ```
pub struct Searcher {
    prune: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with alpha-beta pruning enabled. This is the
    /// variant to use for actual play.
    pub fn new() -> Self {
        Searcher {
            prune: true,
            stats: SearchStats::new(),
        }
    }

    /// Creates a searcher that walks the entire game tree with no
    /// pruning. Same moves and scores as [`new`](Searcher::new), many
    /// times the work; kept as the reference the pruned variant is
    /// checked against.
    pub fn exhaustive() -> Self {
        Searcher {
            prune: false,
            stats: SearchStats::new(),
        }
    }

    /// Returns true if this searcher prunes with alpha-beta bounds.
    pub fn pruning(&self) -> bool {
        self.prune
    }

    /// Statistics from the most recent search. Zeroed counters before
    /// the first call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Computes the optimal move for `player` on `board`.
    ///
    /// A forced win for `X` scores [`WIN_SCORE`], a forced win for `O`
    /// scores `-WIN_SCORE`, and a forced tie scores zero. The board is
    /// mutated while the search runs but is restored before returning.
    ///
    /// On a position that is already decided (won or full) there is no
    /// move to recommend and the returned `coord` is `None`.
    pub fn best_move(&mut self, board: &mut Board, player: Player) -> ScoredMove {
        self.best_move_bounded(board, player, -SCORE_LIMIT, SCORE_LIMIT)
    }

    /// [`best_move`](Searcher::best_move) with explicit root alpha/beta
    /// seeds.
    ///
    /// The seeds must bracket the reachable score range (`alpha <=
    /// -WIN_SCORE`, `beta >= WIN_SCORE`), or legal moves get cut off
    /// before they have been looked at; `best_move` passes
    /// `±`[`SCORE_LIMIT`]. The exhaustive searcher ignores the bounds
    /// entirely.
    pub fn best_move_bounded(
        &mut self,
        board: &mut Board,
        player: Player,
        alpha: i32,
        beta: i32,
    ) -> ScoredMove {
        self.stats = SearchStats::new();
        let search_start = Instant::now();

        let chosen = self.minimax(board, player, alpha, beta);
        self.stats.elapsed = search_start.elapsed();

        debug!(
            "best move for {}: {:?} scoring {} ({})",
            player,
            chosen.coord,
            chosen.score,
            self.stats.summary()
        );

        chosen
    }

    /// One node of the search. `player` is the side to move; `alpha`
    /// and `beta` travel by value, so bound updates flow down into
    /// subtrees and to later siblings but never back up.
    fn minimax(
        &mut self,
        board: &mut Board,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> ScoredMove {
        self.stats.nodes += 1;

        // Terminal checks before anything else, X's win first. Boards
        // reached through legal play hold at most one completed line
        // owner, so the order between the two win checks is moot.
        if board.classify(Player::X) == Outcome::Win {
            return ScoredMove {
                coord: None,
                score: WIN_SCORE,
            };
        }
        if board.classify(Player::O) == Outcome::Win {
            return ScoredMove {
                coord: None,
                score: -WIN_SCORE,
            };
        }
        if !board.has_empty_cell() {
            return ScoredMove {
                coord: None,
                score: 0,
            };
        }

        // Worst possible score for the side to move; any legal reply
        // strictly improves on it, so `coord` is always filled in by
        // the time the loop ends.
        let mut best = ScoredMove {
            coord: None,
            score: match player {
                Player::X => -SCORE_LIMIT,
                Player::O => SCORE_LIMIT,
            },
        };

        for row in 0..SIZE {
            for col in 0..SIZE {
                let coord = Coord::new(row, col);
                if !board.is_empty(coord) {
                    continue;
                }

                board.place(player, coord);
                let reply = self.minimax(board, player.opponent(), alpha, beta);
                board.retract_move(coord);

                let improved = match player {
                    Player::X => reply.score > best.score,
                    Player::O => reply.score < best.score,
                };
                if improved {
                    best = ScoredMove {
                        coord: Some(coord),
                        score: reply.score,
                    };
                    if self.prune {
                        match player {
                            Player::X => alpha = alpha.max(best.score),
                            Player::O => beta = beta.min(best.score),
                        }
                    }
                }

                // Once the bounds cross, no later candidate can change
                // the result the parent will act on.
                if self.prune && alpha >= beta {
                    self.stats.cutoffs += 1;
                    return best;
                }
            }
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
