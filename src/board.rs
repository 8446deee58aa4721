//! Board representation for 3x3 tic-tac-toe.
//!
//! The [`Board`] owns the grid of cell occupancy and provides move
//! validation, application and retraction, and win/tie classification.
//! It deliberately does not track whose turn it is: turn alternation
//! belongs to the layer above (see [`Game`](crate::Game)), and the
//! search engine relies on being able to place moves for either player
//! while it explores.

use std::fmt;

use crate::{InvalidMove, Result};

/// Width and height of the grid. The whole crate is specific to the
/// 3x3 game; this constant just names the number.
pub const SIZE: usize = 3;

/// One of the two players.
///
/// `X` is the maximizing side in the search engine and moves first in a
/// [`Game`](crate::Game); `O` is the minimizing side. An empty cell is
/// represented as `Option<Player>::None`, so there is no "nobody"
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "x"),
            Player::O => write!(f, "o"),
        }
    }
}

/// Zero-based (row, column) address of a board cell.
///
/// Any pair of values is representable; whether a coordinate actually
/// lands on the grid is checked at the board boundary, so callers can
/// pass user input through without pre-validating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns true if both row and column fall within the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a position from one player's point of view.
///
/// Returned by [`Board::classify`] and [`Board::apply_move`]. `Win`
/// speaks for the player asked about; the same position can be
/// `Win` for one player and `Undecided` for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player owns all three cells of at least one line.
    Win,
    /// No empty cell remains and the player has no complete line.
    Tie,
    /// The game can still continue.
    Undecided,
}

/// The 3x3 grid of cell occupancy.
///
/// A `Board` starts empty, is mutated one cell at a time through
/// [`apply_move`](Board::apply_move), and can be wiped with
/// [`reset`](Board::reset). It is a plain value with no interior
/// state beyond the grid itself, so cloning or copying one is cheap
/// and gives a fully independent position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Returns the occupant of a cell, or `None` if the cell is empty.
    ///
    /// Out-of-bounds coordinates are well-defined and also give `None`
    /// rather than panicking.
    pub fn get(&self, coord: Coord) -> Option<Player> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.row][coord.col]
    }

    /// Read-only view of the whole grid in row-major order.
    pub fn cells(&self) -> &[[Option<Player>; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns true if the coordinate is in bounds and the cell is
    /// unoccupied. Out-of-bounds input returns false rather than
    /// panicking, so this doubles as the full legality check for a
    /// prospective move.
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.cells[coord.row][coord.col].is_none()
    }

    /// Returns true if any cell is unoccupied.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|cell| cell.is_none())
    }

    /// Iterates the empty cells in row-major order (row 0..2, and
    /// column 0..2 within each row). This is the order in which the
    /// search engine considers candidate moves, which is what makes
    /// its tie-breaking deterministic.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..SIZE).flat_map(move |row| {
            (0..SIZE).filter_map(move |col| {
                if self.cells[row][col].is_none() {
                    Some(Coord::new(row, col))
                } else {
                    None
                }
            })
        })
    }

    /// Places `player`'s mark at `coord` and classifies the resulting
    /// position for that player.
    ///
    /// Fails with [`InvalidMove`] when the coordinate is off the grid
    /// or the cell is already taken; the board is left untouched on
    /// error, so the caller can simply retry with different input.
    ///
    /// Turn order is not checked here. The board will happily accept
    /// consecutive moves by the same player; it is the caller's job to
    /// alternate turns and to stop playing once `Win` or `Tie` comes
    /// back.
    pub fn apply_move(&mut self, player: Player, coord: Coord) -> Result<Outcome> {
        if !coord.in_bounds() {
            return Err(InvalidMove::OutOfBounds { coord });
        }
        if self.cells[coord.row][coord.col].is_some() {
            return Err(InvalidMove::Occupied { coord });
        }
        self.cells[coord.row][coord.col] = Some(player);
        Ok(self.classify(player))
    }

    /// Writes a player into a known-empty cell, skipping validation and
    /// classification. The search engine uses this for hypothetical
    /// moves it has already confirmed legal via [`is_empty`](Board::is_empty).
    pub(crate) fn place(&mut self, player: Player, coord: Coord) {
        debug_assert!(self.is_empty(coord));
        self.cells[coord.row][coord.col] = Some(player);
    }

    /// Empties a cell again, undoing a hypothetical move.
    ///
    /// Together with [`place`](Board::place) this lets the search
    /// engine walk the game tree on a single shared board instead of
    /// cloning a position per node. Not part of normal play: a real
    /// game never takes a move back.
    pub(crate) fn retract_move(&mut self, coord: Coord) {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row][coord.col] = None;
    }

    /// Clears every cell, returning the board to its initial state.
    pub fn reset(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
    }

    /// Classifies the position for `player`: `Win` if the player owns
    /// all three cells of any line (3 rows, 3 columns, 2 diagonals),
    /// otherwise `Tie` if the board is full, otherwise `Undecided`.
    ///
    /// A single pass over the grid keeps a running tally per line. At
    /// this scale there is nothing to gain from updating line counts
    /// incrementally across moves, so the board stores no derived
    /// state and this recomputes from scratch every time.
    pub fn classify(&self, player: Player) -> Outcome {
        // Tally slots: [0..3) rows, [3..6) columns, [6] the main
        // diagonal, [7] the anti-diagonal.
        let mut tallies = [0u8; 2 * SIZE + 2];
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Some(player) {
                    tallies[row] += 1;
                    tallies[SIZE + col] += 1;
                    if row == col {
                        tallies[2 * SIZE] += 1;
                    }
                    if row + col == SIZE - 1 {
                        tallies[2 * SIZE + 1] += 1;
                    }
                }
            }
        }

        if tallies.iter().any(|&count| count as usize == SIZE) {
            Outcome::Win
        } else if self.has_empty_cell() {
            Outcome::Undecided
        } else {
            Outcome::Tie
        }
    }
}

/// Renders the grid one row per line, `x`/`o` for occupied cells and
/// `_` for empty ones.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(player) => write!(f, "{}", player)?,
                    None => f.write_str("_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
