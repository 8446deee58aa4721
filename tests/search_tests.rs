use tictactoe_minimax::{Board, Coord, Player, ScoredMove, Searcher, SCORE_LIMIT, WIN_SCORE};

// Builds a position from three rows of `x`, `o` and `_` glyphs.
fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, glyph) in line.split_whitespace().enumerate() {
            let player = match glyph {
                "x" => Player::X,
                "o" => Player::O,
                _ => continue,
            };
            board.apply_move(player, Coord::new(row, col)).unwrap();
        }
    }
    board
}

// Both searcher flavors, so properties get checked with and without
// pruning in one pass.
fn both_searchers() -> [Searcher; 2] {
    [Searcher::exhaustive(), Searcher::new()]
}

#[test]
fn test_empty_board_is_a_forced_tie() {
    let mut board = Board::new();

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::X);
        assert_eq!(chosen.score, 0, "perfect play from the start is a tie");
        assert_eq!(
            chosen.coord,
            Some(Coord::new(0, 0)),
            "all openings tie, so the row-major scan keeps the first"
        );
    }
}

#[test]
fn test_takes_the_immediate_win() {
    // x x .    x to move: (0, 2) wins on the spot. Any other reply
    // o o .    leaves o free to finish the middle row instead.
    // . . .
    let mut board = board_from(["x x _", "o o _", "_ _ _"]);

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::X);
        assert_eq!(
            chosen,
            ScoredMove {
                coord: Some(Coord::new(0, 2)),
                score: WIN_SCORE,
            }
        );
    }
}

#[test]
fn test_takes_the_immediate_win_for_o() {
    // o o .    the mirror case: the minimizer finishes its own row and
    // x x .    the score carries o's sign.
    // . . .
    let mut board = board_from(["o o _", "x x _", "_ _ _"]);

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::O);
        assert_eq!(
            chosen,
            ScoredMove {
                coord: Some(Coord::new(0, 2)),
                score: -WIN_SCORE,
            }
        );
    }
}

#[test]
fn test_blocks_the_top_row_and_wins_off_the_block() {
    // o o .    x must land on (0, 2): anything else hands o the top
    // . x .    row. The block then forks column 2 with the
    // . . x    anti-diagonal, so it scores as a win as well.
    let mut board = board_from(["o o _", "_ x _", "_ _ x"]);

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::X);
        assert_eq!(
            chosen,
            ScoredMove {
                coord: Some(Coord::new(0, 2)),
                score: WIN_SCORE,
            }
        );
    }
}

#[test]
fn test_finds_the_win_two_moves_out() {
    // x . o    (2, 0) blocks o's anti-diagonal and forks column 0 with
    // . o .    the bottom row; o cannot cover both follow-ups, so the
    // . . x    win lands two plies later.
    let mut board = board_from(["x _ o", "_ o _", "_ _ x"]);

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::X);
        assert_eq!(
            chosen,
            ScoredMove {
                coord: Some(Coord::new(2, 0)),
                score: WIN_SCORE,
            }
        );
    }
}

#[test]
fn test_center_is_the_only_safe_reply_to_a_corner_opening() {
    let mut board = board_from(["x _ _", "_ _ _", "_ _ _"]);

    for mut searcher in both_searchers() {
        let chosen = searcher.best_move(&mut board, Player::O);
        assert_eq!(
            chosen.coord,
            Some(Coord::new(1, 1)),
            "every non-center reply loses to perfect play"
        );
        assert_eq!(chosen.score, 0);
    }
}

#[test]
fn test_pruned_and_exhaustive_agree_on_every_two_ply_position() {
    // Every position after one x move and one o reply, x to move
    // again: 72 boards, deep enough that pruning actually fires.
    let mut checked = 0;
    for first in 0..9 {
        for second in 0..9 {
            if second == first {
                continue;
            }
            let mut board = Board::new();
            board
                .apply_move(Player::X, Coord::new(first / 3, first % 3))
                .unwrap();
            board
                .apply_move(Player::O, Coord::new(second / 3, second % 3))
                .unwrap();

            let full = Searcher::exhaustive().best_move(&mut board, Player::X);
            let cut = Searcher::new().best_move(&mut board, Player::X);
            assert_eq!(
                full.score, cut.score,
                "divergence after opening moves {first} and {second}"
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 72);
}

#[test]
fn test_search_leaves_the_board_as_it_found_it() {
    let mut board = board_from(["x o _", "_ x _", "_ _ _"]);
    let snapshot = board;

    for mut searcher in both_searchers() {
        searcher.best_move(&mut board, Player::O);
        assert_eq!(board, snapshot, "every hypothetical move must be retracted");
    }
}

#[test]
fn test_decided_positions_return_no_move() {
    // x has already won: nothing to recommend, and the score reports
    // the standing result even when the loser is the one asking.
    let mut won_by_x = board_from(["x x x", "o o _", "_ _ _"]);
    // The mirror case: o owns the completed line.
    let mut won_by_o = board_from(["o o o", "x x _", "_ x _"]);
    // A finished draw has nothing to offer either.
    let mut drawn = board_from(["x x o", "o o x", "x x o"]);

    for mut searcher in both_searchers() {
        for player in [Player::X, Player::O] {
            assert_eq!(
                searcher.best_move(&mut won_by_x, player),
                ScoredMove {
                    coord: None,
                    score: WIN_SCORE,
                }
            );
            assert_eq!(
                searcher.best_move(&mut won_by_o, player),
                ScoredMove {
                    coord: None,
                    score: -WIN_SCORE,
                }
            );
            assert_eq!(
                searcher.best_move(&mut drawn, player),
                ScoredMove {
                    coord: None,
                    score: 0,
                }
            );
        }
    }
}

#[test]
fn test_pruning_skips_work_without_changing_the_answer() {
    let mut board = Board::new();
    let mut exhaustive = Searcher::exhaustive();
    let mut pruned = Searcher::new();
    assert!(!exhaustive.pruning());
    assert!(pruned.pruning());

    let full = exhaustive.best_move(&mut board, Player::X);
    let cut = pruned.best_move(&mut board, Player::X);

    assert_eq!(full.score, cut.score);
    assert_eq!(
        exhaustive.stats().cutoffs,
        0,
        "nothing gets cut without bounds"
    );
    assert!(pruned.stats().cutoffs > 0, "a full-tree search must prune");
    assert!(
        pruned.stats().nodes < exhaustive.stats().nodes,
        "pruning should pay for itself from the opening position"
    );
    assert!(exhaustive.stats().nodes > 0);
}

#[test]
fn test_stats_cover_the_latest_search_only() {
    let mut board = board_from(["x x _", "o o _", "_ _ _"]);
    let mut searcher = Searcher::new();

    searcher.best_move(&mut board, Player::X);
    let first = searcher.stats().nodes;
    searcher.best_move(&mut board, Player::X);

    assert!(first > 0);
    assert_eq!(
        searcher.stats().nodes,
        first,
        "counters must reset, not accumulate across calls"
    );
}

#[test]
fn test_explicit_root_bounds_match_the_default_entry_point() {
    let mut board = board_from(["_ _ _", "_ x _", "_ _ o"]);
    let mut searcher = Searcher::new();

    let plain = searcher.best_move(&mut board, Player::X);
    let seeded = searcher.best_move_bounded(&mut board, Player::X, -SCORE_LIMIT, SCORE_LIMIT);

    assert_eq!(plain, seeded);
}
