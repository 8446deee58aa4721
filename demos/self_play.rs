//! The engine against itself.
//!
//! Plays one full game with both sides driven by the alpha-beta
//! searcher, printing the board and the search statistics after every
//! move. Two perfect players always finish in a draw, so the ending
//! never changes; the interesting part is watching the node counts
//! fall as the board fills up.

use tictactoe_minimax::{Game, Player, Searcher};

fn main() {
    // Initialize logging; RUST_LOG=debug shows each search call.
    env_logger::init();

    println!("Minimax self-play");
    println!("=================");
    println!();

    let mut game = Game::new();
    let mut x = Searcher::new();
    let mut o = Searcher::new();

    println!("{}", game.board());

    while !game.is_over() {
        let mover = game.to_move();
        match mover {
            Player::X => game.play_with(&mut x),
            Player::O => game.play_with(&mut o),
        }
        .expect("self-play only makes legal moves");

        let stats = match mover {
            Player::X => x.stats(),
            Player::O => o.stats(),
        };
        println!("{} plays  [{}]", mover, stats.summary());
        println!("{}", game.board());
    }

    match game.winner() {
        // Unreachable while both sides stay perfect.
        Some(player) => println!("Player {} wins!", player),
        None => println!("Draw, as perfect play demands."),
    }
}
