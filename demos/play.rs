//! Play against the engine from the terminal.
//!
//! Pick a side, then enter moves as "row col" with both numbers in
//! 0..=2. The engine answers with a provably optimal reply, so the
//! best result on offer is a draw.

use std::io::{self, Write};

use tictactoe_minimax::{Coord, Game, Player, Searcher};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Tic-tac-toe vs. the minimax engine");
    println!("==================================");
    println!();

    let human = prompt_side();

    // The full tree is cheap at this size, so this demo runs the
    // exhaustive searcher and shows what each move costs without
    // pruning. Swap in `Searcher::new()` to watch the counts drop.
    let mut engine = Searcher::exhaustive();
    let mut game = Game::new();

    while !game.is_over() {
        println!("{}", game.board());

        if game.to_move() == human {
            let coord = match prompt_move(human) {
                Some(coord) => coord,
                None => continue,
            };
            if let Err(err) = game.play(coord) {
                println!("Invalid move: {}. Try again.", err);
            }
        } else {
            // Search on a scratch copy; the move itself goes through
            // the game so the session state stays in charge.
            let mut scratch = *game.board();
            let reply = engine.best_move(&mut scratch, game.to_move());
            let coord = reply.coord.expect("the game is not over");

            println!("Engine plays {}  [{}]", coord, engine.stats().summary());
            game.play(coord).expect("engine moves are always legal");
        }
    }

    println!("{}", game.board());
    match game.winner() {
        Some(player) => println!("Player {} wins!", player),
        None => println!("The game is a draw, as it must be."),
    }
}

/// Asks which side the human wants; x moves first.
fn prompt_side() -> Player {
    loop {
        print!("Play as x or o? ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();

        match input.trim() {
            "x" | "X" => return Player::X,
            "o" | "O" => return Player::O,
            _ => println!("Enter x or o."),
        }
    }
}

/// Reads a move as "row col". Returns None on malformed input so the
/// main loop can prompt again; out-of-range numbers go through and get
/// rejected by the game itself.
fn prompt_move(player: Player) -> Option<Coord> {
    print!("Your move, {} (row col, each 0-2): ", player);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    let coords: Vec<usize> = input
        .trim()
        .split_whitespace()
        .filter_map(|s| s.parse::<usize>().ok())
        .collect();

    if coords.len() != 2 {
        println!("Enter two numbers, row and column.");
        return None;
    }

    Some(Coord::new(coords[0], coords[1]))
}
