extern crate ttt_minimax;

use ttt_minimax::board::{Board, Outcome};
use ttt_minimax::boards::tic_tac_toe::TicTacToeBoard;
use ttt_minimax::game_tree::GameTree;

fn main() {
    env_logger::init();

    // Start from a blank board, X to move
    let mut board = TicTacToeBoard::default();

    // Both sides ask the tree for their move every turn
    while !board.is_terminal() {
        let player = board.player();
        let (row, col) = match GameTree::optimal_move(&board) {
            Ok(best_move) => best_move,
            Err(err) => {
                eprintln!("search failed: {err}");
                std::process::exit(1);
            }
        };
        if let Err(err) = board.mark(row, col) {
            eprintln!("could not play ({row}, {col}): {err}");
            std::process::exit(1);
        }
        println!("{player} plays ({row}, {col})\n{board}");
    }

    // Perfect play from both sides always ends in a draw
    let outcome = board.winner();
    println!("Result: {:?}", outcome);
    assert_eq!(outcome, Outcome::Draw);
}
