//! Exhaustive minimax search for Tic-Tac-Toe.
//!
//! This library builds the full game tree reachable from a board, scores every position by
//! backward induction and reads the optimal move off the best-scoring child. Scores are
//! absolute: +1 means X wins, -1 means O wins and 0 is a draw.
//!
//! # Example
//!
//! ```rust
//! use ttt_minimax::boards::tic_tac_toe::TicTacToeBoard;
//! use ttt_minimax::game_tree::GameTree;
//!
//! // X O X
//! // . O O
//! // . X .    with X to move
//! let board: TicTacToeBoard = "XOX .OO .X.".parse().unwrap();
//!
//! // Build and score the tree by hand
//! let mut tree = GameTree::builder().with_node_capacity(16).build();
//! let root = tree.add_root(board).unwrap();
//! tree.build_tree(root).unwrap();
//! assert_eq!(tree.len(), 14);
//! assert_eq!(tree.score_subtree(root).unwrap(), 0);
//!
//! // Or let the tree do all of it
//! let best_move = GameTree::optimal_move(&board).unwrap();
//! assert_eq!(best_move, (1, 0));
//! ```

/// Contains the `Board` trait and the players, outcomes and move type shared with the game tree.
pub mod board;
/// Contains the concrete board implementations.
pub mod boards;
/// Contains the crate's error type.
pub mod error;
/// The core module of the library, containing the `GameTree` implementation.
pub mod game_tree;
/// Contains the `Position` struct, which represents a node in the game tree.
pub mod position;

pub use board::{Board, Move, Outcome, Player};
pub use boards::tic_tac_toe::TicTacToeBoard;
pub use error::{Error, Result};
pub use game_tree::{DEFAULT_NODE_CAPACITY, GameTree, GameTreeBuilder};
pub use position::Position;
