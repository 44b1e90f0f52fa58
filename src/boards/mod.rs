//! Contains the concrete boards the game tree can search.

/// The 3x3 Tic-Tac-Toe board.
pub mod tic_tac_toe;
