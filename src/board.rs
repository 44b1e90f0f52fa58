use crate::error::Result;
use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A move on the board, given as `(row, col)` with both coordinates in `0..BOARD_SIZE`.
pub type Move = (usize, usize);

/// The interface the game tree needs from a board.
///
/// Every position in the tree owns its own board, so cloning must produce an independent
/// copy. Equality is used to compare snapshots.
pub trait Board: Clone + PartialEq + fmt::Debug {
    /// Returns the player whose turn it is.
    fn player(&self) -> Player;

    /// Returns the current result of the board.
    fn winner(&self) -> Outcome;

    /// Returns the legal moves in a fixed order. The tree creates children in this order,
    /// so it also decides which move wins a tie.
    fn legal_moves(&self) -> impl Iterator<Item = Move> + '_;

    /// Places the current player's mark at `(row, col)` and passes the turn.
    fn mark(&mut self, row: usize, col: usize) -> Result<()>;

    /// Returns the single move that turns this board into `next`, if there is one.
    fn diff(&self, next: &Self) -> Option<Move>;

    /// Whether the game is over, either won or drawn.
    fn is_terminal(&self) -> bool {
        self.winner().is_terminal()
    }
}

/// Represents the two players. X always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player who moves after this one.
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
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Represents the result of a board, from an absolute X/O point of view.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Outcome {
    /// The game is still ongoing.
    Pending,
    /// The board is full and nobody completed a line.
    Draw,
    /// X completed a line.
    WinnerX,
    /// O completed a line.
    WinnerO,
}

impl Outcome {
    /// Builds the winning outcome for the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::WinnerX,
            Player::O => Outcome::WinnerO,
        }
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WinnerX => Some(Player::X),
            Outcome::WinnerO => Some(Player::O),
            Outcome::Pending | Outcome::Draw => None,
        }
    }

    /// Whether the outcome ends the game.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Pending
    }
}
