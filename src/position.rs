use crate::board::{Board, Outcome, Player};

/// Represents a single node in the game tree.
///
/// Each position owns an independent snapshot of the board and caches its minimax score
/// once it has been computed. Parent and child links live in the tree arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Position<B: Board> {
    /// The board state that this position represents.
    board: B,
    /// The minimax score, `None` until computed.
    score: Option<i8>,
}

impl<B: Board> Position<B> {
    /// Creates a new, unscored position wrapping the given board.
    pub fn new(board: B) -> Self {
        Position { board, score: None }
    }

    /// Returns the board snapshot held by this position.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutable access to the board. The tree is responsible for dropping stale scores.
    pub(crate) fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Returns the memoized score, if it has been computed.
    pub fn score(&self) -> Option<i8> {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: i8) {
        self.score = Some(score);
    }

    pub(crate) fn clear_score(&mut self) {
        self.score = None;
    }

    /// Whether the board of this position has a winner or no empty cells left.
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Score of a finished board: +1 if X won, -1 if O won, 0 for a draw.
    ///
    /// The sign is absolute and does not depend on whose turn it is. `None` while pending.
    pub fn terminal_score(&self) -> Option<i8> {
        match self.board.winner() {
            Outcome::WinnerX => Some(1),
            Outcome::WinnerO => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Pending => None,
        }
    }

    /// Whether the player to move here prefers `candidate` over `best`.
    ///
    /// X maximises and O minimises. Ties keep `best`.
    pub fn prefers(&self, candidate: i8, best: i8) -> bool {
        match self.board.player() {
            Player::X => candidate > best,
            Player::O => candidate < best,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::position::Position;

    fn position(cells: &str) -> Position<TicTacToeBoard> {
        Position::new(cells.parse().unwrap())
    }

    #[test]
    fn terminal_scores_use_absolute_sign() {
        let x_win = position("XO. .X. .OX");
        let o_win = position(".XO XO. OX.");
        let draw = position("XOX OOX XXO");
        let open = Position::new(TicTacToeBoard::new());

        assert_eq!(x_win.terminal_score(), Some(1));
        assert_eq!(o_win.terminal_score(), Some(-1));
        assert_eq!(draw.terminal_score(), Some(0));
        assert_eq!(open.terminal_score(), None);
        assert!(draw.is_terminal());
        assert!(!open.is_terminal());
    }

    #[test]
    fn preference_follows_player_to_move() {
        let x_to_move = Position::new(TicTacToeBoard::new());
        let o_to_move = position("X.. ... ...");

        assert!(x_to_move.prefers(1, 0));
        assert!(!x_to_move.prefers(0, 0));
        assert!(o_to_move.prefers(-1, 0));
        assert!(!o_to_move.prefers(1, 0));
    }

    #[test]
    fn clear_score_forgets_memo() {
        let mut position = Position::new(TicTacToeBoard::new());
        position.set_score(0);
        position.board_mut().mark(0, 0).unwrap();
        assert_eq!(position.score(), Some(0));

        position.clear_score();

        assert_eq!(position.score(), None);
    }
}
