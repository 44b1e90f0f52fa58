use crate::board::{BOARD_SIZE, Board, Move, Outcome, Player};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The 8 lines that win the game: 3 rows, 3 columns and 2 diagonals.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 grid of cells, each either empty or holding a player's mark.
pub type Grid = [[Option<Player>; BOARD_SIZE]; BOARD_SIZE];

/// A Tic-Tac-Toe board together with the player whose turn it is.
///
/// The board is only changed through [`Board::mark`], which places the current
/// player's mark and hands the turn to the opponent. Cloning produces a fully independent
/// copy of the grid.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    grid: Grid,
    current_player: Player,
}

impl TicTacToeBoard {
    /// Creates a blank board with X to move.
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            current_player: Player::X,
        }
    }

    /// Creates a board from an explicit grid and the player to move.
    ///
    /// The grid must hold as many X marks as O marks, or exactly one more X. The player to
    /// move is taken as given, so synthetic positions can be set up for analysis.
    pub fn from_grid(grid: Grid, player: Player) -> Result<Self> {
        let x_count = count_marks(&grid, Player::X);
        let o_count = count_marks(&grid, Player::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(Self {
            grid,
            current_player: player,
        })
    }

    /// Returns the mark in the given cell, `None` if it is empty or out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// Returns the raw grid, indexed as `grid[row][col]`.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(Option::is_some)
    }
}

impl Board for TicTacToeBoard {
    /// Returns the player whose turn it is.
    fn player(&self) -> Player {
        self.current_player
    }

    /// Scans all winning lines and reports the result of the board.
    fn winner(&self) -> Outcome {
        for line in &WINNING_LINES {
            let [a, b, c] = line.map(|(row, col)| self.grid[row][col]);
            if let (Some(first), Some(second), Some(third)) = (a, b, c) {
                if first == second && second == third {
                    return Outcome::won_by(first);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Pending
        }
    }

    /// Returns the empty cells in row-major order.
    ///
    /// The sequence is lazy and recomputed on every call.
    fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        all_cells().filter(move |&(row, col)| self.grid[row][col].is_none())
    }

    /// Places the current player's mark at `(row, col)` and passes the turn.
    ///
    /// Fails without touching the board if the cell is out of bounds or occupied, or if
    /// the game is already over.
    fn mark(&mut self, row: usize, col: usize) -> Result<()> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.grid[row][col].is_some() {
            return Err(Error::CellOccupied { row, col });
        }

        self.grid[row][col] = Some(self.current_player);
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Returns the single cell that is empty here and marked in `next`.
    ///
    /// `None` if the boards differ in any other way.
    fn diff(&self, next: &Self) -> Option<Move> {
        let mut changed = None;
        for (row, col) in all_cells() {
            match (self.grid[row][col], next.grid[row][col]) {
                (before, after) if before == after => {}
                (None, Some(_)) if changed.is_none() => changed = Some((row, col)),
                _ => return None,
            }
        }
        changed
    }
}

impl Default for TicTacToeBoard {
    /// Creates a new Tic-Tac-Toe board with player 'X' starting.
    fn default() -> Self {
        TicTacToeBoard::new()
    }
}

fn all_cells() -> impl Iterator<Item = Move> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}

fn count_marks(grid: &Grid, player: Player) -> usize {
    grid.iter()
        .flatten()
        .filter(|cell| **cell == Some(player))
        .count()
}

impl FromStr for TicTacToeBoard {
    type Err = Error;

    /// Parses nine cells in row-major order: `X`, `O`, or one of `.`, `-`, `_` for an
    /// empty cell. Whitespace is ignored. The player to move is inferred from the counts.
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: cells.len(),
            });
        }

        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (position, character) in cells.into_iter().enumerate() {
            grid[position / BOARD_SIZE][position % BOARD_SIZE] = match character {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '-' | '_' => None,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }

        let player = if count_marks(&grid, Player::X) == count_marks(&grid, Player::O) {
            Player::X
        } else {
            Player::O
        };
        TicTacToeBoard::from_grid(grid, player)
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                writeln!(f, "-+-+-")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
