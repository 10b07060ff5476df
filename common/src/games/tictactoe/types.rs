use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Cell coordinate on the 3x3 board, `row` top to bottom and `col` left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, TicTacToeError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(TicTacToeError::OutOfBounds { row, col });
        }
        Ok(Self::new(row, col))
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Point-symmetric cell through the center.
    pub fn opposite(&self) -> Position {
        Position::new(BOARD_SIZE - 1 - self.row, BOARD_SIZE - 1 - self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Ongoing,
    Won(Mark),
    Tied,
}

impl TerminalStatus {
    pub fn is_over(self) -> bool {
        self != TerminalStatus::Ongoing
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            TerminalStatus::Won(mark) => Some(mark),
            TerminalStatus::Ongoing | TerminalStatus::Tied => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!(
                "Unknown difficulty '{}', expected one of: easy, medium, hard",
                value
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeError {
    NoAvailableMoves,
    OutOfBounds { row: usize, col: usize },
    CellOccupied(Position),
    RoundOver,
    NotYourTurn,
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::NoAvailableMoves => write!(f, "No empty cells left on the board"),
            TicTacToeError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            TicTacToeError::CellOccupied(position) => write!(
                f,
                "Cell ({}, {}) is already marked",
                position.row, position.col
            ),
            TicTacToeError::RoundOver => write!(f, "Round is already over"),
            TicTacToeError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
