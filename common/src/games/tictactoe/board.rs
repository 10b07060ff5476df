use std::ops::{Deref, DerefMut};

use super::types::{BOARD_SIZE, Mark, Position, TicTacToeError};

pub const CENTER: Position = Position::new(1, 1);

pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];

pub const SIDES: [Position; 4] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 2),
    Position::new(2, 1),
];

/// Rows top to bottom, columns left to right, main diagonal, anti diagonal.
pub const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// All coordinates in row-major order. Every scan over the board uses this order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells[position.row][position.col]
    }

    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), TicTacToeError> {
        if !position.is_on_board() {
            return Err(TicTacToeError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }
        if !self.is_empty(position) {
            return Err(TicTacToeError::CellOccupied(position));
        }
        self.cells[position.row][position.col] = Some(mark);
        Ok(())
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Self::positions().filter(|&p| self.is_empty(p)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }

    /// Places `mark` for the lifetime of the returned guard. Whatever the cell
    /// held before is written back when the guard is dropped.
    pub fn probe(&mut self, position: Position, mark: Mark) -> Probe<'_> {
        let previous = self.cells[position.row][position.col].replace(mark);
        Probe {
            board: self,
            position,
            previous,
        }
    }

    /// X moves first, so X is to move whenever the counts are equal.
    #[cfg(test)]
    pub(crate) fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                let mark = match symbol {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    '.' => continue,
                    other => panic!("unexpected board symbol {:?}", other),
                };
                board.cells[row][col] = Some(mark);
            }
        }
        board
    }
}

pub struct Probe<'a> {
    board: &'a mut Board,
    position: Position,
    previous: Option<Mark>,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.row][self.position.col] = self.previous;
    }
}
