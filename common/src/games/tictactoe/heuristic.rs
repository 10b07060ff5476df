use crate::games::SessionRng;

use super::board::{Board, CENTER, CORNERS, LINES, SIDES};
use super::bot_controller::calculate_random_move;
use super::types::{Mark, Position, TicTacToeError};

/// Rule-chain opponent. Rules are tried in order and the first one that
/// produces a cell wins:
///
/// 1. complete a line of our own
/// 2. block the opponent's line
/// 3. create a fork (two open lines at once)
/// 4. occupy the cell where the opponent would fork
/// 5. take the center
/// 6. take the corner opposite an opponent corner
/// 7. take a random empty corner
/// 8. take a random empty side
///
/// Rules 3 and 4 probe the board in place; it is left unchanged on return.
pub fn calculate_heuristic_move(
    board: &mut Board,
    opponent_mark: Mark,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Position, TicTacToeError> {
    if board.is_full() {
        return Err(TicTacToeError::NoAvailableMoves);
    }

    if let Some(position) = find_completing_cell(board, bot_mark) {
        return Ok(position);
    }

    if let Some(position) = find_completing_cell(board, opponent_mark) {
        return Ok(position);
    }

    if let Some(position) = find_fork(board, bot_mark) {
        return Ok(position);
    }

    if let Some(position) = find_fork(board, opponent_mark) {
        return Ok(position);
    }

    if board.is_empty(CENTER) {
        return Ok(CENTER);
    }

    if let Some(position) = find_opposite_corner(board, opponent_mark) {
        return Ok(position);
    }

    if let Some(position) = choose_empty(board, &CORNERS, rng) {
        return Ok(position);
    }

    if let Some(position) = choose_empty(board, &SIDES, rng) {
        return Ok(position);
    }

    calculate_random_move(board, rng).ok_or(TicTacToeError::NoAvailableMoves)
}

/// Number of lines holding two `mark` cells and one empty cell.
pub fn count_threats(board: &Board, mark: Mark) -> usize {
    LINES
        .iter()
        .filter(|line| completing_cell(board, line, mark).is_some())
        .count()
}

fn find_completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES
        .iter()
        .find_map(|line| completing_cell(board, line, mark))
}

fn completing_cell(board: &Board, line: &[Position; 3], mark: Mark) -> Option<Position> {
    let mut empty = None;
    let mut count = 0;

    for &position in line {
        match board.get(position) {
            Some(m) if m == mark => count += 1,
            Some(_) => return None,
            None => {
                if empty.is_some() {
                    return None;
                }
                empty = Some(position);
            }
        }
    }

    if count == 2 { empty } else { None }
}

fn find_fork(board: &mut Board, mark: Mark) -> Option<Position> {
    for position in board.empty_cells() {
        let probe = board.probe(position, mark);
        if count_threats(&probe, mark) >= 2 {
            return Some(position);
        }
    }
    None
}

fn find_opposite_corner(board: &Board, opponent_mark: Mark) -> Option<Position> {
    CORNERS
        .iter()
        .filter(|&&corner| board.get(corner) == Some(opponent_mark))
        .map(|corner| corner.opposite())
        .find(|&opposite| board.is_empty(opposite))
}

fn choose_empty(board: &Board, candidates: &[Position], rng: &mut SessionRng) -> Option<Position> {
    let empty: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&position| board.is_empty(position))
        .collect();
    rng.choose(&empty)
}
