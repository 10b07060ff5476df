use super::board::{Board, LINES};
use super::types::{Mark, TerminalStatus, WinningLine};

pub fn evaluate(board: &Board) -> TerminalStatus {
    if let Some(mark) = check_win(board) {
        return TerminalStatus::Won(mark);
    }

    if board.is_full() {
        TerminalStatus::Tied
    } else {
        TerminalStatus::Ongoing
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First line in table order whose three cells hold the same mark.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[first, middle, last]| {
        let mark = board.get(first)?;
        if board.get(middle) == Some(mark) && board.get(last) == Some(mark) {
            Some(WinningLine::new(mark, first, last))
        } else {
            None
        }
    })
}

/// Every distinct board reachable from the empty board with X moving first,
/// finished boards included.
#[cfg(test)]
pub(crate) fn reachable_boards() -> Vec<Board> {
    use std::collections::HashSet;

    fn collect(board: &mut Board, mark: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) || evaluate(board).is_over() {
            return;
        }
        for position in board.empty_cells() {
            let mut probe = board.probe(position, mark);
            collect(&mut probe, mark.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    collect(&mut Board::new(), Mark::X, &mut seen);
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Position;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), TerminalStatus::Ongoing);
    }

    #[test]
    fn test_row_win() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "OO.",
            "XXX",
            "...",
        ]);

        assert_eq!(evaluate(&board), TerminalStatus::Won(Mark::X));
    }

    #[test]
    fn test_column_win() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "XO.",
            "XO.",
            ".OX",
        ]);

        assert_eq!(evaluate(&board), TerminalStatus::Won(Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win_reports_line() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "XXO",
            ".O.",
            "O.X",
        ]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_win_on_full_board_is_not_a_tie() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "XOX",
            "OXO",
            "OXX",
        ]);

        assert_eq!(evaluate(&board), TerminalStatus::Won(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tied() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "XOX",
            "XOO",
            "OXX",
        ]);

        assert_eq!(evaluate(&board), TerminalStatus::Tied);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            "XO.",
            ".X.",
            "..O",
        ]);

        assert_eq!(evaluate(&board), TerminalStatus::Ongoing);
        assert_eq!(check_win_with_line(&board), None);
    }

    #[test]
    fn test_reachable_board_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_reachable_boards_have_at_most_one_winner() {
        for board in &reachable_boards() {
            let winners: Vec<Mark> = LINES
                .iter()
                .filter_map(|line| {
                    let mark = board.get(line[0])?;
                    line.iter().all(|&p| board.get(p) == Some(mark)).then_some(mark)
                })
                .collect();
            assert!(
                winners.windows(2).all(|pair| pair[0] == pair[1]),
                "both marks complete a line on {:?}",
                board
            );
            match evaluate(board) {
                TerminalStatus::Tied => assert!(winners.is_empty() && board.is_full()),
                TerminalStatus::Won(mark) => assert_eq!(winners.first(), Some(&mark)),
                TerminalStatus::Ongoing => assert!(winners.is_empty() && !board.is_full()),
            }
        }
    }
}
