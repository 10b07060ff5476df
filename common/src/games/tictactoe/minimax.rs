use super::board::Board;
use super::types::{Mark, Position, TerminalStatus, TicTacToeError};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Exhaustive search opponent. Ties between equally scored cells go to the
/// first cell in row-major order.
pub fn calculate_minimax_move(
    board: &mut Board,
    opponent_mark: Mark,
    bot_mark: Mark,
) -> Result<Position, TicTacToeError> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (position, score) in score_moves(board, opponent_mark, bot_mark) {
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move.ok_or(TicTacToeError::NoAvailableMoves)
}

/// Exact minimax value of every empty cell for `bot_mark`, in row-major order.
///
/// Each root cell is searched with a full window, so pruning below the root
/// never changes the reported score.
pub fn score_moves(board: &mut Board, opponent_mark: Mark, bot_mark: Mark) -> Vec<(Position, i32)> {
    board
        .empty_cells()
        .into_iter()
        .map(|position| {
            let mut probe = board.probe(position, bot_mark);
            let score = minimax(
                &mut probe,
                opponent_mark,
                bot_mark,
                false,
                1,
                i32::MIN,
                i32::MAX,
            );
            (position, score)
        })
        .collect()
}

fn minimax(
    board: &mut Board,
    opponent_mark: Mark,
    bot_mark: Mark,
    is_maximizing: bool,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        TerminalStatus::Won(winner) if winner == bot_mark => return WIN_SCORE - depth,
        TerminalStatus::Won(_) => return -WIN_SCORE + depth,
        TerminalStatus::Tied => return 0,
        TerminalStatus::Ongoing => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.empty_cells() {
            let mut probe = board.probe(position, bot_mark);
            let eval = minimax(
                &mut probe,
                opponent_mark,
                bot_mark,
                false,
                depth + 1,
                alpha,
                beta,
            );

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.empty_cells() {
            let mut probe = board.probe(position, opponent_mark);
            let eval = minimax(
                &mut probe,
                opponent_mark,
                bot_mark,
                true,
                depth + 1,
                alpha,
                beta,
            );

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::reachable_boards;

    fn plain_minimax(
        board: &mut Board,
        opponent_mark: Mark,
        bot_mark: Mark,
        is_maximizing: bool,
        depth: i32,
    ) -> i32 {
        match evaluate(board) {
            TerminalStatus::Won(winner) if winner == bot_mark => return WIN_SCORE - depth,
            TerminalStatus::Won(_) => return -WIN_SCORE + depth,
            TerminalStatus::Tied => return 0,
            TerminalStatus::Ongoing => {}
        }

        let mark = if is_maximizing { bot_mark } else { opponent_mark };
        let scores = board.empty_cells().into_iter().map(|position| {
            let mut probe = board.probe(position, mark);
            plain_minimax(&mut probe, opponent_mark, bot_mark, !is_maximizing, depth + 1)
        });
        let scores: Vec<i32> = scores.collect();

        if is_maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn assert_never_loses(board: &mut Board, to_move: Mark, bot_mark: Mark) {
        match evaluate(board) {
            TerminalStatus::Won(winner) => {
                assert_eq!(winner, bot_mark, "search opponent lost on {:?}", board);
                return;
            }
            TerminalStatus::Tied => return,
            TerminalStatus::Ongoing => {}
        }

        if to_move == bot_mark {
            let position = calculate_minimax_move(board, bot_mark.opponent(), bot_mark).unwrap();
            let mut probe = board.probe(position, bot_mark);
            assert_never_loses(&mut probe, to_move.opponent(), bot_mark);
        } else {
            for position in board.empty_cells() {
                let mut probe = board.probe(position, to_move);
                assert_never_loses(&mut probe, to_move.opponent(), bot_mark);
            }
        }
    }

    #[test]
    fn test_empty_board_scores_are_all_draws() {
        let mut board = Board::new();

        let scores = score_moves(&mut board, Mark::O, Mark::X);

        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, score)| score == 0));
    }

    #[test]
    fn test_empty_board_picks_first_cell_with_best_score() {
        let mut board = Board::new();
        let scores = score_moves(&mut board, Mark::O, Mark::X);
        let best = scores.iter().map(|&(_, score)| score).max().unwrap();

        let position = calculate_minimax_move(&mut board, Mark::O, Mark::X).unwrap();

        assert_eq!(best, 0);
        assert_eq!(position, Position::new(0, 0));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_takes_immediate_win() {
        #[rustfmt::skip]
        let mut board = Board::from_rows([
            "XX.",
            "OO.",
            "...",
        ]);

        let position = calculate_minimax_move(&mut board, Mark::O, Mark::X).unwrap();

        assert_eq!(position, Position::new(0, 2));
    }

    #[test]
    fn test_winning_score_is_depth_adjusted() {
        #[rustfmt::skip]
        let mut board = Board::from_rows([
            "XX.",
            "OO.",
            "...",
        ]);

        let scores = score_moves(&mut board, Mark::O, Mark::X);
        let (_, score) = scores
            .iter()
            .find(|(position, _)| *position == Position::new(0, 2))
            .unwrap();

        assert_eq!(*score, WIN_SCORE - 1);
    }

    #[test]
    fn test_blocks_opponent() {
        #[rustfmt::skip]
        let mut board = Board::from_rows([
            "XX.",
            "O..",
            "...",
        ]);

        let position = calculate_minimax_move(&mut board, Mark::X, Mark::O).unwrap();

        assert_eq!(position, Position::new(0, 2));
    }

    #[test]
    fn test_pruned_scores_match_exhaustive_search() {
        #[rustfmt::skip]
        let boards = [
            Board::from_rows(["...", "...", "..."]),
            Board::from_rows(["X..", "...", "..."]),
            Board::from_rows(["X..", ".O.", "..."]),
            Board::from_rows(["X.O", ".X.", "..."]),
            Board::from_rows(["XO.", ".X.", "..O"]),
            Board::from_rows(["O..", ".X.", "..O"]),
        ];

        for mut board in boards {
            let bot_mark = if board.count(Mark::X) > board.count(Mark::O) {
                Mark::O
            } else {
                Mark::X
            };
            let opponent_mark = bot_mark.opponent();

            for (position, score) in score_moves(&mut board, opponent_mark, bot_mark) {
                let mut probe = board.probe(position, bot_mark);
                let expected = plain_minimax(&mut probe, opponent_mark, bot_mark, false, 1);
                assert_eq!(score, expected, "score mismatch at {:?}", position);
            }
        }
    }

    #[test]
    fn test_never_loses_moving_first() {
        let mut board = Board::new();

        assert_never_loses(&mut board, Mark::X, Mark::X);

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_never_loses_moving_second() {
        let mut board = Board::new();

        assert_never_loses(&mut board, Mark::X, Mark::O);
    }

    #[test]
    fn test_self_play_ends_in_a_tie() {
        let mut board = Board::new();
        let mut mark = Mark::X;

        while evaluate(&board) == TerminalStatus::Ongoing {
            let position = calculate_minimax_move(&mut board, mark.opponent(), mark).unwrap();
            board.place(position, mark).unwrap();
            mark = mark.opponent();
        }

        assert_eq!(evaluate(&board), TerminalStatus::Tied);
    }

    #[test]
    fn test_board_is_unchanged_after_search() {
        for mut board in reachable_boards() {
            if evaluate(&board).is_over() {
                continue;
            }
            let bot_mark = board.side_to_move();
            let snapshot = board;

            let position = calculate_minimax_move(&mut board, bot_mark.opponent(), bot_mark).unwrap();

            assert_eq!(board, snapshot);
            assert!(board.is_empty(position), "{:?} picked on {:?}", position, board);
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        #[rustfmt::skip]
        let mut board = Board::from_rows([
            "XOX",
            "XOO",
            "OXX",
        ]);

        let result = calculate_minimax_move(&mut board, Mark::O, Mark::X);

        assert_eq!(result, Err(TicTacToeError::NoAvailableMoves));
    }
}
