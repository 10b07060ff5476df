use crate::games::SessionRng;

use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::heuristic::calculate_heuristic_move;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Mark, Position, TicTacToeError};

pub struct BotInput {
    pub board: Board,
    pub opponent_mark: Mark,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, opponent_mark: Mark, bot_mark: Mark) -> Self {
        Self {
            board,
            opponent_mark,
            bot_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        let bot_mark = state.current_mark();
        Self::new(state.board, bot_mark.opponent(), bot_mark)
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<Position, TicTacToeError> {
    let mut board = input.board;
    match difficulty {
        Difficulty::Easy => {
            calculate_random_move(&board, rng).ok_or(TicTacToeError::NoAvailableMoves)
        }
        Difficulty::Medium => {
            calculate_heuristic_move(&mut board, input.opponent_mark, input.bot_mark, rng)
        }
        Difficulty::Hard => calculate_minimax_move(&mut board, input.opponent_mark, input.bot_mark),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&board.empty_cells())
}
