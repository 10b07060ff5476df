mod board;
mod bot_controller;
mod game_state;
mod heuristic;
mod minimax;
mod scoreboard;
mod session;
mod types;
mod win_detector;

pub use board::{Board, CENTER, CORNERS, LINES, Probe, SIDES};
pub use bot_controller::{BotInput, calculate_move, calculate_random_move};
pub use game_state::{GameMode, Player, PlayerKind, TicTacToeGameState};
pub use heuristic::{calculate_heuristic_move, count_threats};
pub use minimax::{calculate_minimax_move, score_moves};
pub use scoreboard::Scoreboard;
pub use session::{RoundSummary, TicTacToeSession};
pub use types::{BOARD_SIZE, Difficulty, Mark, Position, TerminalStatus, TicTacToeError, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
