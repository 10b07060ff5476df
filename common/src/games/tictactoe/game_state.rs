use crate::games::SessionRng;

use super::board::Board;
use super::types::{Difficulty, Mark, Position, TerminalStatus, TicTacToeError};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsBot(Difficulty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot(Difficulty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub mark: Mark,
    pub kind: PlayerKind,
}

impl Player {
    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Bot(_))
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub players: [Player; 2],
    pub current_player: usize,
    pub status: TerminalStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    /// Marks are dealt to the two seats at random; against a bot the human
    /// seat is also random. Seat one starts the first round.
    pub fn new(mode: GameMode, rng: &mut SessionRng) -> Self {
        let (first_mark, second_mark) = if rng.random_bool() {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };

        let (first_kind, second_kind) = match mode {
            GameMode::PlayerVsPlayer => (PlayerKind::Human, PlayerKind::Human),
            GameMode::PlayerVsBot(difficulty) => {
                if rng.random_bool() {
                    (PlayerKind::Human, PlayerKind::Bot(difficulty))
                } else {
                    (PlayerKind::Bot(difficulty), PlayerKind::Human)
                }
            }
        };

        Self {
            board: Board::new(),
            mode,
            players: [
                Player {
                    mark: first_mark,
                    kind: first_kind,
                },
                Player {
                    mark: second_mark,
                    kind: second_kind,
                },
            ],
            current_player: 0,
            status: TerminalStatus::Ongoing,
            last_move: None,
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_mark(&self) -> Mark {
        self.current_player().mark
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == TerminalStatus::Ongoing && self.current_player().is_bot()
    }

    pub fn place_mark(
        &mut self,
        mark: Mark,
        position: Position,
    ) -> Result<TerminalStatus, TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::RoundOver);
        }

        if mark != self.current_mark() {
            return Err(TicTacToeError::NotYourTurn);
        }

        self.board.place(position, mark)?;
        self.last_move = Some(position);
        self.status = evaluate(&self.board);

        if !self.status.is_over() {
            self.switch_turn();
        }

        Ok(self.status)
    }

    /// Clears the board and picks the starting seat at random. Marks and seats
    /// carry over from the previous round.
    pub fn start_new_round(&mut self, rng: &mut SessionRng) {
        self.board = Board::new();
        self.status = TerminalStatus::Ongoing;
        self.last_move = None;
        self.current_player = rng.random_range(0..self.players.len());
    }

    fn switch_turn(&mut self) {
        self.current_player = 1 - self.current_player;
    }
}
