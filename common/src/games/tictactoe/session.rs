use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{GameMode, PlayerKind, TicTacToeGameState};
use super::scoreboard::Scoreboard;
use super::types::{Mark, Position, TerminalStatus, TicTacToeError, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_number: u32,
    pub board: Board,
    pub status: TerminalStatus,
    pub winning_line: Option<WinningLine>,
}

/// One sitting at the board: the current round, the running scoreboard and the
/// session's randomness. Finished rounds are scored and replaced immediately.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    scoreboard: Scoreboard,
    rng: SessionRng,
    last_round: Option<RoundSummary>,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode, mut rng: SessionRng) -> Self {
        let state = TicTacToeGameState::new(mode, &mut rng);
        log!(
            "New {:?} session (seed {}), seat one plays {} ({:?}), seat two plays {} ({:?})",
            mode,
            rng.seed(),
            state.players[0].mark,
            state.players[0].kind,
            state.players[1].mark,
            state.players[1].kind
        );

        Self {
            state,
            scoreboard: Scoreboard::new(),
            rng,
            last_round: None,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.state.is_bot_turn()
    }

    pub fn handle_human_move(&mut self, position: Position) -> Result<TerminalStatus, String> {
        let player = *self.state.current_player();
        if player.is_bot() {
            return Err(TicTacToeError::NotYourTurn.to_string());
        }
        self.apply_move(player.mark, position)
    }

    pub fn handle_bot_move(&mut self) -> Result<(Position, TerminalStatus), String> {
        let player = *self.state.current_player();
        let PlayerKind::Bot(difficulty) = player.kind else {
            return Err(TicTacToeError::NotYourTurn.to_string());
        };

        let input = BotInput::from_game_state(&self.state);
        let position =
            calculate_move(difficulty, input, &mut self.rng).map_err(|e| e.to_string())?;
        log!(
            "{} bot plays {} at ({}, {})",
            difficulty,
            player.mark,
            position.row,
            position.col
        );

        let status = self.apply_move(player.mark, position)?;
        Ok((position, status))
    }

    fn apply_move(&mut self, mark: Mark, position: Position) -> Result<TerminalStatus, String> {
        let status = self
            .state
            .place_mark(mark, position)
            .map_err(|e| e.to_string())?;

        if status.is_over() {
            self.finish_round(status);
        }

        Ok(status)
    }

    fn finish_round(&mut self, status: TerminalStatus) {
        self.scoreboard.record(status);

        let summary = RoundSummary {
            round_number: self.scoreboard.rounds_played(),
            board: self.state.board,
            status,
            winning_line: check_win_with_line(&self.state.board),
        };
        log!(
            "Round {} finished: {:?} (X {} / tie {} / O {})",
            summary.round_number,
            status,
            self.scoreboard.x_wins,
            self.scoreboard.ties,
            self.scoreboard.o_wins
        );
        self.last_round = Some(summary);

        self.state.start_new_round(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Difficulty;

    fn play_out(session: &mut TicTacToeSession, moves: &[Position]) -> TerminalStatus {
        let mut status = TerminalStatus::Ongoing;
        for &position in moves {
            status = session.handle_human_move(position).unwrap();
        }
        status
    }

    #[test]
    fn test_finished_round_is_scored_and_reset() {
        let mut session = TicTacToeSession::new(GameMode::PlayerVsPlayer, SessionRng::new(10));
        let starter = session.state().current_mark();

        let status = play_out(
            &mut session,
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(0, 2),
            ],
        );

        assert_eq!(status, TerminalStatus::Won(starter));
        assert_eq!(session.scoreboard().wins(starter), 1);
        assert_eq!(session.scoreboard().rounds_played(), 1);
        assert_eq!(session.state().board, Board::new());
        assert_eq!(session.state().status, TerminalStatus::Ongoing);

        let summary = session.last_round().unwrap();
        assert_eq!(summary.round_number, 1);
        assert_eq!(summary.status, TerminalStatus::Won(starter));
        assert_eq!(summary.board.count(starter), 3);
        let line = summary.winning_line.unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_tied_round_counts_as_tie() {
        let mut session = TicTacToeSession::new(GameMode::PlayerVsPlayer, SessionRng::new(11));

        // a b a / a b b / b a a, no line for either side
        let status = play_out(
            &mut session,
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 0),
                Position::new(2, 2),
            ],
        );

        assert_eq!(status, TerminalStatus::Tied);
        assert_eq!(session.scoreboard().ties, 1);
        assert_eq!(session.scoreboard().x_wins + session.scoreboard().o_wins, 0);
    }

    #[test]
    fn test_human_cannot_move_for_bot() {
        let mut session =
            TicTacToeSession::new(GameMode::PlayerVsBot(Difficulty::Medium), SessionRng::new(0));
        if !session.is_bot_turn() {
            session.handle_human_move(Position::new(0, 0)).unwrap();
        }

        let result = session.handle_human_move(Position::new(2, 2));

        assert!(result.is_err());
    }

    #[test]
    fn test_bot_move_rejected_on_human_turn() {
        let mut session = TicTacToeSession::new(GameMode::PlayerVsPlayer, SessionRng::new(0));

        assert!(session.handle_bot_move().is_err());
    }

    #[test]
    fn test_hard_bot_never_loses_against_random_human_moves() {
        let mut session =
            TicTacToeSession::new(GameMode::PlayerVsBot(Difficulty::Hard), SessionRng::new(77));
        let mut human_rng = SessionRng::new(78);
        let bot_mark = session
            .state()
            .players
            .iter()
            .find(|p| p.is_bot())
            .map(|p| p.mark)
            .unwrap();

        while session.scoreboard().rounds_played() < 10 {
            if session.is_bot_turn() {
                session.handle_bot_move().unwrap();
            } else {
                let empty = session.state().board.empty_cells();
                let position = human_rng.choose(&empty).unwrap();
                session.handle_human_move(position).unwrap();
            }
        }

        assert_eq!(session.scoreboard().wins(bot_mark.opponent()), 0);
    }
}
