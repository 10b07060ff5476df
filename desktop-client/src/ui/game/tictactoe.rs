use std::time::{Duration, Instant};

use eframe::egui;
use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, GameMode, Mark, PlayerKind, Position, RoundSummary, TerminalStatus,
    TicTacToeSession, WinningLine,
};
use tictactoe_common::log;

use super::super::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    None,
    BackToMenu,
    Quit,
}

/// Geometry of the 3x3 grid inside its allocated rect: square boxes separated
/// by gaps. Clicks that land in a gap hit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoardLayout {
    cell_size: f32,
    spacing: f32,
}

impl BoardLayout {
    const SPACING_RATIO: f32 = 1.0 / 6.0;

    fn fit(available: f32, min_cell: f32, max_cell: f32) -> Self {
        let units = BOARD_SIZE as f32 + (BOARD_SIZE - 1) as f32 * Self::SPACING_RATIO;
        let cell_size = (available / units).clamp(min_cell, max_cell);
        Self {
            cell_size,
            spacing: cell_size * Self::SPACING_RATIO,
        }
    }

    fn side(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32 + self.spacing * (BOARD_SIZE - 1) as f32
    }

    fn cell_rect(&self, board_rect: egui::Rect, position: Position) -> egui::Rect {
        let step = self.cell_size + self.spacing;
        egui::Rect::from_min_size(
            board_rect.min + egui::vec2(position.col as f32 * step, position.row as f32 * step),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    fn cell_at(&self, board_rect: egui::Rect, pointer: egui::Pos2) -> Option<Position> {
        let offset = pointer - board_rect.min;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }
        let step = self.cell_size + self.spacing;
        let position = Position::try_new((offset.y / step) as usize, (offset.x / step) as usize).ok()?;
        self.cell_rect(board_rect, position)
            .contains(pointer)
            .then_some(position)
    }
}

pub struct TicTacToeGameUi {
    session: TicTacToeSession,
    bot_move_delay: Duration,
    bot_turn_started: Option<Instant>,
    last_hover: Option<Position>,
    error: Option<String>,
}

impl TicTacToeGameUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 150.0;
    const PREVIEW_CELL_SIZE: f32 = 30.0;
    const MARK_STROKE_RATIO: f32 = 0.1;
    const BUTTON_SIZE: f32 = 90.0;

    pub fn new(session: TicTacToeSession, bot_move_delay: Duration) -> Self {
        Self {
            session,
            bot_move_delay,
            bot_turn_started: None,
            last_hover: None,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    pub fn render_game(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> GameAction {
        self.advance_bot(ctx);

        let mut action = GameAction::None;

        ui.horizontal(|ui| {
            if Self::side_button(ui, "Quit", colors::QUIT_BUTTON).clicked() {
                action = GameAction::Quit;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if Self::side_button(ui, "Menu", colors::MENU_BUTTON).clicked() {
                    action = GameAction::BackToMenu;
                }
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    self.render_turn_indicator(ui);
                });
            });
        });

        ui.add_space(10.0);

        let scoreboard_height = 140.0;
        let available = ui.available_width().min(ui.available_height() - scoreboard_height);
        let layout = BoardLayout::fit(available, Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);

        ui.vertical_centered(|ui| {
            self.render_board(ui, layout);
        });

        ui.add_space(10.0);
        self.render_scoreboard(ui);

        action
    }

    fn side_button(ui: &mut egui::Ui, text: &str, fill: egui::Color32) -> egui::Response {
        ui.add(
            egui::Button::new(egui::RichText::new(text).size(20.0).color(colors::TEXT))
                .fill(fill)
                .min_size(egui::vec2(Self::BUTTON_SIZE, Self::BUTTON_SIZE / 2.0)),
        )
    }

    fn advance_bot(&mut self, ctx: &egui::Context) {
        if !self.session.is_bot_turn() {
            self.bot_turn_started = None;
            return;
        }

        let started = *self.bot_turn_started.get_or_insert_with(Instant::now);
        let elapsed = started.elapsed();
        if elapsed < self.bot_move_delay {
            ctx.request_repaint_after(self.bot_move_delay - elapsed);
            return;
        }

        self.bot_turn_started = None;
        if let Err(e) = self.session.handle_bot_move() {
            log!("Bot move failed: {}", e);
            self.error = Some(e);
        }
        ctx.request_repaint();
    }

    fn render_turn_indicator(&self, ui: &mut egui::Ui) {
        let state = self.session.state();
        let player = state.current_player();
        let who = match (state.mode, player.kind) {
            (GameMode::PlayerVsPlayer, _) => String::new(),
            (GameMode::PlayerVsBot(_), PlayerKind::Human) => " (You)".to_string(),
            (GameMode::PlayerVsBot(_), PlayerKind::Bot(difficulty)) => {
                format!(" ({} Computer)", difficulty)
            }
        };

        ui.label(
            egui::RichText::new(format!("{} Turn{}", player.mark, who))
                .size(36.0)
                .strong()
                .color(colors::mark_color(player.mark)),
        );
    }

    fn render_board(&mut self, ui: &mut egui::Ui, layout: BoardLayout) {
        let side = layout.side();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        let accepts_input = !self.session.is_bot_turn();
        self.last_hover = None;
        if accepts_input && let Some(pointer) = response.hover_pos() {
            self.last_hover = layout
                .cell_at(rect, pointer)
                .filter(|&position| self.session.state().board.is_empty(position));
        }

        let painter = ui.painter().clone();
        let board = self.session.state().board;
        for position in Board::positions() {
            let cell_rect = layout.cell_rect(rect, position);
            let fill = if self.last_hover == Some(position) {
                colors::BOX_HOVER
            } else {
                colors::BOX
            };
            painter.rect_filled(cell_rect, 0.0, fill);
            if let Some(mark) = board.get(position) {
                Self::draw_mark(&painter, cell_rect, mark);
            }
        }

        if accepts_input
            && response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
            && let Some(position) = layout.cell_at(rect, pointer)
        {
            if let Err(e) = self.session.handle_human_move(position) {
                log!("Rejected move at ({}, {}): {}", position.row, position.col, e);
            }
        }
    }

    fn draw_mark(painter: &egui::Painter, rect: egui::Rect, mark: Mark) {
        let color = colors::mark_color(mark);
        let stroke = egui::Stroke::new(rect.width() * Self::MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                let padding = rect.width() / 4.0;
                painter.line_segment(
                    [
                        egui::pos2(rect.left() + padding, rect.top() + padding),
                        egui::pos2(rect.right() - padding, rect.bottom() - padding),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        egui::pos2(rect.right() - padding, rect.top() + padding),
                        egui::pos2(rect.left() + padding, rect.bottom() - padding),
                    ],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(rect.center(), rect.width() / 3.0, stroke);
            }
        }
    }

    fn draw_winning_line(
        painter: &egui::Painter,
        layout: BoardLayout,
        board_rect: egui::Rect,
        line: &WinningLine,
    ) {
        let start = layout.cell_rect(board_rect, line.start).center();
        let end = layout.cell_rect(board_rect, line.end).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(layout.cell_size * 0.15, colors::WINNING_LINE),
        );
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui) {
        let scoreboard = self.session.scoreboard();
        let entries = [
            ("Cross", scoreboard.x_wins, colors::mark_color(Mark::X)),
            ("Tie", scoreboard.ties, colors::TIE),
            ("Circle", scoreboard.o_wins, colors::mark_color(Mark::O)),
        ];

        ui.horizontal(|ui| {
            let width = 3.0 * 140.0;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
            for (label, count, fill) in entries {
                ui.add(
                    egui::Button::new(
                        egui::RichText::new(format!("{} : {}", label, count))
                            .size(20.0)
                            .color(colors::TEXT),
                    )
                    .fill(fill)
                    .sense(egui::Sense::hover())
                    .min_size(egui::vec2(130.0, 50.0)),
                );
            }

            if let Some(summary) = self.session.last_round() {
                ui.add_space(20.0);
                Self::render_last_round(ui, summary);
            }
        });
    }

    fn render_last_round(ui: &mut egui::Ui, summary: &RoundSummary) {
        let layout = BoardLayout::fit(
            Self::PREVIEW_CELL_SIZE * 3.5,
            Self::PREVIEW_CELL_SIZE,
            Self::PREVIEW_CELL_SIZE,
        );

        ui.vertical(|ui| {
            let text = match summary.status {
                TerminalStatus::Won(mark) => format!("Round {}: {} won", summary.round_number, mark),
                TerminalStatus::Tied => format!("Round {}: tie", summary.round_number),
                TerminalStatus::Ongoing => format!("Round {}", summary.round_number),
            };
            ui.label(egui::RichText::new(text).color(colors::TEXT));

            let side = layout.side();
            let (rect, _response) =
                ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
            let painter = ui.painter().clone();
            for position in Board::positions() {
                let cell_rect = layout.cell_rect(rect, position);
                painter.rect_filled(cell_rect, 0.0, colors::BOX);
                if let Some(mark) = summary.board.get(position) {
                    Self::draw_mark(&painter, cell_rect, mark);
                }
            }
            if let Some(line) = &summary.winning_line {
                Self::draw_winning_line(&painter, layout, rect, line);
            }
        });
    }
}
