use std::time::Duration;

use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeSession};
use tictactoe_common::log;

use super::colors;
use super::game::{GameAction, TicTacToeGameUi};
use crate::config::{ClientConfigManager, Config, GameModeKind};

enum Screen {
    MainMenu,
    DifficultySelect,
    InGame(Box<TicTacToeGameUi>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    None,
    Mode(GameModeKind),
    Difficulty(Difficulty),
    Back,
    Quit,
}

pub struct MenuApp {
    config_manager: ClientConfigManager,
    config: Config,
    screen: Screen,
    error: Option<String>,
}

impl MenuApp {
    const BUTTON_WIDTH: f32 = 320.0;
    const BUTTON_HEIGHT: f32 = 80.0;

    pub fn new(config_manager: ClientConfigManager, config: Config, start_mode: Option<GameMode>) -> Self {
        let mut app = Self {
            config_manager,
            config,
            screen: Screen::MainMenu,
            error: None,
        };
        if let Some(mode) = start_mode {
            app.start_game(mode);
        }
        app
    }

    fn start_game(&mut self, mode: GameMode) {
        log!("Starting {:?}", mode);
        let session = TicTacToeSession::new(mode, SessionRng::from_random());
        let delay = Duration::from_millis(u64::from(self.config.bot_move_delay_ms));
        self.screen = Screen::InGame(Box::new(TicTacToeGameUi::new(session, delay)));
    }

    fn save_selection(&mut self, mode: GameModeKind, difficulty: Option<Difficulty>) {
        let result = self.config_manager.update_config(|config| {
            config.last_mode = Some(mode);
            if let Some(difficulty) = difficulty {
                config.difficulty = difficulty;
            }
        });
        match result {
            Ok(config) => self.config = config,
            Err(e) => {
                log!("Failed to save config: {}", e);
                self.error = Some(format!("Failed to save config: {}", e));
            }
        }
    }

    fn menu_button(ui: &mut egui::Ui, text: &str, fill: egui::Color32, highlighted: bool) -> egui::Response {
        let mut rich_text = egui::RichText::new(text).size(32.0).color(colors::TEXT);
        if highlighted {
            rich_text = rich_text.strong();
        }
        ui.add(
            egui::Button::new(rich_text)
                .fill(fill)
                .min_size(egui::vec2(Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT)),
        )
    }

    fn render_title(ui: &mut egui::Ui, text: &str) {
        ui.add_space(60.0);
        ui.label(egui::RichText::new(text).size(56.0).strong().color(colors::TEXT));
        ui.add_space(40.0);
    }

    fn render_main_menu(ui: &mut egui::Ui, last_mode: Option<GameModeKind>) -> MenuChoice {
        let mut choice = MenuChoice::None;

        ui.vertical_centered(|ui| {
            Self::render_title(ui, "Tic-tac-toe");

            let modes = [
                ("Player vs Player", GameModeKind::PlayerVsPlayer),
                ("Player vs Computer", GameModeKind::PlayerVsComputer),
            ];
            for (label, mode) in modes {
                if Self::menu_button(ui, label, colors::BUTTON, last_mode == Some(mode)).clicked() {
                    choice = MenuChoice::Mode(mode);
                }
                ui.add_space(20.0);
            }

            if Self::menu_button(ui, "Quit", colors::QUIT_BUTTON, false).clicked() {
                choice = MenuChoice::Quit;
            }
        });

        choice
    }

    fn render_difficulty_select(ui: &mut egui::Ui, current: Difficulty) -> MenuChoice {
        let mut choice = MenuChoice::None;

        ui.vertical_centered(|ui| {
            Self::render_title(ui, "Difficulty");

            for difficulty in Difficulty::ALL {
                if Self::menu_button(ui, difficulty.name(), colors::BUTTON, difficulty == current).clicked() {
                    choice = MenuChoice::Difficulty(difficulty);
                }
                ui.add_space(20.0);
            }

            if Self::menu_button(ui, "Back", colors::MENU_BUTTON, false).clicked() {
                choice = MenuChoice::Back;
            }
        });

        choice
    }

    fn apply_choice(&mut self, choice: MenuChoice, ctx: &egui::Context) {
        match choice {
            MenuChoice::None => {}
            MenuChoice::Mode(GameModeKind::PlayerVsPlayer) => {
                self.save_selection(GameModeKind::PlayerVsPlayer, None);
                self.start_game(GameMode::PlayerVsPlayer);
            }
            MenuChoice::Mode(GameModeKind::PlayerVsComputer) => {
                self.screen = Screen::DifficultySelect;
            }
            MenuChoice::Difficulty(difficulty) => {
                self.save_selection(GameModeKind::PlayerVsComputer, Some(difficulty));
                self.start_game(GameMode::PlayerVsBot(difficulty));
            }
            MenuChoice::Back => {
                self.screen = Screen::MainMenu;
            }
            MenuChoice::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }

        let background = match self.screen {
            Screen::InGame(_) => colors::BACKGROUND,
            Screen::MainMenu | Screen::DifficultySelect => colors::MENU_BACKGROUND,
        };

        let last_mode = self.config.last_mode;
        let difficulty = self.config.difficulty;
        let mut choice = MenuChoice::None;
        let mut game_action = GameAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| match &mut self.screen {
                Screen::MainMenu => choice = Self::render_main_menu(ui, last_mode),
                Screen::DifficultySelect => choice = Self::render_difficulty_select(ui, difficulty),
                Screen::InGame(game_ui) => {
                    game_action = game_ui.render_game(ui, ctx);
                    if let Some(error) = game_ui.take_error() {
                        self.error = Some(error);
                    }
                }
            });

        match game_action {
            GameAction::None => {}
            GameAction::BackToMenu => self.screen = Screen::MainMenu,
            GameAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }

        self.apply_choice(choice, ctx);
    }
}
