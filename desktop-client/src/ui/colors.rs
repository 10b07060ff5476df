use eframe::egui::Color32;
use tictactoe_common::games::tictactoe::Mark;

pub const BACKGROUND: Color32 = Color32::from_rgb(29, 142, 150);
pub const MENU_BACKGROUND: Color32 = Color32::from_rgb(200, 200, 200);
pub const BOX: Color32 = Color32::from_rgb(36, 53, 63);
pub const BOX_HOVER: Color32 = Color32::from_rgb(56, 83, 98);
pub const BUTTON: Color32 = Color32::from_rgb(100, 150, 0);
pub const MENU_BUTTON: Color32 = Color32::from_rgb(172, 190, 200);
pub const QUIT_BUTTON: Color32 = Color32::from_rgb(100, 110, 69);
pub const TIE: Color32 = Color32::from_rgb(172, 190, 200);
pub const TEXT: Color32 = Color32::BLACK;
pub const WINNING_LINE: Color32 = Color32::from_rgba_premultiplied(50, 200, 50, 200);

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => Color32::from_rgb(98, 193, 189),
        Mark::O => Color32::from_rgb(232, 180, 81),
    }
}
