mod tictactoe;

pub use tictactoe::{GameAction, TicTacToeGameUi};
