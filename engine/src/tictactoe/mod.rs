mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, IllegalMoveError};
pub use bot::{BotInput, BotType, SearchResult, best_move, calculate_move};
pub use game_state::{GameError, TicTacToeGameState};
pub use types::{CELL_COUNT, GameStatus, Mark, WINNING_LINES, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
