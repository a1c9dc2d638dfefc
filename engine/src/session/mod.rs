pub mod tictactoe_session;

use std::future::Future;

use crate::tictactoe::{CELL_COUNT, GameStatus, Mark, WinningLine};

pub use tictactoe_session::{PlayerKind, SessionConfig, TicTacToeSessionState, run_game_loop};

/// Snapshot sent to the collaborating UI layer after every applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStateUpdate {
    pub cells: [Mark; CELL_COUNT],
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;
}
