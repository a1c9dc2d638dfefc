use std::sync::Arc;

use tokio::sync::{Mutex, Notify};

use super::{GameBroadcaster, GameOverNotification, GameStateUpdate};
use crate::log;
use crate::session_rng::SessionRng;
use crate::tictactoe::{BotInput, BotType, GameStatus, Mark, TicTacToeGameState, calculate_move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot(BotType),
}

/// Immutable per-session setup: who plays each mark and the RNG seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub x: PlayerKind,
    pub o: PlayerKind,
    pub seed: u64,
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub turn_notify: Arc<Notify>,
    config: SessionConfig,
    rng: Arc<std::sync::Mutex<SessionRng>>,
}

impl TicTacToeSessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new())),
            turn_notify: Arc::new(Notify::new()),
            rng: Arc::new(std::sync::Mutex::new(SessionRng::new(config.seed))),
            config,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn bot_for(&self, mark: Mark) -> Option<BotType> {
        let kind = match mark {
            Mark::X => self.config.x,
            Mark::O => self.config.o,
            Mark::Empty => return None,
        };
        match kind {
            PlayerKind::Bot(bot_type) => Some(bot_type),
            PlayerKind::Human => None,
        }
    }

    fn is_human_turn(&self, mark: Mark) -> bool {
        mark != Mark::Empty && self.bot_for(mark).is_none()
    }

    /// Entry point for the collaborating input layer. Finalized human moves
    /// come in here; anything else (occupied cell, bot's turn, finished game)
    /// is rejected, never papered over.
    pub async fn place_mark(&self, index: usize) -> Result<(), String> {
        let mut game_state = self.game_state.lock().await;

        if !self.is_human_turn(game_state.current_mark) {
            return Err("it is not a human player's turn".to_string());
        }

        game_state.place_mark(index).map_err(|e| e.to_string())?;
        drop(game_state);

        self.turn_notify.notify_one();
        Ok(())
    }
}

pub async fn run_game_loop<B: GameBroadcaster>(
    session_state: TicTacToeSessionState,
    broadcaster: B,
) -> GameOverNotification {
    log!("starting game session (seed {})", session_state.config.seed);

    loop {
        broadcast_state(&session_state, &broadcaster).await;

        let (is_game_over, bot_turn) = {
            let game_state = session_state.game_state.lock().await;
            let is_over = game_state.status != GameStatus::InProgress;
            (is_over, session_state.bot_for(game_state.current_mark))
        };

        if is_game_over {
            break;
        }

        match bot_turn {
            Some(bot_type) => play_bot_turn(&session_state, bot_type).await,
            None => session_state.turn_notify.notified().await,
        }
    }

    let notification = build_game_over_notification(&session_state).await;
    log!("game over: {:?}", notification.status);
    notification
}

async fn play_bot_turn(session_state: &TicTacToeSessionState, bot_type: BotType) {
    let bot_input = {
        let game_state = session_state.game_state.lock().await;
        BotInput::from_game_state(&game_state)
    };

    let rng = Arc::clone(&session_state.rng);
    let calculated_move = tokio::task::spawn_blocking(move || {
        let mut rng = rng.lock().unwrap();
        calculate_move(bot_type, bot_input, &mut rng)
    })
    .await;

    if let Ok(Some(index)) = calculated_move {
        let mut game_state = session_state.game_state.lock().await;
        match game_state.place_mark(index) {
            Ok(()) => log!("bot played cell {}", index),
            Err(err) => log!("bot move at cell {} rejected: {}", index, err),
        }
    }
}

async fn broadcast_state<B: GameBroadcaster>(
    session_state: &TicTacToeSessionState,
    broadcaster: &B,
) {
    let game_state = session_state.game_state.lock().await;
    let update = GameStateUpdate {
        cells: game_state.board.cells(),
        current_mark: game_state.current_mark,
        status: game_state.status,
        last_move: game_state.last_move,
    };
    drop(game_state);

    broadcaster.broadcast_state(update).await;
}

async fn build_game_over_notification(
    session_state: &TicTacToeSessionState,
) -> GameOverNotification {
    let game_state = session_state.game_state.lock().await;

    let winning_line = match game_state.status {
        GameStatus::XWon | GameStatus::OWon => game_state.winning_line(),
        _ => None,
    };

    GameOverNotification {
        status: game_state.status,
        winner: game_state.winner(),
        winning_line,
    }
}
