use serde::{Deserialize, Serialize};

use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    Minimax,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.clone(),
            bot_mark: state.current_mark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub score: i32,
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => {
            best_move(&input.board, input.bot_mark, input.bot_mark).and_then(|result| result.index)
        }
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.empty_indices();
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.random_range(0..available_moves.len())])
}

/// Exhaustive game-tree search. Returns `None` only when the marks given are
/// not playable sides; an index-less result means the position is already
/// terminal (won, lost, or full) and there is no move to make.
pub fn best_move(board: &Board, side_to_move: Mark, maximizing: Mark) -> Option<SearchResult> {
    let minimizing = maximizing.opponent()?;
    if side_to_move != maximizing && side_to_move != minimizing {
        return None;
    }

    // The caller's board is never touched: recursion works on a private copy.
    let mut scratch = board.clone();
    Some(minimax(&mut scratch, side_to_move, maximizing, minimizing, 0))
}

fn minimax(
    board: &mut Board,
    to_move: Mark,
    maximizing: Mark,
    minimizing: Mark,
    depth: usize,
) -> SearchResult {
    // Depth folds into the score so a win in fewer plies outranks a later one
    // and a forced loss is postponed as long as possible.
    if board.has_won(minimizing) {
        return SearchResult {
            index: None,
            score: -10 + depth as i32,
        };
    }
    if board.has_won(maximizing) {
        return SearchResult {
            index: None,
            score: 10 - depth as i32,
        };
    }

    let available_moves = board.empty_indices();
    if available_moves.is_empty() {
        return SearchResult {
            index: None,
            score: 0,
        };
    }

    let next_to_move = if to_move == maximizing {
        minimizing
    } else {
        maximizing
    };

    let mut best_index = None;
    let mut best_score = if to_move == maximizing {
        i32::MIN
    } else {
        i32::MAX
    };

    for index in available_moves {
        board.place(index, to_move);
        let score = minimax(board, next_to_move, maximizing, minimizing, depth + 1).score;
        board.clear(index);

        // Strict comparison: on equal scores the first candidate in ascending
        // index order stays the winner.
        let improves = if to_move == maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_index = Some(index);
        }
    }

    SearchResult {
        index: best_index,
        score: best_score,
    }
}
