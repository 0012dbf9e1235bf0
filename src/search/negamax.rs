//! Fixed-depth negamax search over fully-copied states.
//!
//! Every expanded candidate clones the whole board, so sibling branches
//! never alias. There is no pruning, no move ordering beyond generation
//! order, and no randomization anywhere: ties at the root resolve to the
//! candidate generated first. A node with no pseudo-legal moves scores the
//! same terminal constant whether the true cause is checkmate or stalemate.

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Plies searched from the root when the protocol does not override depth.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Score of a node with no moves at all.
pub const TERMINAL_SCORE: i32 = -100_000;

/// Sentinel below every reachable score, so the first candidate always wins
/// the initial comparison.
const SCORE_FLOOR: i32 = -1_000_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Score `state` from the perspective of its side to move, looking `depth`
/// plies ahead.
pub fn negamax(
    state: &GameState,
    generator: &impl MoveGenerator,
    scorer: &impl BoardScorer,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        let eval = scorer.score(state);
        return match state.side_to_move {
            Color::White => eval,
            Color::Black => -eval,
        };
    }

    let moves = generator.generate_moves(state);
    if moves.is_empty() {
        return TERMINAL_SCORE;
    }

    let mut best = SCORE_FLOOR;
    for mv in moves {
        let mut child = state.clone();
        apply_move(&mut child, mv);
        let score = -negamax(&child, generator, scorer, depth - 1, nodes);
        if score > best {
            best = score;
        }
    }
    best
}

/// Root-level selection: expand each candidate once and keep the strictly
/// best child score.
pub fn search_best_move(
    state: &GameState,
    generator: &impl MoveGenerator,
    scorer: &impl BoardScorer,
    depth: u8,
) -> SearchResult {
    let moves = generator.generate_moves(state);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: TERMINAL_SCORE,
            nodes: 0,
        };
    }

    let mut nodes = 0u64;
    let mut best_score = SCORE_FLOOR;
    let mut best_move = moves[0];

    for mv in moves {
        let mut child = state.clone();
        apply_move(&mut child, mv);
        let score = -negamax(&child, generator, scorer, depth.saturating_sub(1), &mut nodes);
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    SearchResult {
        best_move: Some(best_move),
        best_score,
        nodes,
    }
}
