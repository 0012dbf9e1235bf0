//! Fixed-depth negamax engine.
//!
//! The default playing strength of the crate: exhaustive negamax to a fixed
//! ply count with material-only scoring. Selection is fully deterministic;
//! repeated searches of the same position return the same move.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PseudoLegalGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, DEFAULT_SEARCH_DEPTH};

pub struct NegamaxEngine {
    default_depth: u8,
    move_generator: PseudoLegalGenerator,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            move_generator: PseudoLegalGenerator,
            scorer: MaterialScorer,
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Quince Chess"
    }

    fn author(&self) -> &str {
        "Quince Chess developers"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Search depth is fixed per engine instance; `go` arguments are
        // accepted by the protocol layer but never change it.
        let depth = self.default_depth.max(1);

        let started = Instant::now();
        let result = search_best_move(game_state, &self.move_generator, &self.scorer, depth);
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {}",
            depth, result.best_score, result.nodes, elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string negamax_engine default_depth {}",
            self.default_depth
        ));
        Ok(out)
    }
}
