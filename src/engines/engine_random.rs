//! Random-move engine.
//!
//! Selects uniformly from the pseudo-legal moves. The generator is seeded
//! from the wall clock once at construction; the deterministic negamax
//! engine never touches it, so this engine is the sole consumer of
//! randomness in the crate. Primarily used for diagnostics and the lowest
//! skill level.

use chrono::Utc;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalGenerator};

pub struct RandomEngine {
    move_generator: PseudoLegalGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        let seed = Utc::now().timestamp_millis() as u64;
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: PseudoLegalGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Chess Random"
    }

    fn author(&self) -> &str {
        "Quince Chess developers"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let moves = self.move_generator.generate_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine pseudo_legal_moves {}",
            moves.len()
        ));

        if moves.is_empty() {
            return Ok(out);
        }

        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;
        out.best_move = Some(*picked);
        Ok(out)
    }
}
