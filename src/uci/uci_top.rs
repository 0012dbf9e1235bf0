//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains the single session position, routes `go`
//! requests to the selected engine implementation, and emits
//! protocol-compliant output. The loop is fully synchronous: `go` blocks
//! until the fixed-depth search has finished. Malformed input is handled by
//! silent no-ops; unrecognized commands never produce a diagnostic.

use std::io::{self, BufRead, Write};

use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move;
use crate::search::negamax::DEFAULT_SEARCH_DEPTH;
use crate::utils::algebraic::{coordinate_to_move, move_to_coordinate};

const DEFAULT_SKILL_LEVEL: u8 = 3;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    skill_level: u8,
}

impl UciState {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: build_engine(DEFAULT_SKILL_LEVEL),
            skill_level: DEFAULT_SKILL_LEVEL,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let cmd = trimmed.split_whitespace().next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "setoption" => {
                // Option errors are dropped; the protocol stays quiet.
                let _ = self.handle_setoption(trimmed);
            }
            "position" => {
                self.handle_position(trimmed);
            }
            "go" => {
                self.handle_go(trimmed, out)?;
            }
            "stop" => {
                // Search is synchronous; there is nothing running to stop.
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored for UCI compatibility.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<String>::new();
        let mut value_tokens = Vec::<String>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok.to_owned()),
                _ if mode == "value" => value_tokens.push(tok.to_owned()),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("Skill Level") {
            let parsed = value
                .parse::<u8>()
                .map_err(|_| format!("invalid Skill Level value '{}'", value))?;
            self.skill_level = parsed;
            self.engine = build_engine(self.skill_level);
        } else {
            self.engine.set_option(&name, &value)?;
        }

        Ok(())
    }

    fn handle_position(&mut self, line: &str) {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let mut base_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.peek() {
                    if *next == "moves" {
                        break;
                    }
                    fen_parts.push(tokens.next().unwrap_or_default());
                }
                GameState::from_position(&fen_parts.join(" "))
            }
            // Unknown or missing sub-command: keep the current session state.
            _ => return,
        };

        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for move_str in tokens {
                // Short or malformed move strings are dropped silently; the
                // remaining moves still apply.
                if let Ok(mv) = coordinate_to_move(move_str) {
                    apply_move(&mut base_state, mv);
                }
            }
        }

        self.game_state = base_state;
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let params = parse_go_params(line);

        match self.engine.choose_move(&self.game_state, &params) {
            Ok(result) => {
                for info in &result.info_lines {
                    writeln!(out, "{}", info)?;
                }

                match result.best_move.map(move_to_coordinate) {
                    Some(Ok(coordinate)) => writeln!(out, "bestmove {}", coordinate)?,
                    _ => writeln!(out, "bestmove 0000")?,
                }
            }
            Err(_) => {
                writeln!(out, "bestmove 0000")?;
            }
        }

        Ok(())
    }
}

fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let mut i = 0usize;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                params.depth = tokens.get(i).and_then(|x| x.parse::<u8>().ok());
            }
            "movetime" => {
                i += 1;
                params.movetime_ms = tokens.get(i).and_then(|x| x.parse::<u64>().ok());
            }
            "wtime" => {
                i += 1;
                params.wtime_ms = tokens.get(i).and_then(|x| x.parse::<u64>().ok());
            }
            "btime" => {
                i += 1;
                params.btime_ms = tokens.get(i).and_then(|x| x.parse::<u64>().ok());
            }
            "winc" => {
                i += 1;
                params.winc_ms = tokens.get(i).and_then(|x| x.parse::<u64>().ok());
            }
            "binc" => {
                i += 1;
                params.binc_ms = tokens.get(i).and_then(|x| x.parse::<u64>().ok());
            }
            "movestogo" => {
                i += 1;
                params.movestogo = tokens.get(i).and_then(|x| x.parse::<u16>().ok());
            }
            "infinite" => {
                params.infinite = true;
            }
            _ => {}
        }
        i += 1;
    }

    params
}

fn build_engine(skill_level: u8) -> Box<dyn Engine> {
    match skill_level {
        1 => Box::new(RandomEngine::new()),
        2 => Box::new(NegamaxEngine::new(2)),
        3 => Box::new(NegamaxEngine::new(DEFAULT_SEARCH_DEPTH)),
        4 => Box::new(NegamaxEngine::new(4)),
        _ => Box::new(NegamaxEngine::new(DEFAULT_SEARCH_DEPTH)),
    }
}
