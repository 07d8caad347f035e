/// Differing kinds of agents that can play the game
use crate::game::Agent;
use crate::game_state::GameState;
use crate::pieces::PieceKind;
use crate::positions::Square;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{stdout, Write};
use text_io::read;
use tracing::debug;

/// Plays the highest-value capture available, otherwise a uniformly random
/// piece followed by a uniformly random destination of that piece. One ply
/// deep: it never looks at the reply.
///
/// When several captures are worth the same the first one in board-scan
/// order wins, so the choice between equal captures is deterministic; only
/// the quiet-move fallback draws from the rng.
pub struct GreedyCaptureAgent {
    rng: SmallRng,
}

impl GreedyCaptureAgent {
    pub fn new() -> Self {
        GreedyCaptureAgent {
            rng: SmallRng::from_entropy(),
        }
    }

    /// A reproducible agent for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        GreedyCaptureAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyCaptureAgent {
    fn default() -> Self {
        GreedyCaptureAgent::new()
    }
}

impl Agent for GreedyCaptureAgent {
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        let pairs = state.current_legal_moves_for(state.turn());
        if pairs.is_empty() {
            return None;
        }

        let mut best: Option<((Square, Square), u8)> = None;
        for &(from, to) in &pairs {
            // En passant destinations are empty squares; like everything
            // else that is not a plain capture they fall through to the
            // random pick.
            if let Some(victim) = state.board().piece_at(to) {
                let value = victim.kind.value();
                if best.map_or(true, |(_, v)| value > v) {
                    best = Some(((from, to), value));
                }
            }
        }

        if let Some(((from, to), value)) = best {
            debug!("taking the {} capture worth {}", to, value);
            return Some((from, to));
        }

        // Quiet fallback, drawn piece-first: a uniformly random mover among
        // the pieces that have a move, then a uniformly random destination
        // of that mover. Drawing over the flat pair list instead would skew
        // the agent toward its most mobile pieces. Pairs arrive grouped by
        // piece, so the distinct movers fall out of a contiguity scan.
        let mut movers: Vec<Square> = Vec::new();
        for &(from, _) in &pairs {
            if movers.last() != Some(&from) {
                movers.push(from);
            }
        }
        let from = *movers.choose(&mut self.rng)?;
        let destinations: Vec<Square> = pairs
            .iter()
            .filter(|&&(f, _)| f == from)
            .map(|&(_, to)| to)
            .collect();
        let to = *destinations.choose(&mut self.rng)?;
        Some((from, to))
    }
}

/// Reads moves from the terminal in algebraic square notation ("e2", "e4").
/// Keeps asking until the input parses and names an own piece with moves.
pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }

    fn read_square(prompt: &str) -> Square {
        loop {
            print!("{}", prompt);
            stdout().flush().unwrap();
            let input: String = read!();
            match input.parse() {
                Ok(square) => return square,
                Err(e) => println!("{}", e),
            }
        }
    }
}

impl Agent for HumanAgent {
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        if !state.has_any_legal_move(state.turn()) {
            println!("No legal moves for {}; the turn passes.", state.turn());
            return None;
        }
        loop {
            let from = Self::read_square("From: ");
            let destinations = match state.select_piece(from) {
                Ok(d) if d.is_empty() => {
                    println!("The piece at {} has no legal moves.", from);
                    continue;
                }
                Ok(d) => d,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            let options: Vec<String> = destinations.iter().map(Square::to_string).collect();
            println!("Destinations: {}", options.join(" "));
            let to = Self::read_square("To: ");
            if !destinations.contains(&to) {
                println!("{} is not among the destinations.", to);
                continue;
            }
            return Some((from, to));
        }
    }

    fn choose_promotion(&mut self) -> PieceKind {
        loop {
            print!("Promote to [q/r/b/n]: ");
            stdout().flush().unwrap();
            let input: String = read!();
            match input.to_lowercase().as_str() {
                "q" | "queen" => return PieceKind::Queen,
                "r" | "rook" => return PieceKind::Rook,
                "b" | "bishop" => return PieceKind::Bishop,
                "n" | "knight" => return PieceKind::Knight,
                other => println!("Unknown piece: {}", other),
            }
        }
    }
}

/// Wraps another agent and pauses before answering. Makes agent-vs-agent
/// games watchable at the terminal.
pub struct SlowAgent<A: Agent> {
    inner: A,
    response_time_millis: u64,
}

impl<A: Agent> SlowAgent<A> {
    pub fn new(agent: A, response_time_millis: u64) -> Self {
        SlowAgent {
            inner: agent,
            response_time_millis,
        }
    }
}

impl<A: Agent> Agent for SlowAgent<A> {
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        std::thread::sleep(std::time::Duration::from_millis(self.response_time_millis));
        self.inner.choose_move(state)
    }

    fn choose_promotion(&mut self) -> PieceKind {
        self.inner.choose_promotion()
    }
}
