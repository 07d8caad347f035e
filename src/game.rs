use crate::game_state::*;
use crate::pieces::*;
use crate::positions::*;
use tracing::{debug, info, warn};

/// An agent is an object that can play chess by choosing moves appropriate
/// to the current game state. `None` means the agent has no legal move and
/// the turn passes to the opponent.
pub trait Agent {
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)>;

    /// Called when the agent's pawn reached the far rank. The default is
    /// the choice every engine makes anyway.
    fn choose_promotion(&mut self) -> PieceKind {
        PieceKind::Queen
    }
}

/// Drives two agents against each other on one game state until someone
/// wins. The loop is the only place agents and the state machine meet:
/// agents propose, the state decides.
pub struct Game<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    state: GameState,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(white: A1, black: A2) -> Game<A1, A2> {
        Game {
            white,
            black,
            state: GameState::new(),
        }
    }

    /// A game continued from a prepared state.
    pub fn from_state(white: A1, black: A2, state: GameState) -> Game<A1, A2> {
        Game {
            white,
            black,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays until checkmate and returns the winner.
    pub fn play(&mut self) -> Team {
        loop {
            if let Outcome::Checkmate(winner) = self.state.outcome() {
                self.drain_events();
                return winner;
            }
            println!("{}", self.state);

            let turn = self.state.turn();
            let chosen = match turn {
                Team::White => self.white.choose_move(&self.state),
                Team::Black => self.black.choose_move(&self.state),
            };

            let (from, to) = match chosen {
                Some(mv) => mv,
                None => {
                    // No legal move without being mated: the turn passes.
                    info!("{} has no legal move, turn passes", turn);
                    self.state
                        .skip_turn()
                        .expect("skip rejected on a running game");
                    continue;
                }
            };

            match self.state.commit_move(from, to) {
                Ok(outcome) => {
                    if outcome.promotion_pending {
                        self.resolve_promotion(turn);
                    }
                }
                Err(e) => {
                    // A well-behaved agent never gets here; a human at the
                    // terminal does. Same turn, new attempt.
                    warn!("move rejected: {}", e);
                    continue;
                }
            }
            self.drain_events();
        }
    }

    fn resolve_promotion(&mut self, turn: Team) {
        loop {
            let kind = match turn {
                Team::White => self.white.choose_promotion(),
                Team::Black => self.black.choose_promotion(),
            };
            match self.state.resolve_promotion(kind) {
                Ok(_) => return,
                Err(e) => warn!("promotion rejected: {}", e),
            }
        }
    }

    fn drain_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::SpecialMoveOccurred { kind, from, to } => {
                    println!("{} ({} -> {})", kind, from, to)
                }
                GameEvent::CheckmateReached { winner } => {
                    println!("{}", self.state);
                    println!("Checkmate! {} wins.", winner)
                }
                other => debug!("{:?}", other),
            }
        }
    }
}
