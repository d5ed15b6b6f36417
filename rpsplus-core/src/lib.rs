//! RPS-Plus Core - Referee for best-of-three Rock-Paper-Scissors-Plus
//!
//! This crate provides the deterministic game logic:
//! - Move normalization and validation (bomb usable once per player)
//! - Round resolution (bomb beats everything but another bomb)
//! - Game state machine (scores, bomb flags, history, game over)
//! - Bot move sources (uniform random, scripted)
//! - Referee text for presentation layers

pub mod moves;
pub mod validate;
pub mod resolve;
pub mod game;
pub mod bot;
pub mod referee;
pub mod session;

// Re-exports for convenient access
pub use moves::{Move, ALL_MOVES, BASIC_MOVES};
pub use validate::{validate, InvalidReason, MoveLabel, ValidationResult};
pub use resolve::{resolve, RoundOutcome, Verdict};
pub use game::{apply, FinalResult, GameError, GameState, RoundRecord, MAX_ROUNDS};
pub use bot::{BotConfig, MoveSource, RandomBot, ScriptedSource};
pub use session::{Referee, TurnReport};
