//! The rules of shotgun roulette.
//!
//! Players take turns firing a shared chamber of live and blank rounds at themselves or at an
//! opponent. A blank fired at yourself keeps the turn, every other shot passes it. Items alter
//! the chamber, the turn flow and health, and the last player standing wins.
//!
//! [`GameState`] is the entry point; all other modules are its building blocks.

pub mod ai;
pub mod chamber;
pub mod config;
pub mod error;
pub mod events;
pub mod inventory;
pub mod items;
pub mod player;
pub mod rng;
pub mod roster;
pub mod state;
pub mod turn;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use state::{GameMode, GameState};
