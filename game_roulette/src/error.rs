use std::io;

use thiserror::Error;

use crate::inventory::SlotIndex;
use crate::items::Item;
use crate::roster::PlayerIndex;
use crate::state::GameMode;

/// A rejected game operation.
///
/// All errors are recoverable: an operation that returns an error has not changed the game
/// state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player index is out of range.
    #[error("invalid player {0}")]
    InvalidPlayer(PlayerIndex),
    /// The slot is out of range or contains no item.
    #[error("invalid item slot {0}")]
    InvalidSlot(SlotIndex),
    /// The inventory has no empty slot left for the item.
    #[error("inventory is full, cannot add {0}")]
    InventoryFull(Item),
    /// The acting player does not have the turn.
    #[error("player {player} acted during the turn of player {current}")]
    NotYourTurn {
        player: PlayerIndex,
        current: PlayerIndex,
    },
    /// The target is out of range, eliminated or the shooter itself.
    #[error("invalid target {0:?}")]
    InvalidTarget(Option<PlayerIndex>),
    /// The chamber has no rounds left.
    ///
    /// This never surfaces from [`GameState`], which reloads before drawing.
    ///
    /// [`GameState`]: crate::state::GameState
    #[error("chamber is empty")]
    ChamberEmpty,
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// A resolved shot waits for [`advance_after_resolution`].
    ///
    /// [`advance_after_resolution`]: crate::state::GameState::advance_after_resolution
    #[error("shot resolution pending")]
    ResolutionPending,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(io::Error),
    #[error(transparent)]
    Toml(toml::de::Error),
    #[error("{mode} requires {expected} player names, got {got}")]
    PlayerCount {
        mode: GameMode,
        expected: usize,
        got: usize,
    },
    #[error("maximum health must be at least 1")]
    Health,
    #[error("invalid chamber size {min}..={max}, rounds must be at least 2")]
    Chamber { min: usize, max: usize },
    #[error("live ratio {0} is not within 0.0..=1.0")]
    LiveRatio(f64),
}
