use crate::inventory::SlotIndex;
use crate::items::{Item, ItemEffect};
use crate::roster::PlayerIndex;
use crate::turn::{GameOutcome, ShotOutcome, TurnChange};

/// A change of the [`GameState`], in the order it happened.
///
/// Presentation layers drain these through [`GameState::drain_events`] to animate or display
/// what happened since the last frame.
///
/// [`GameState`]: crate::state::GameState
/// [`GameState::drain_events`]: crate::state::GameState::drain_events
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ChamberLoaded {
        loaded: usize,
        empty: usize,
    },
    ItemGranted {
        player: PlayerIndex,
        slot: SlotIndex,
        item: Item,
    },
    ItemUsed {
        player: PlayerIndex,
        item: Item,
        effect: ItemEffect,
    },
    TargetSelected {
        player: PlayerIndex,
        target: PlayerIndex,
    },
    Shot(ShotOutcome),
    TurnPassed(TurnChange),
    GameOver(GameOutcome),
}
