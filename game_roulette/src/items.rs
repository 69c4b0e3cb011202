//! Consumable items

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// A consumable item held in an [`Inventory`] slot.
///
/// [`Inventory`]: crate::inventory::Inventory
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Item {
    /// Shuffles the rounds remaining in the chamber.
    Reorder,
    /// The next shot is followed by another shot of the same player.
    DoubleTrigger,
    /// Restores a single point of health.
    Cigarette,
    /// The next hit of the player deals double damage.
    DoubleDamage,
}

impl Item {
    pub const ALL: [Self; 4] = [
        Self::Reorder,
        Self::DoubleTrigger,
        Self::Cigarette,
        Self::DoubleDamage,
    ];

    /// Returns a short human readable description of the item.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Reorder => "Shuffle",
            Self::DoubleTrigger => "2x Shot",
            Self::Cigarette => "+1 Life",
            Self::DoubleDamage => "2x DMG",
        }
    }

    /// Draws a uniformly random item.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.range_inclusive(0, Self::ALL.len() - 1)]
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reorder => "reorder",
            Self::DoubleTrigger => "double-trigger",
            Self::Cigarette => "cigarette",
            Self::DoubleDamage => "double-damage",
        };

        f.write_str(name)
    }
}

/// The observable result of using an [`Item`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    /// The remaining rounds were reordered.
    Shuffled { remaining: usize },
    /// The next shot is followed by another one.
    TriggerArmed,
    /// Health was restored from `from` to `to`. Both are equal if the player was already at
    /// maximum health.
    Healed { from: u32, to: u32 },
    /// The next hit deals double damage.
    DamageArmed,
}

impl ItemEffect {
    /// Returns `true` if the effect changed any visible game state.
    pub fn changed(self) -> bool {
        match self {
            Self::Shuffled { remaining } => remaining >= 2,
            Self::TriggerArmed | Self::DamageArmed => true,
            Self::Healed { from, to } => from != to,
        }
    }
}
