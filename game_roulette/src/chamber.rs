//! The shotgun chamber.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rng::GameRng;

/// A single round loaded into the [`Chamber`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Round {
    Live,
    Blank,
}

impl Round {
    #[inline]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Blank => f.write_str("blank"),
        }
    }
}

/// The ordered rounds of the current reload cycle.
///
/// Rounds before the cursor have been fired and are never touched again. All counts only
/// consider the unconsumed tail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chamber {
    rounds: Vec<Round>,
    cursor: usize,
}

impl Chamber {
    /// Creates a new, empty `Chamber`. An empty chamber must be reloaded before the first shot.
    #[inline]
    pub const fn new() -> Self {
        Self {
            rounds: Vec::new(),
            cursor: 0,
        }
    }

    /// Creates a `Chamber` firing the given `rounds` in order.
    pub fn from_rounds<I>(rounds: I) -> Self
    where
        I: IntoIterator<Item = Round>,
    {
        Self {
            rounds: rounds.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Loads a new random permutation of `live` live and `total - live` blank rounds.
    ///
    /// Counts are clamped so that every reload contains at least one live and one blank round:
    /// `total` is at least 2 and `live` lies in `1..=total - 1`.
    pub fn reload(&mut self, live: usize, total: usize, rng: &mut GameRng) {
        let total = total.max(2);
        let live = live.clamp(1, total - 1);

        self.rounds.clear();
        self.rounds.extend((0..total).map(|index| {
            if index < live {
                Round::Live
            } else {
                Round::Blank
            }
        }));
        rng.shuffle(&mut self.rounds);
        self.cursor = 0;
    }

    /// Removes and returns the next round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ChamberEmpty`] if no rounds remain.
    pub fn draw_next(&mut self) -> Result<Round, GameError> {
        let round = *self
            .rounds
            .get(self.cursor)
            .ok_or(GameError::ChamberEmpty)?;
        self.cursor += 1;
        Ok(round)
    }

    /// Randomly reorders the rounds that have not been fired yet.
    pub fn shuffle_remaining(&mut self, rng: &mut GameRng) {
        let tail = &mut self.rounds[self.cursor..];
        if tail.len() < 2 {
            return;
        }

        rng.shuffle(tail);
    }

    /// Returns the number of live rounds remaining.
    pub fn loaded(&self) -> usize {
        self.tail().iter().filter(|round| round.is_live()).count()
    }

    /// Returns the number of blank rounds remaining.
    pub fn empty(&self) -> usize {
        self.remaining() - self.loaded()
    }

    /// Returns the number of rounds remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.rounds.len() - self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the number of rounds fired since the last reload.
    #[inline]
    pub fn fired(&self) -> usize {
        self.cursor
    }

    fn tail(&self) -> &[Round] {
        &self.rounds[self.cursor..]
    }
}
