//! Seating order of the players.

use std::ops::{Index, IndexMut};

use crate::player::Player;

/// The seat of a player in the [`Roster`].
pub type PlayerIndex = usize;

/// The players of a game in fixed seating order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[inline]
    pub fn get(&self, index: PlayerIndex) -> Option<&Player> {
        self.players.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: PlayerIndex) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns `true` if the player at `index` exists and is alive.
    pub fn is_alive(&self, index: PlayerIndex) -> bool {
        self.get(index).is_some_and(Player::is_alive)
    }

    /// Returns the number of players still alive.
    pub fn alive(&self) -> usize {
        self.players.iter().filter(|player| player.is_alive()).count()
    }

    /// Returns the index of the first living player, if any.
    pub fn first_living(&self) -> Option<PlayerIndex> {
        self.players.iter().position(Player::is_alive)
    }

    /// Returns the next living player after `from` in seating order, wrapping around.
    ///
    /// `from` itself is returned last, i.e. only if it is the only living player. Returns `None`
    /// if no player is alive.
    pub fn next_living(&self, from: PlayerIndex) -> Option<PlayerIndex> {
        let len = self.players.len();
        (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|&index| self.players[index].is_alive())
    }

    /// Returns an iterator over the living players other than `index`.
    pub fn opponents(&self, index: PlayerIndex) -> impl Iterator<Item = PlayerIndex> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(other, player)| *other != index && player.is_alive())
            .map(|(other, _)| other)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }
}

impl Index<PlayerIndex> for Roster {
    type Output = Player;

    #[inline]
    fn index(&self, index: PlayerIndex) -> &Self::Output {
        &self.players[index]
    }
}

impl IndexMut<PlayerIndex> for Roster {
    #[inline]
    fn index_mut(&mut self, index: PlayerIndex) -> &mut Self::Output {
        &mut self.players[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
