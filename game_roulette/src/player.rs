use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::inventory::Inventory;

/// The health and maximum health values of a player.
///
/// `Health` implements the [`Add`] and [`Sub`] operators which saturate at `max_health` and `0`
/// respectively.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Health {
    /// The current health value.
    pub health: u32,
    /// The maximum health value. `health` never exceeds this value.
    pub max_health: u32,
}

impl Health {
    /// Creates a new, full `Health`.
    #[inline]
    pub const fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    /// Returns `true` if the current health value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.health == 0
    }

    /// Returns `true` if the current health value equals the maximum health value.
    #[inline]
    pub const fn is_max(self) -> bool {
        self.health == self.max_health
    }
}

impl Add<u32> for Health {
    type Output = Self;

    #[inline]
    fn add(self, rhs: u32) -> Self::Output {
        Self {
            health: self.health.saturating_add(rhs).min(self.max_health),
            max_health: self.max_health,
        }
    }
}

impl AddAssign<u32> for Health {
    #[inline]
    fn add_assign(&mut self, rhs: u32) {
        *self = *self + rhs;
    }
}

impl Sub<u32> for Health {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: u32) -> Self::Output {
        Self {
            health: self.health.saturating_sub(rhs),
            max_health: self.max_health,
        }
    }
}

impl SubAssign<u32> for Health {
    #[inline]
    fn sub_assign(&mut self, rhs: u32) {
        *self = *self - rhs;
    }
}

impl Display for Health {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.health, self.max_health)
    }
}

/// Who decides the actions of a [`Player`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Controller {
    #[default]
    Human,
    /// Actions are chosen by [`ai::decide`].
    ///
    /// [`ai::decide`]: crate::ai::decide
    Computer,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub health: Health,
    pub inventory: Inventory,
    pub controller: Controller,
    /// The next hit landed by this player deals double damage.
    pub double_damage: bool,
}

impl Player {
    /// Creates a new `Player` with full health and an empty inventory.
    pub fn new<T>(name: T, max_health: u32) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            health: Health::new(max_health),
            inventory: Inventory::new(),
            controller: Controller::Human,
            double_damage: false,
        }
    }

    #[inline]
    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::{Health, Player};

    #[test]
    fn health_add_saturates_at_max() {
        let mut health = Health::new(3);
        health += 1;
        assert_eq!(health.health, 3);

        health -= 2;
        health += 1;
        assert_eq!(health.health, 2);

        health += u32::MAX;
        assert!(health.is_max());
    }

    #[test]
    fn health_sub_saturates_at_zero() {
        let mut health = Health::new(1);
        health -= 2;
        assert_eq!(health.health, 0);
        assert!(health.is_zero());
        assert_eq!(health.to_string(), "0/1");
    }

    #[test]
    fn player_alive() {
        let mut player = Player::new("Nokia", 2);
        assert!(player.is_alive());

        player.health -= 2;
        assert!(!player.is_alive());
    }
}
