//! The computer opponent.
//!
//! The computer only knows what every player knows: the number of live and blank rounds left
//! in the chamber, the health of all players and its own items.

use crate::error::GameError;
use crate::inventory::SlotIndex;
use crate::items::Item;
use crate::roster::PlayerIndex;
use crate::state::GameState;
use crate::turn::{Phase, ShootTarget, ShotOutcome};

/// A single action of the current player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    UseItem(SlotIndex),
    Shoot(ShootTarget),
}

/// Chooses the next action of the current player of `state`.
pub fn decide(state: &GameState) -> Action {
    let player = state.current_player();
    let inventory = &player.inventory;

    if !player.health.is_max() {
        if let Some(slot) = inventory.position(Item::Cigarette) {
            return Action::UseItem(slot);
        }
    }

    // An empty chamber is reloaded with at least one round of each kind before the next
    // draw, so guess a live round.
    let remaining = state.remaining();
    let live_likely = remaining == 0 || state.loaded() * 2 >= remaining;

    if !live_likely {
        return Action::Shoot(ShootTarget::Shooter);
    }

    if !player.double_damage {
        if let Some(slot) = inventory.position(Item::DoubleDamage) {
            return Action::UseItem(slot);
        }
    }

    // Two shots at an opponent are only worth it with at least two live rounds left.
    if !state.combo_pending() && state.loaded() >= 2 {
        if let Some(slot) = inventory.position(Item::DoubleTrigger) {
            return Action::UseItem(slot);
        }
    }

    Action::Shoot(ShootTarget::Opponent(weakest_opponent(state)))
}

/// Plays the turn of the current player up to and including the next shot.
///
/// A shot still waiting for [`GameState::advance_after_resolution`] is advanced first.
pub fn take_turn(state: &mut GameState) -> Result<ShotOutcome, GameError> {
    if let Phase::Resolved(_) = state.phase() {
        state.advance_after_resolution();
    }

    loop {
        match decide(state) {
            Action::UseItem(slot) => {
                state.use_item(slot)?;
            }
            Action::Shoot(target) => return state.shoot(target),
        }
    }
}

/// Returns the living opponent with the least health, preferring earlier seats.
fn weakest_opponent(state: &GameState) -> Option<PlayerIndex> {
    let players = state.players();
    players
        .opponents(state.current_index())
        .min_by_key(|&index| players[index].health.health)
}

#[cfg(test)]
mod tests {
    use crate::chamber::{Chamber, Round};
    use crate::config::GameConfig;
    use crate::items::Item;
    use crate::state::{GameMode, GameState};
    use crate::turn::{Phase, ShootTarget};

    use super::{decide, take_turn, Action};

    fn game(mode: GameMode, rounds: &[Round]) -> GameState {
        let names = (1..=mode.humans()).map(|index| format!("P{}", index));
        let mut config = GameConfig::with_players(mode, names);
        config.seed = Some(3);
        config.items.per_reload = 0;

        let mut state = GameState::new(config).unwrap();
        state.load_chamber(Chamber::from_rounds(rounds.iter().copied()));
        state
    }

    #[test]
    fn ai_shoots_self_on_likely_blank() {
        let state = game(
            GameMode::TwoPlayer,
            &[Round::Blank, Round::Blank, Round::Live],
        );
        assert_eq!(decide(&state), Action::Shoot(ShootTarget::Shooter));
    }

    #[test]
    fn ai_shoots_weakest_opponent_on_likely_live() {
        let mut state = game(GameMode::FourPlayer, &[Round::Blank, Round::Live]);
        state.load_chamber(Chamber::from_rounds([Round::Live, Round::Blank, Round::Live]));

        // P1 hurts P4, P2 is next.
        state.shoot(ShootTarget::Opponent(Some(3))).unwrap();
        assert_eq!(state.current_index(), 1);

        assert_eq!(decide(&state), Action::Shoot(ShootTarget::Opponent(Some(3))));
    }

    #[test]
    fn ai_heals_before_acting() {
        let mut state = game(GameMode::TwoPlayer, &[Round::Live, Round::Blank, Round::Live]);
        state.shoot(ShootTarget::Shooter).unwrap();
        state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(state.current_index(), 0);

        state.grant_item(0, Item::Reorder).unwrap();
        state.grant_item(0, Item::Cigarette).unwrap();
        assert_eq!(decide(&state), Action::UseItem(1));
    }

    #[test]
    fn ai_arms_double_damage_once() {
        let mut state = game(GameMode::TwoPlayer, &[Round::Live, Round::Live]);
        state.grant_item(0, Item::DoubleDamage).unwrap();
        state.grant_item(0, Item::DoubleDamage).unwrap();

        let shot = take_turn(&mut state).unwrap();
        assert_eq!(shot.damage, 2);
        // The second double damage is kept for later.
        assert_eq!(state.players()[0].inventory.len(), 1);
    }

    #[test]
    fn ai_advances_deferred_shots() {
        let mut config = GameConfig::with_players(GameMode::TwoPlayer, ["P1", "P2"]);
        config.seed = Some(1);
        config.auto_advance = false;
        let mut state = GameState::new(config).unwrap();

        let mut shots = 0;
        while !state.is_game_over() {
            let shot = take_turn(&mut state).unwrap();
            if shot.game_over.is_none() {
                assert_eq!(state.phase(), Phase::Resolved(shot.transition));
                assert_eq!(state.current_index(), shot.shooter);
            }
            shots += 1;
            assert!(shots < 10_000);
        }

        assert_eq!(state.players().alive(), 1);
    }

    #[test]
    fn ai_single_player_session_finishes() {
        let mut config = GameConfig::with_players(GameMode::SinglePlayer, ["Kedullah"]);
        config.seed = Some(1234);
        let mut state = GameState::new(config).unwrap();

        let mut shots = 0;
        while !state.is_game_over() {
            take_turn(&mut state).unwrap();
            shots += 1;
            assert!(shots < 10_000);
        }

        assert!(state.players().alive() <= 1);
    }
}
