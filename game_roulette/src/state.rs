use std::fmt::{self, Display, Formatter};
use std::mem;

use serde::{Deserialize, Serialize};

use crate::chamber::Chamber;
use crate::config::{ChamberConfig, GameConfig, ItemsConfig};
use crate::error::{ConfigError, GameError};
use crate::events::GameEvent;
use crate::inventory::{InventoryFull, SlotIndex};
use crate::items::{Item, ItemEffect};
use crate::player::{Controller, Player};
use crate::rng::GameRng;
use crate::roster::{PlayerIndex, Roster};
use crate::turn::{GameOutcome, Phase, ShootTarget, ShotOutcome, TurnChange, TurnEngine};

/// The name of the computer opponent in [`GameMode::SinglePlayer`].
pub const COMPUTER_NAME: &str = "AI";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// A single human plays against a computer opponent.
    SinglePlayer,
    TwoPlayer,
    FourPlayer,
}

impl GameMode {
    /// Returns the number of human players.
    pub const fn humans(self) -> usize {
        match self {
            Self::SinglePlayer => 1,
            Self::TwoPlayer => 2,
            Self::FourPlayer => 4,
        }
    }

    /// Returns the number of seats, including computer opponents.
    pub const fn seats(self) -> usize {
        match self {
            Self::SinglePlayer | Self::TwoPlayer => 2,
            Self::FourPlayer => 4,
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinglePlayer => f.write_str("single-player"),
            Self::TwoPlayer => f.write_str("two-player"),
            Self::FourPlayer => f.write_str("four-player"),
        }
    }
}

/// The state of a game session.
///
/// `GameState` is the only surface presentation layers interact with. Every operation runs to
/// completion before returning. Rejected operations return an error and leave the state
/// unchanged.
#[derive(Clone, Debug)]
pub struct GameState {
    mode: GameMode,
    roster: Roster,
    chamber: Chamber,
    engine: TurnEngine,
    /// The pending target of the shoot-opponent flow.
    selection: Option<PlayerIndex>,
    rng: GameRng,
    auto_advance: bool,
    chamber_config: ChamberConfig,
    items_config: ItemsConfig,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates a new game from a validated `config` and loads the first chamber.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let max_health = config.health.max;
        let mut players: Vec<_> = config
            .players
            .into_iter()
            .map(|name| Player::new(name, max_health))
            .collect();

        if config.mode == GameMode::SinglePlayer {
            players.push(
                Player::new(COMPUTER_NAME, max_health).with_controller(Controller::Computer),
            );
        }

        let roster = Roster::new(players);
        let rng = match config.seed {
            Some(seed) => GameRng::from_seed(seed),
            None => GameRng::from_entropy(),
        };

        tracing::info!(
            "starting {} game with {} players (seed {})",
            config.mode,
            roster.len(),
            rng.seed(),
        );

        let mut state = Self {
            mode: config.mode,
            engine: TurnEngine::new(&roster),
            roster,
            chamber: Chamber::new(),
            selection: None,
            rng,
            auto_advance: config.auto_advance,
            chamber_config: config.chamber,
            items_config: config.items,
            events: Vec::new(),
        };
        state.reload();

        Ok(state)
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the seed of this session.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[inline]
    pub fn players(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn player(&self, index: PlayerIndex) -> Option<&Player> {
        self.roster.get(index)
    }

    #[inline]
    pub fn current_index(&self) -> PlayerIndex {
        self.engine.current()
    }

    pub fn current_player(&self) -> &Player {
        &self.roster[self.engine.current()]
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.engine.outcome().is_some()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.engine.outcome()
    }

    /// Returns the winner of the game. Returns `None` if the game is still in progress or ended
    /// in a draw.
    pub fn winner(&self) -> Option<&Player> {
        match self.engine.outcome()? {
            GameOutcome::Winner(index) => self.roster.get(index),
            GameOutcome::Draw => None,
        }
    }

    /// Returns `true` if the next shot of the current player is followed by another one.
    #[inline]
    pub fn combo_pending(&self) -> bool {
        self.engine.combo_pending()
    }

    #[inline]
    pub fn target_selection(&self) -> Option<PlayerIndex> {
        self.selection
    }

    #[inline]
    pub fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    /// Returns the number of live rounds remaining in the chamber.
    #[inline]
    pub fn loaded(&self) -> usize {
        self.chamber.loaded()
    }

    /// Returns the number of blank rounds remaining in the chamber.
    #[inline]
    pub fn empty(&self) -> usize {
        self.chamber.empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.chamber.remaining()
    }

    /// Selects the opponent hit by the next [`ShootTarget::Opponent(None)`] shot.
    ///
    /// [`ShootTarget::Opponent(None)`]: ShootTarget::Opponent
    pub fn select_target(&mut self, target: PlayerIndex) -> Result<(), GameError> {
        self.engine.ensure_awaiting_action()?;
        let target = self
            .engine
            .resolve_target(&self.roster, ShootTarget::Opponent(Some(target)), None)?;

        self.selection = Some(target);
        self.events.push(GameEvent::TargetSelected {
            player: self.engine.current(),
            target,
        });
        Ok(())
    }

    pub fn clear_target_selection(&mut self) {
        self.selection = None;
    }

    /// Fires the next round of the chamber at `target`.
    ///
    /// An empty chamber is reloaded before the round is drawn.
    pub fn shoot(&mut self, target: ShootTarget) -> Result<ShotOutcome, GameError> {
        self.engine.ensure_awaiting_action()?;
        let victim = self
            .engine
            .resolve_target(&self.roster, target, self.selection)?;

        if self.chamber.is_empty() {
            self.reload();
        }
        let round = self.chamber.draw_next()?;

        let shot = self.engine.fire(&mut self.roster, target, victim, round);
        self.selection = None;

        tracing::debug!(
            "{} fired a {} round at {}: {}",
            self.roster[shot.shooter].name,
            round,
            self.roster[shot.target].name,
            shot.result,
        );
        self.events.push(GameEvent::Shot(shot));

        if shot.eliminated {
            tracing::info!("{} was eliminated", self.roster[shot.target].name);
        }

        match shot.game_over {
            Some(outcome) => {
                match outcome {
                    GameOutcome::Winner(index) => {
                        tracing::info!("game over, {} wins", self.roster[index].name)
                    }
                    GameOutcome::Draw => tracing::info!("game over, draw"),
                }

                self.events.push(GameEvent::GameOver(outcome));
            }
            None if self.auto_advance => {
                self.advance_after_resolution();
            }
            None => (),
        }

        Ok(shot)
    }

    /// Applies the turn passing of the last resolved shot.
    ///
    /// This only needs to be called if `auto_advance` is disabled. Returns the change of turn
    /// if the turn passed to another player.
    pub fn advance_after_resolution(&mut self) -> Option<TurnChange> {
        let change = self.engine.advance(&self.roster)?;

        tracing::debug!(
            "turn passed from {} to {}",
            self.roster[change.from].name,
            self.roster[change.to].name,
        );
        self.events.push(GameEvent::TurnPassed(change));
        Some(change)
    }

    /// Uses the item in `slot` of the current player.
    pub fn use_item(&mut self, slot: SlotIndex) -> Result<ItemEffect, GameError> {
        self.use_item_as(self.engine.current(), slot)
    }

    /// Uses the item in `slot` of `player`, which must be the current player.
    pub fn use_item_as(
        &mut self,
        player: PlayerIndex,
        slot: SlotIndex,
    ) -> Result<ItemEffect, GameError> {
        self.engine.ensure_awaiting_action()?;

        let current = self.engine.current();
        if player != current {
            return Err(GameError::NotYourTurn { player, current });
        }

        let item = self.roster[player]
            .inventory
            .remove(slot)
            .ok_or(GameError::InvalidSlot(slot))?;

        let effect = match item {
            Item::Reorder => {
                self.chamber.shuffle_remaining(&mut self.rng);
                ItemEffect::Shuffled {
                    remaining: self.chamber.remaining(),
                }
            }
            Item::DoubleTrigger => {
                self.engine.arm_combo();
                ItemEffect::TriggerArmed
            }
            Item::Cigarette => {
                let health = &mut self.roster[player].health;
                let from = health.health;
                *health += 1;
                ItemEffect::Healed {
                    from,
                    to: health.health,
                }
            }
            Item::DoubleDamage => {
                self.roster[player].double_damage = true;
                ItemEffect::DamageArmed
            }
        };

        tracing::debug!("{} used {}: {:?}", self.roster[player].name, item, effect);
        self.events.push(GameEvent::ItemUsed {
            player,
            item,
            effect,
        });

        Ok(effect)
    }

    /// Gives `item` to `player`.
    pub fn grant_item(&mut self, player: PlayerIndex, item: Item) -> Result<SlotIndex, GameError> {
        let slot = self
            .roster
            .get_mut(player)
            .ok_or(GameError::InvalidPlayer(player))?
            .inventory
            .insert(item)
            .map_err(|InventoryFull(item)| GameError::InventoryFull(item))?;

        self.events.push(GameEvent::ItemGranted { player, slot, item });
        Ok(slot)
    }

    /// Replaces the chamber with `chamber`. No items are granted.
    pub fn load_chamber(&mut self, chamber: Chamber) {
        self.chamber = chamber;
        self.events.push(GameEvent::ChamberLoaded {
            loaded: self.chamber.loaded(),
            empty: self.chamber.empty(),
        });
    }

    /// Changes who controls `player`.
    pub fn set_controller(
        &mut self,
        player: PlayerIndex,
        controller: Controller,
    ) -> Result<(), GameError> {
        self.roster
            .get_mut(player)
            .ok_or(GameError::InvalidPlayer(player))?
            .controller = controller;
        Ok(())
    }

    /// Returns all events since the last call to `drain_events`.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Loads a new random chamber and hands out items to all living players.
    fn reload(&mut self) {
        let (live, total) = self.chamber_config.roll(&mut self.rng);
        self.chamber.reload(live, total, &mut self.rng);

        tracing::info!(
            "loaded chamber with {} live and {} blank rounds",
            self.chamber.loaded(),
            self.chamber.empty(),
        );
        self.events.push(GameEvent::ChamberLoaded {
            loaded: self.chamber.loaded(),
            empty: self.chamber.empty(),
        });

        for index in 0..self.roster.len() {
            if !self.roster[index].is_alive() {
                continue;
            }

            for _ in 0..self.items_config.per_reload {
                if self.roster[index].inventory.is_full() {
                    break;
                }

                let item = Item::random(&mut self.rng);
                if let Ok(slot) = self.grant_item(index, item) {
                    tracing::debug!(
                        "{} received {} in slot {}",
                        self.roster[index].name,
                        item,
                        slot,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chamber::{Chamber, Round};
    use crate::config::GameConfig;
    use crate::error::GameError;
    use crate::events::GameEvent;
    use crate::inventory::INVENTORY_SLOTS;
    use crate::items::{Item, ItemEffect};
    use crate::player::Controller;
    use crate::turn::{GameOutcome, Phase, ShootTarget, ShotResult, TurnTransition};

    use super::{GameMode, GameState, COMPUTER_NAME};

    fn game(mode: GameMode, health: u32, rounds: &[Round]) -> GameState {
        let names = (1..=mode.humans()).map(|index| format!("P{}", index));
        let mut config = GameConfig::with_players(mode, names);
        config.seed = Some(1);
        config.health.max = health;
        config.items.per_reload = 0;

        let mut state = GameState::new(config).unwrap();
        state.load_chamber(Chamber::from_rounds(rounds.iter().copied()));
        state.drain_events();
        state
    }

    #[test]
    fn scenario_self_blank_keeps_turn_then_reload() {
        let mut state = game(
            GameMode::TwoPlayer,
            3,
            &[Round::Blank, Round::Live, Round::Blank],
        );

        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.result, ShotResult::SelfSafe);
        assert_eq!(state.current_index(), 0);

        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.result, ShotResult::SelfHit);
        assert_eq!(state.players()[0].health.health, 2);
        assert_eq!(state.current_index(), 1);

        let shot = state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(shot.result, ShotResult::OpponentSafe);
        assert_eq!(shot.target, 0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.remaining(), 0);

        // The next shot reloads the chamber before drawing.
        state.drain_events();
        state.shoot(ShootTarget::Shooter).unwrap();
        assert!(state
            .drain_events()
            .iter()
            .any(|event| matches!(event, GameEvent::ChamberLoaded { .. })));
        assert_eq!(state.chamber().fired(), 1);
    }

    #[test]
    fn scenario_double_damage_hit() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Live, Round::Live]);
        state.grant_item(0, Item::DoubleDamage).unwrap();

        assert_eq!(state.use_item(0), Ok(ItemEffect::DamageArmed));
        assert!(state.players()[0].double_damage);
        assert_eq!(state.players()[0].inventory.get(0), None);

        let shot = state.shoot(ShootTarget::Opponent(Some(1))).unwrap();
        assert_eq!(shot.damage, 2);
        assert_eq!(state.players()[1].health.health, 1);
        assert!(!state.players()[0].double_damage);

        // Only a single hit is doubled.
        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.damage, 1);
    }

    #[test]
    fn double_damage_applies_to_self_hit() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Live, Round::Blank]);
        state.grant_item(0, Item::DoubleDamage).unwrap();
        state.use_item(0).unwrap();

        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.result, ShotResult::SelfHit);
        assert_eq!(shot.damage, 2);
        assert_eq!(state.players()[0].health.health, 1);
        assert!(!state.players()[0].double_damage);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn scenario_eliminated_player_skipped() {
        let mut state = game(
            GameMode::FourPlayer,
            1,
            &[Round::Live, Round::Blank, Round::Blank, Round::Blank],
        );

        // P1 eliminates P2.
        let shot = state.shoot(ShootTarget::Opponent(Some(1))).unwrap();
        assert!(shot.eliminated);
        assert!(!state.is_game_over());
        assert_eq!(state.current_index(), 2);

        // P3 can't target P2.
        assert_eq!(
            state.shoot(ShootTarget::Opponent(Some(1))),
            Err(GameError::InvalidTarget(Some(1)))
        );
        assert_eq!(state.select_target(1), Err(GameError::InvalidTarget(Some(1))));
        assert_eq!(state.remaining(), 3);

        state.shoot(ShootTarget::Opponent(Some(3))).unwrap();
        assert_eq!(state.current_index(), 3);
        state.shoot(ShootTarget::Opponent(Some(2))).unwrap();
        assert_eq!(state.current_index(), 0);
        state.shoot(ShootTarget::Opponent(Some(3))).unwrap();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn scenario_double_trigger_after_self_blank() {
        let mut state = game(
            GameMode::TwoPlayer,
            3,
            &[Round::Blank, Round::Blank, Round::Live],
        );
        state.grant_item(0, Item::DoubleTrigger).unwrap();
        assert_eq!(state.use_item(0), Ok(ItemEffect::TriggerArmed));
        assert!(state.combo_pending());

        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.result, ShotResult::SelfSafe);
        assert_eq!(shot.transition, TurnTransition::FollowUp);
        assert!(!state.combo_pending());
        assert_eq!(state.current_index(), 0);

        // The follow-up shot decides the turn passing.
        let shot = state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(shot.transition, TurnTransition::Pass);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn double_trigger_overrides_pass() {
        let mut state = game(
            GameMode::TwoPlayer,
            3,
            &[Round::Live, Round::Blank, Round::Blank],
        );
        state.grant_item(0, Item::DoubleTrigger).unwrap();
        state.use_item(0).unwrap();

        let shot = state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(shot.result, ShotResult::OpponentHit);
        assert_eq!(state.current_index(), 0);

        let shot = state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(shot.transition, TurnTransition::Retain);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn cigarette_never_exceeds_max() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Live, Round::Blank]);
        state.grant_item(0, Item::Cigarette).unwrap();
        state.grant_item(0, Item::Cigarette).unwrap();

        assert_eq!(state.use_item(0), Ok(ItemEffect::Healed { from: 3, to: 3 }));
        assert_eq!(state.players()[0].health.health, 3);

        state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(state.players()[0].health.health, 2);
        state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(state.current_index(), 0);

        assert_eq!(state.use_item(1), Ok(ItemEffect::Healed { from: 2, to: 3 }));
        assert!(state.players()[0].health.is_max());
        assert!(state.players()[0].inventory.is_empty());
    }

    #[test]
    fn reorder_keeps_counts() {
        let mut state = game(
            GameMode::TwoPlayer,
            3,
            &[Round::Blank, Round::Live, Round::Blank, Round::Live, Round::Blank],
        );
        state.grant_item(0, Item::Reorder).unwrap();
        state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(state.current_index(), 0);

        assert_eq!(state.use_item(0), Ok(ItemEffect::Shuffled { remaining: 4 }));
        assert_eq!(state.loaded(), 2);
        assert_eq!(state.empty(), 2);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn rejected_item_use_keeps_state() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Blank, Round::Live]);
        state.grant_item(1, Item::Cigarette).unwrap();
        state.drain_events();

        assert_eq!(state.use_item(0), Err(GameError::InvalidSlot(0)));
        assert_eq!(state.use_item(100), Err(GameError::InvalidSlot(100)));
        assert_eq!(
            state.use_item_as(1, 0),
            Err(GameError::NotYourTurn {
                player: 1,
                current: 0
            })
        );

        assert_eq!(state.players()[1].inventory.get(0), Some(Item::Cigarette));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn rejected_shot_keeps_state() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Live, Round::Blank]);

        assert_eq!(
            state.shoot(ShootTarget::Opponent(Some(0))),
            Err(GameError::InvalidTarget(Some(0)))
        );
        assert_eq!(
            state.shoot(ShootTarget::Opponent(Some(2))),
            Err(GameError::InvalidTarget(Some(2)))
        );
        assert_eq!(state.remaining(), 2);
        assert_eq!(state.current_index(), 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn target_selection_cleared_after_shot() {
        let mut state = game(
            GameMode::FourPlayer,
            3,
            &[Round::Blank, Round::Blank, Round::Blank],
        );

        assert_eq!(
            state.shoot(ShootTarget::Opponent(None)),
            Err(GameError::InvalidTarget(None))
        );

        state.select_target(2).unwrap();
        assert_eq!(state.target_selection(), Some(2));

        let shot = state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(shot.target, 2);
        assert_eq!(state.target_selection(), None);
    }

    #[test]
    fn grant_item_rejects_invalid_player_and_full_inventory() {
        let mut state = game(GameMode::TwoPlayer, 3, &[Round::Live, Round::Blank]);

        assert_eq!(
            state.grant_item(2, Item::Cigarette),
            Err(GameError::InvalidPlayer(2))
        );
        assert_eq!(
            state.set_controller(2, Controller::Computer),
            Err(GameError::InvalidPlayer(2))
        );
        assert!(state.drain_events().is_empty());

        for slot in 0..INVENTORY_SLOTS {
            assert_eq!(state.grant_item(1, Item::Reorder), Ok(slot));
        }
        assert_eq!(
            state.grant_item(1, Item::Cigarette),
            Err(GameError::InventoryFull(Item::Cigarette))
        );

        state.set_controller(1, Controller::Computer).unwrap();
        assert_eq!(state.players()[1].controller, Controller::Computer);
    }

    #[test]
    fn deferred_advance() {
        let mut config = GameConfig::with_players(GameMode::TwoPlayer, ["P1", "P2"]);
        config.seed = Some(5);
        config.auto_advance = false;
        config.items.per_reload = 0;
        let mut state = GameState::new(config).unwrap();
        state.load_chamber(Chamber::from_rounds([Round::Blank, Round::Blank]));

        state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(state.phase(), Phase::Resolved(TurnTransition::Pass));
        assert_eq!(state.current_index(), 0);
        assert_eq!(
            state.shoot(ShootTarget::Shooter),
            Err(GameError::ResolutionPending)
        );
        assert_eq!(state.use_item(0), Err(GameError::ResolutionPending));

        let change = state.advance_after_resolution().unwrap();
        assert_eq!((change.from, change.to), (0, 1));
        assert_eq!(state.phase(), Phase::AwaitingAction);
        assert_eq!(state.advance_after_resolution(), None);
    }

    #[test]
    fn game_over_and_winner() {
        let mut state = game(GameMode::TwoPlayer, 1, &[Round::Live, Round::Live]);

        let shot = state.shoot(ShootTarget::Opponent(None)).unwrap();
        assert_eq!(shot.game_over, Some(GameOutcome::Winner(0)));
        assert!(state.is_game_over());
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("P1"));
        assert_eq!(
            state.shoot(ShootTarget::Shooter),
            Err(GameError::GameOver)
        );
        assert!(state
            .drain_events()
            .contains(&GameEvent::GameOver(GameOutcome::Winner(0))));
    }

    #[test]
    fn self_elimination_hands_win_to_opponent() {
        let mut state = game(GameMode::TwoPlayer, 1, &[Round::Live, Round::Blank]);

        state.shoot(ShootTarget::Shooter).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(1)));
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("P2"));
    }

    #[test]
    fn single_player_adds_computer() {
        let config = GameConfig::with_players(GameMode::SinglePlayer, ["Kedullah"]);
        let state = GameState::new(config).unwrap();

        assert_eq!(state.players().len(), 2);
        assert_eq!(state.players()[1].name, COMPUTER_NAME);
        assert_eq!(state.players()[1].controller, Controller::Computer);
        assert_eq!(state.players()[0].controller, Controller::Human);
    }

    #[test]
    fn initial_reload_grants_items() {
        let mut config = GameConfig::with_players(GameMode::FourPlayer, ["a", "b", "c", "d"]);
        config.seed = Some(99);
        config.items.per_reload = 3;
        let mut state = GameState::new(config).unwrap();

        for player in state.players() {
            assert_eq!(player.inventory.len(), 3);
        }
        assert!(state.remaining() >= 2);
        assert!(state.loaded() >= 1 && state.empty() >= 1);

        let granted = state
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, GameEvent::ItemGranted { .. }))
            .count();
        assert_eq!(granted, 12);
    }
}
