//! Shot resolution and turn passing.

use std::fmt::{self, Display, Formatter};
use std::mem;

use crate::chamber::Round;
use crate::error::GameError;
use crate::roster::{PlayerIndex, Roster};

/// The damage dealt by a live round.
pub const DAMAGE: u32 = 1;

/// The damage dealt by a live round while double damage is armed.
pub const DOUBLE_DAMAGE: u32 = 2;

/// Who the shooter aims at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShootTarget {
    /// The shooter aims at itself.
    Shooter,
    /// The shooter aims at another player.
    ///
    /// Without an explicit index the pending target selection is used, or the only remaining
    /// opponent if there is exactly one.
    Opponent(Option<PlayerIndex>),
}

impl ShootTarget {
    #[inline]
    pub const fn is_shooter(self) -> bool {
        matches!(self, Self::Shooter)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShotResult {
    SelfSafe,
    SelfHit,
    OpponentSafe,
    OpponentHit,
}

impl ShotResult {
    pub const fn new(target: ShootTarget, round: Round) -> Self {
        match (target, round) {
            (ShootTarget::Shooter, Round::Blank) => Self::SelfSafe,
            (ShootTarget::Shooter, Round::Live) => Self::SelfHit,
            (ShootTarget::Opponent(_), Round::Blank) => Self::OpponentSafe,
            (ShootTarget::Opponent(_), Round::Live) => Self::OpponentHit,
        }
    }

    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::SelfHit | Self::OpponentHit)
    }
}

impl Display for ShotResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SelfSafe => "self safe",
            Self::SelfHit => "self hit",
            Self::OpponentSafe => "opponent safe",
            Self::OpponentHit => "opponent hit",
        };

        f.write_str(s)
    }
}

/// What happens to the turn after a shot resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TurnTransition {
    /// The shooter keeps the turn.
    Retain,
    /// The shooter fires again because of a double trigger. Turn passing is decided by the
    /// follow-up shot.
    FollowUp,
    /// The turn passes to the next living player.
    Pass,
}

/// Decides the turn passing after a single shot.
///
/// A blank fired at the shooter keeps the turn, every other outcome passes it. A pending double
/// trigger overrides both with a follow-up shot.
pub const fn turn_transition(target: ShootTarget, round: Round, combo: bool) -> TurnTransition {
    if combo {
        return TurnTransition::FollowUp;
    }

    match (target, round) {
        (ShootTarget::Shooter, Round::Blank) => TurnTransition::Retain,
        (ShootTarget::Shooter, Round::Live) | (ShootTarget::Opponent(_), _) => {
            TurnTransition::Pass
        }
    }
}

/// The final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Exactly one player survived.
    Winner(PlayerIndex),
    /// No player survived.
    Draw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The current player may use items or shoot.
    AwaitingAction,
    /// A shot was resolved and the transition has not been applied yet.
    Resolved(TurnTransition),
    GameOver(GameOutcome),
}

/// A resolved shot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShotOutcome {
    pub shooter: PlayerIndex,
    /// The player the shot was aimed at. Equal to `shooter` for self shots.
    pub target: PlayerIndex,
    pub round: Round,
    pub result: ShotResult,
    /// The health lost by `target`.
    pub damage: u32,
    /// Whether `target` was eliminated by this shot.
    pub eliminated: bool,
    pub transition: TurnTransition,
    /// Set if this shot ended the game.
    pub game_over: Option<GameOutcome>,
}

/// The turn was handed from one player to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnChange {
    pub from: PlayerIndex,
    pub to: PlayerIndex,
}

/// Tracks whose turn it is and resolves shots against the [`Roster`].
#[derive(Clone, Debug)]
pub struct TurnEngine {
    current: PlayerIndex,
    phase: Phase,
    /// A double trigger is armed for the next shot.
    combo: bool,
}

impl TurnEngine {
    /// Creates a new `TurnEngine` starting with the first living player of the `roster`.
    pub fn new(roster: &Roster) -> Self {
        let mut engine = Self {
            current: 0,
            phase: Phase::AwaitingAction,
            combo: false,
        };

        match roster.first_living() {
            Some(index) => engine.current = index,
            None => engine.phase = Phase::GameOver(GameOutcome::Draw),
        }

        if roster.alive() == 1 {
            engine.phase = Phase::GameOver(GameOutcome::Winner(engine.current));
        }

        engine
    }

    #[inline]
    pub fn current(&self) -> PlayerIndex {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn combo_pending(&self) -> bool {
        self.combo
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Arms a double trigger for the next shot.
    pub fn arm_combo(&mut self) {
        self.combo = true;
    }

    /// Returns an error if the current player may not act.
    pub fn ensure_awaiting_action(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingAction => Ok(()),
            Phase::Resolved(_) => Err(GameError::ResolutionPending),
            Phase::GameOver(_) => Err(GameError::GameOver),
        }
    }

    /// Resolves the player hit by a shot at `target`.
    ///
    /// `selection` is the pending target selection of the shoot-opponent flow.
    pub fn resolve_target(
        &self,
        roster: &Roster,
        target: ShootTarget,
        selection: Option<PlayerIndex>,
    ) -> Result<PlayerIndex, GameError> {
        let index = match target {
            ShootTarget::Shooter => return Ok(self.current),
            ShootTarget::Opponent(Some(index)) => index,
            ShootTarget::Opponent(None) => match selection {
                Some(index) => index,
                None => {
                    let mut opponents = roster.opponents(self.current);
                    match (opponents.next(), opponents.next()) {
                        (Some(index), None) => index,
                        _ => return Err(GameError::InvalidTarget(None)),
                    }
                }
            },
        };

        if index == self.current || !roster.is_alive(index) {
            return Err(GameError::InvalidTarget(Some(index)));
        }

        Ok(index)
    }

    /// Applies a fired `round` from the current player at `victim`.
    ///
    /// `victim` must have been returned by [`resolve_target`] for the same `target`.
    ///
    /// [`resolve_target`]: Self::resolve_target
    pub fn fire(
        &mut self,
        roster: &mut Roster,
        target: ShootTarget,
        victim: PlayerIndex,
        round: Round,
    ) -> ShotOutcome {
        let shooter = self.current;
        let combo = mem::take(&mut self.combo);

        let mut damage = 0;
        if round.is_live() {
            damage = if mem::take(&mut roster[shooter].double_damage) {
                DOUBLE_DAMAGE
            } else {
                DAMAGE
            };

            roster[victim].health -= damage;
        }
        let eliminated = damage != 0 && !roster[victim].is_alive();

        let mut transition = turn_transition(target, round, combo);
        if transition == TurnTransition::FollowUp && !roster[shooter].is_alive() {
            transition = TurnTransition::Pass;
        }

        let game_over = match roster.alive() {
            0 => Some(GameOutcome::Draw),
            1 => roster.first_living().map(GameOutcome::Winner),
            _ => None,
        };

        self.phase = match game_over {
            Some(outcome) => Phase::GameOver(outcome),
            None => Phase::Resolved(transition),
        };

        ShotOutcome {
            shooter,
            target: victim,
            round,
            result: ShotResult::new(target, round),
            damage,
            eliminated,
            transition,
            game_over,
        }
    }

    /// Applies the transition of a resolved shot. Returns the change of turn, if the turn
    /// passed to another player.
    pub fn advance(&mut self, roster: &Roster) -> Option<TurnChange> {
        let Phase::Resolved(transition) = self.phase else {
            return None;
        };
        self.phase = Phase::AwaitingAction;

        match transition {
            TurnTransition::Retain | TurnTransition::FollowUp => None,
            TurnTransition::Pass => {
                let from = self.current;
                let to = roster.next_living(from)?;
                self.current = to;
                (from != to).then_some(TurnChange { from, to })
            }
        }
    }
}
