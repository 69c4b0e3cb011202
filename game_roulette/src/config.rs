use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::GameRng;
use crate::state::GameMode;

/// The configuration of a single game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub mode: GameMode,
    /// The names of the human players in seating order.
    pub players: Vec<String>,
    /// The seed of the session. A random seed is used if this is `None`.
    pub seed: Option<u64>,
    /// Apply turn passing immediately after a shot resolved.
    ///
    /// If `false` the caller must call [`advance_after_resolution`] after every shot.
    ///
    /// Defaults to `true`.
    ///
    /// [`advance_after_resolution`]: crate::state::GameState::advance_after_resolution
    pub auto_advance: bool,
    pub health: HealthConfig,
    pub chamber: ChamberConfig,
    pub items: ItemsConfig,
}

impl GameConfig {
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let mut file = File::open(path).map_err(ConfigError::Io)?;

        let mut buf = String::new();
        file.read_to_string(&mut buf).map_err(ConfigError::Io)?;

        let config: Self = toml::from_str(&buf).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Creates a new `GameConfig` for `mode` with default settings.
    pub fn with_players<I, T>(mode: GameMode, players: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            mode,
            players: players.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != self.mode.humans() {
            return Err(ConfigError::PlayerCount {
                mode: self.mode,
                expected: self.mode.humans(),
                got: self.players.len(),
            });
        }

        if self.health.max == 0 {
            return Err(ConfigError::Health);
        }

        let ChamberConfig {
            min_rounds,
            max_rounds,
            live_ratio,
        } = self.chamber;
        if min_rounds < 2 || min_rounds > max_rounds {
            return Err(ConfigError::Chamber {
                min: min_rounds,
                max: max_rounds,
            });
        }

        if let Some(ratio) = live_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::LiveRatio(ratio));
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            players: vec!["Player 1".to_owned(), "Player 2".to_owned()],
            seed: None,
            auto_advance: true,
            health: HealthConfig::default(),
            chamber: ChamberConfig::default(),
            items: ItemsConfig::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    /// The starting and maximum health of every player.
    pub max: u32,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { max: 3 }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChamberConfig {
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// The share of live rounds in a reload. Live rounds are drawn uniformly if this is
    /// `None`.
    pub live_ratio: Option<f64>,
}

impl ChamberConfig {
    /// Draws the `(live, total)` round counts of the next reload.
    ///
    /// Every reload has at least one live and one blank round.
    pub fn roll(&self, rng: &mut GameRng) -> (usize, usize) {
        let total = rng
            .range_inclusive(self.min_rounds, self.max_rounds)
            .max(2);

        let live = match self.live_ratio {
            Some(ratio) => (total as f64 * ratio).round() as usize,
            None => rng.range_inclusive(1, total - 1),
        };

        (live.clamp(1, total - 1), total)
    }
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            min_rounds: 2,
            max_rounds: 8,
            live_ratio: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemsConfig {
    /// The number of random items every living player receives on each reload.
    pub per_reload: usize,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self { per_reload: 2 }
    }
}
