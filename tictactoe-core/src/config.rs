//! Configuration types for players and matches

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ai::{MinimaxAI, Player, RandomAI};

/// Player type for games
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Full-tree minimax search
    #[default]
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Minimax => write!(f, "minimax"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(PlayerKind::Minimax),
            "random" => Ok(PlayerKind::Random),
            other => Err(format!("unknown player kind: {other}")),
        }
    }
}

/// How to build one player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    /// Random seed for reproducibility (None = random)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn minimax() -> Self {
        Self {
            kind: PlayerKind::Minimax,
            seed: None,
        }
    }

    pub fn random() -> Self {
        Self {
            kind: PlayerKind::Random,
            seed: None,
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the player for game `game_index` of a match.
    ///
    /// Seeded players get a distinct, reproducible seed per game.
    pub fn build(&self, game_index: u64) -> Box<dyn Player> {
        match self.kind {
            PlayerKind::Minimax => Box::new(MinimaxAI::new()),
            PlayerKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAI::with_seed(seed.wrapping_add(game_index))),
                None => Box::new(RandomAI::new()),
            },
        }
    }
}

/// Match configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player that takes the first side in game one
    pub first: PlayerConfig,
    /// Player that takes the second side in game one
    pub second: PlayerConfig,
    /// Number of games to play
    pub games: usize,
    /// Swap sides after every game
    #[serde(default = "default_alternate_sides")]
    pub alternate_sides: bool,
}

fn default_alternate_sides() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: PlayerConfig::minimax(),
            second: PlayerConfig::random(),
            games: 10,
            alternate_sides: true,
        }
    }
}

impl MatchConfig {
    pub fn new(first: PlayerConfig, second: PlayerConfig, games: usize) -> Self {
        Self {
            first,
            second,
            games,
            ..Default::default()
        }
    }

    /// Keep the same player on the first side for every game
    pub fn fixed_sides(mut self) -> Self {
        self.alternate_sides = false;
        self
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse match config: {}", path.display()))?;
        Ok(config)
    }
}
