use std::path::Path;

use crate::agent::ai::{AIConfig, AIType, Evaluation, DEFAULT_DEPTH, MAX_SEARCH_DEPTH};
use crate::error::ConfigError;
use crate::game_repr::Layout;

/// Top-level application configuration, loadable from TOML.
///
/// ```toml
/// [agent]
/// kind = "expectimax"
/// evaluation = "better"
/// depth = 3
///
/// [game]
/// layout = "smallClassic"
/// num_games = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentSection,
    pub game: GameSection,
}

/// Which Pacman agent to build.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentSection {
    pub kind: AIType,
    /// Falls back to the agent's default evaluation when absent
    pub evaluation: Option<Evaluation>,
    pub depth: u32,
    /// Seed for the reflex agent's tie-breaking
    pub seed: Option<u64>,
}

impl Default for AgentSection {
    fn default() -> Self {
        AgentSection {
            kind: AIType::default(),
            evaluation: None,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Which games to play.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSection {
    /// Built-in layout name or path to a layout file
    pub layout: String,
    pub num_games: usize,
    /// Total agent moves before a game is cut short
    pub max_moves: usize,
    /// Drop ghosts beyond this count
    pub max_ghosts: Option<usize>,
    /// Seed for the random ghosts; each game derives its own from it
    pub ghost_seed: Option<u64>,
}

impl Default for GameSection {
    fn default() -> Self {
        GameSection {
            layout: "smallClassic".to_string(),
            num_games: 1,
            max_moves: 2000,
            max_ghosts: None,
            ghost_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "agent.depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        if self.game.num_games == 0 {
            return Err(ConfigError::Validation(
                "game.num_games must be > 0".into(),
            ));
        }
        if self.game.max_moves == 0 {
            return Err(ConfigError::Validation(
                "game.max_moves must be > 0".into(),
            ));
        }
        if self.game.layout.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.layout must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the agent section into a player configuration
    pub fn to_ai_config(&self) -> AIConfig {
        let mut config = AIConfig::new(self.agent.kind).with_depth(self.agent.depth);
        if let Some(evaluation) = self.agent.evaluation {
            config = config.with_evaluation(evaluation);
        }
        if let Some(seed) = self.agent.seed {
            config = config.with_seed(seed);
        }
        config
    }

    /// Load the configured layout, trimmed to `max_ghosts`
    pub fn layout(&self) -> Result<Layout, crate::error::LayoutError> {
        let layout = Layout::load(&self.game.layout)?;
        Ok(match self.game.max_ghosts {
            Some(max) => layout.with_max_ghosts(max),
            None => layout,
        })
    }
}
