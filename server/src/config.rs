use std::path::{Path, PathBuf};

/// Words rejected in player names when no `badWords` list is configured.
pub const DEFAULT_BAD_WORDS: &[&str] = &[
    "fuck", "shit", "cunt", "bitch", "asshole", "bastard", "whore", "slut",
];

/// Errors raised while loading the startup configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game server configuration, read once at startup and never mutated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Password every joining player must present
    pub player_pass: String,
    /// When false, profanity checks never report a match
    pub bad_word_filter: bool,
    pub bad_words: Vec<String>,
    pub game_width: f64,
    pub game_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_pass: "changeme".to_string(),
            bad_word_filter: true,
            bad_words: DEFAULT_BAD_WORDS.iter().map(|w| w.to_string()).collect(),
            game_width: 5000.0,  // arena units
            game_height: 5000.0, // arena units
        }
    }
}

/// Playfield bounds used when placing entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl GameConfig {
    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Read, parse and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded config from {}: arena {}x{}, bad word filter {} ({} words)",
            path.display(),
            config.game_width,
            config.game_height,
            if config.bad_word_filter { "on" } else { "off" },
            config.bad_words.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.game_width.is_finite() || self.game_width <= 0.0 {
            return Err("gameWidth must be finite and > 0".to_string());
        }
        if !self.game_height.is_finite() || self.game_height <= 0.0 {
            return Err("gameHeight must be finite and > 0".to_string());
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.game_width,
            height: self.game_height,
        }
    }
}
