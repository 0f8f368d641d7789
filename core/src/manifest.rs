use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{BoardError, Result};
use crate::selection::VideoButton;

/// Element id the player table must carry to be recognised
pub const PLAYER_ELEMENT_ID: &str = "player";

/// The board layout: a player element and the buttons that drive it
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BoardManifest {
    /// Heading shown above the board
    #[serde(default)]
    pub title: Option<String>,
    /// Embed host for this board
    #[serde(default)]
    pub provider: Option<String>,
    /// The player element
    #[serde(default)]
    pub player: Option<PlayerElement>,
    /// Buttons in document order
    #[serde(default, rename = "button")]
    pub buttons: Vec<ButtonEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlayerElement {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ButtonEntry {
    pub label: String,
    #[serde(default)]
    pub video: Option<String>,
}

impl BoardManifest {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_toml_str(&text)?;
        debug!(
            "Loaded manifest {} with {} buttons (player: {})",
            path.display(),
            manifest.buttons.len(),
            manifest.has_player()
        );
        Ok(manifest)
    }

    /// Whether the player element is present under its fixed id
    pub fn has_player(&self) -> bool {
        self.player
            .as_ref()
            .is_some_and(|player| player.id == PLAYER_ELEMENT_ID)
    }

    pub fn video_buttons(&self) -> Vec<VideoButton> {
        self.buttons
            .iter()
            .map(|entry| VideoButton::new(entry.label.clone(), entry.video.clone()))
            .collect()
    }
}

/// `<config dir>/vidboard/board.toml`
pub fn default_manifest_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("vidboard").join("board.toml"))
        .ok_or(BoardError::NoConfigDir)
}
