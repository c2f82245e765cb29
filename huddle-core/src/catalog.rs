//! Game content catalog
//!
//! Park themes, prompt words, whisper sentences and per-game rules, loaded
//! from a built-in TOML document.

use serde::{Deserialize, Serialize};

use crate::panel::PanelKind;

const BUILTIN_CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkTheme {
    pub name: String,
    pub icon: String,
}

/// Numbered rule lines shown by each game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesCatalog {
    pub parks: Vec<String>,
    pub draw_guess: Vec<String>,
    pub whispers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameCatalog {
    pub parks: Vec<ParkTheme>,
    pub draw_words: Vec<String>,
    pub whisper_sentences: Vec<String>,
    pub rules: RulesCatalog,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse game catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Game catalog list '{0}' is empty")]
    EmptyList(&'static str),
}

impl GameCatalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: GameCatalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.parks.is_empty() {
            return Err(CatalogError::EmptyList("parks"));
        }
        if self.draw_words.is_empty() {
            return Err(CatalogError::EmptyList("draw_words"));
        }
        if self.whisper_sentences.is_empty() {
            return Err(CatalogError::EmptyList("whisper_sentences"));
        }
        Ok(())
    }

    pub fn rules_for(&self, kind: PanelKind) -> &[String] {
        match kind {
            PanelKind::Parks => &self.rules.parks,
            PanelKind::DrawGuess => &self.rules.draw_guess,
            PanelKind::Whispers => &self.rules.whispers,
        }
    }
}

/// Load the built-in catalog. An unusable document yields an empty catalog.
pub fn load_catalog() -> GameCatalog {
    GameCatalog::from_toml_str(BUILTIN_CATALOG_TOML).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load built-in game catalog");
        GameCatalog::default()
    })
}
