//! Overlay configuration.
//!
//! The page can hand `mount_overlay` a partial JSON object; every field has a
//! default matching the stock overlay layout, so an empty object (or no config
//! at all) yields a working setup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::OverlayError;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_ASSET_ROOT: &str = "assets/images/Pokemon";
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 5000;
pub const DEFAULT_FALLBACK_POKEMON: &str = "pikachu";
pub const DEFAULT_STORAGE_KEY: &str = "userPokemonData";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Prefix for `/api/...` endpoints. Empty means same origin.
    pub api_base: String,
    /// Directory holding `<pokemon>.png` sprites.
    pub asset_root: String,
    /// How long a chat bubble stays visible.
    pub message_ttl_ms: u64,
    /// Identifier returned when the random endpoint is unusable.
    pub fallback_pokemon: String,
    /// `localStorage` key for assignments that failed to save.
    pub storage_key: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            asset_root: DEFAULT_ASSET_ROOT.to_owned(),
            message_ttl_ms: DEFAULT_MESSAGE_TTL_MS,
            fallback_pokemon: DEFAULT_FALLBACK_POKEMON.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl OverlayConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Config`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, OverlayError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| OverlayError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim_end_matches('/').to_owned();
        self.asset_root = self.asset_root.trim_end_matches('/').to_owned();
        self
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    /// Image path for a Pokemon sprite, e.g. `assets/images/Pokemon/eevee.png`.
    pub fn sprite_path(&self, pokemon: &str) -> String {
        format!("{}/{pokemon}.png", self.asset_root)
    }
}
