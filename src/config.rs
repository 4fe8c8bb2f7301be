// TOML configuration file for segmentation runs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::segmenter::{Lexicon, LexiconOverrides, SegmenterConfig, DEFAULT_MAX_ASIDE_LENGTH};

/// Contents of a `sentseg` configuration file.
///
/// ```toml
/// max_aside_length = 70
///
/// [lexicon]
/// replace = false
/// abbreviations = ["approx", "Bearb"]
/// sentence_starters = ["Ob"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub max_aside_length: usize,
    pub lexicon: LexiconOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_aside_length: DEFAULT_MAX_ASIDE_LENGTH,
            lexicon: LexiconOverrides::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid configuration")?;
        if config.max_aside_length == 0 {
            anyhow::bail!("max_aside_length must be positive");
        }
        Ok(config)
    }

    /// Load a configuration file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content).with_context(|| format!("In config file {}", path.display()))?;

        info!(
            "Loaded configuration from {}: max_aside_length={}, {} lexicon overrides",
            path.display(),
            config.max_aside_length,
            config.override_count()
        );
        Ok(config)
    }

    fn override_count(&self) -> usize {
        self.lexicon.abbreviations.len()
            + self.lexicon.month_abbreviations.len()
            + self.lexicon.sentence_starters.len()
            + self.lexicon.roman_numerals.len()
    }

    pub fn segmenter_config(&self) -> SegmenterConfig {
        SegmenterConfig::with_max_aside_length(self.max_aside_length)
    }

    /// The lexicon this configuration describes.
    pub fn build_lexicon(&self) -> Lexicon {
        if self.lexicon.is_empty() {
            Lexicon::builtin().clone()
        } else {
            Lexicon::with_overrides(&self.lexicon)
        }
    }
}
