//! Shell configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use min_navbar::{AnimationCoordinator, EditorSettings, DEFAULT_DAMPING, DEFAULT_DURATION};
use min_navigation::{INTERNAL_SCHEME, NEW_TAB_URL};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL given to fresh tabs; shown as an empty address
    pub new_tab_url: String,
    /// Scheme of the browser's own pages
    pub internal_scheme: String,
    /// Search engine URL template, `%s` is replaced by the query
    pub search_engine: String,
    /// Overrides for the built-in UI strings
    pub strings: HashMap<String, String>,
    pub animation: AnimationConfig,
    /// Delay between frames when the shell drives its own frame loop
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fraction of the tab's offset the overlay starts from
    pub damping: f64,
    pub duration_ms: u64,
}

impl Config {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.animation.damping) {
            return Err(CoreError::Config(format!(
                "animation damping must be between 0 and 1, got {}",
                self.animation.damping
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(CoreError::Config(
                "frame interval must be at least 1 ms".to_string(),
            ));
        }
        if self.internal_scheme.is_empty() {
            return Err(CoreError::Config("internal scheme is empty".to_string()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            new_tab_url: self.new_tab_url.clone(),
            animation: AnimationCoordinator::new(
                self.animation.damping,
                Duration::from_millis(self.animation.duration_ms),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            new_tab_url: NEW_TAB_URL.to_string(),
            internal_scheme: INTERNAL_SCHEME.to_string(),
            search_engine: "https://duckduckgo.com/?q=%s".to_string(),
            strings: HashMap::new(),
            animation: AnimationConfig::default(),
            frame_interval_ms: 16,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}
