// Page configuration, read from an optional JSON block in the host document.

use super::constants::{DEFAULT_THRESHOLD, READY_DELAY_MS, RESIZE_DEBOUNCE_MS};
use super::effects::EffectOptions;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("threshold {0} is outside [0, 0.5]")]
    Threshold(f64),

    #[error("effect '{selector}': intensity {value} must be > 0")]
    Intensity { selector: String, value: f64 },

    #[error("effect with empty selector")]
    EmptySelector,
}

/// One `selector -> preset` binding.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EffectRule {
    pub selector: String,
    pub style: String,
    #[serde(flatten)]
    pub options: EffectOptions,
}

impl EffectRule {
    pub fn new(selector: &str, style: &str, options: EffectOptions) -> Self {
        Self {
            selector: selector.to_string(),
            style: style.to_string(),
            options,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub effects: Vec<EffectRule>,
    pub threshold: f64,
    pub resize_debounce_ms: u32,
    pub ready_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            effects: vec![
                EffectRule::new("#text03", "blur-in", EffectOptions::default()),
                EffectRule::new(
                    "#image02",
                    "focus-image",
                    EffectOptions {
                        replay: true,
                        ..EffectOptions::default()
                    },
                ),
            ],
            threshold: DEFAULT_THRESHOLD,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            ready_delay_ms: READY_DELAY_MS,
        }
    }
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=0.5).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        for rule in &self.effects {
            if rule.selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector);
            }
            if rule.options.intensity <= 0.0 {
                return Err(ConfigError::Intensity {
                    selector: rule.selector.clone(),
                    value: rule.options.intensity,
                });
            }
        }
        Ok(())
    }

    /// Parse `text` when present, falling back to defaults on any problem.
    pub fn load_or_default(text: Option<&str>) -> Self {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] {}; using defaults", e);
                Self::default()
            }
        }
    }
}
