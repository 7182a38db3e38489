use landing_core::{IntroTiming, PageSettings};
use serde::Deserialize;
use tracing::warn;

const LANDING_TOML: &str = include_str!("../landing.toml");

/// One entry of the sticky roles section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RoleCopy {
    pub title: String,
    pub summary: String,
}

/// Page content and timing, read from the embedded `landing.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandingConfig {
    /// Whether the page carries a splash overlay at all.
    pub splash: bool,
    pub splash_words: Vec<String>,
    pub hero_words: Vec<String>,
    pub roles: Vec<RoleCopy>,
    pub timing: IntroTiming,
    pub page: PageSettings,
}

impl Default for LandingConfig {
    fn default() -> Self {
        LandingConfig {
            splash: true,
            splash_words: ["love", "memories", "moments", "stories", "legacy"]
                .map(String::from)
                .to_vec(),
            hero_words: ["memories", "moments", "stories", "legacy"]
                .map(String::from)
                .to_vec(),
            roles: Vec::new(),
            timing: IntroTiming::default(),
            page: PageSettings::default(),
        }
    }
}

impl LandingConfig {
    /// Parses a TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Loads the embedded configuration, falling back to defaults if it cannot be read.
    pub fn load() -> Self {
        Self::from_toml(LANDING_TOML).unwrap_or_else(|e| {
            warn!("invalid landing configuration, using defaults: {e:#}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_configuration_parses() {
        let config = LandingConfig::from_toml(LANDING_TOML).unwrap();

        assert!(config.splash);
        assert_eq!(config.splash_words.len(), 5);
        assert_eq!(config.roles.len(), 3);
        assert_eq!(config.timing, IntroTiming::default());
        assert_eq!(config.page, PageSettings::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = LandingConfig::from_toml("splash = false\n[timing]\nhero_step_ms = 4000").unwrap();

        assert!(!config.splash);
        assert_eq!(config.hero_words, LandingConfig::default().hero_words);
        assert_eq!(config.timing.hero_step_ms, 4000);
        assert_eq!(config.timing.splash_step_ms, 1800);
    }

    #[test]
    fn embedded_file_is_valid_toml() {
        let value: toml::Value = toml::from_str(LANDING_TOML).unwrap();

        assert!(value.get("timing").is_some());
    }

    #[test]
    fn malformed_configuration_is_an_error() {
        assert!(LandingConfig::from_toml("splash_words = 3").is_err());
    }
}
