use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delays and intervals of the intro choreography, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntroTiming {
    /// Pause between page load and the first splash step timer.
    pub splash_start_delay_ms: u64,
    /// Interval between splash words.
    pub splash_step_ms: u64,
    /// How long an outgoing word keeps its exit marker.
    pub exit_clear_ms: u64,
    /// Hold on the last splash word before revealing the page.
    pub splash_hold_ms: u64,
    /// Overlay fade-out before the hero is revealed.
    pub overlay_fade_ms: u64,
    /// Delay after the hero reveal before the overlay element is removed.
    pub overlay_removal_ms: u64,
    /// Stagger between consecutive hero elements fading in.
    pub reveal_stagger_ms: u64,
    /// Lead-in before the staggered fade-in when no splash plays.
    pub hero_fade_lead_in_ms: u64,
    /// Delay before the hero title starts rotating when no splash plays.
    pub hero_start_delay_ms: u64,
    /// Interval between hero title words.
    pub hero_step_ms: u64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        IntroTiming {
            splash_start_delay_ms: 1000,
            splash_step_ms: 1800,
            exit_clear_ms: 600,
            splash_hold_ms: 1500,
            overlay_fade_ms: 800,
            overlay_removal_ms: 500,
            reveal_stagger_ms: 150,
            hero_fade_lead_in_ms: 100,
            hero_start_delay_ms: 1500,
            hero_step_ms: 2800,
        }
    }
}

impl IntroTiming {
    pub fn splash_start_delay(&self) -> Duration {
        Duration::from_millis(self.splash_start_delay_ms)
    }

    pub fn splash_step(&self) -> Duration {
        Duration::from_millis(self.splash_step_ms)
    }

    pub fn exit_clear(&self) -> Duration {
        Duration::from_millis(self.exit_clear_ms)
    }

    pub fn splash_hold(&self) -> Duration {
        Duration::from_millis(self.splash_hold_ms)
    }

    pub fn overlay_fade(&self) -> Duration {
        Duration::from_millis(self.overlay_fade_ms)
    }

    pub fn overlay_removal(&self) -> Duration {
        Duration::from_millis(self.overlay_removal_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn hero_fade_lead_in(&self) -> Duration {
        Duration::from_millis(self.hero_fade_lead_in_ms)
    }

    pub fn hero_start_delay(&self) -> Duration {
        Duration::from_millis(self.hero_start_delay_ms)
    }

    pub fn hero_step(&self) -> Duration {
        Duration::from_millis(self.hero_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_choreography() {
        let timing = IntroTiming::default();

        assert_eq!(timing.splash_start_delay(), Duration::from_millis(1000));
        assert_eq!(timing.splash_step(), Duration::from_millis(1800));
        assert_eq!(timing.reveal_stagger(), Duration::from_millis(150));
        assert_eq!(timing.hero_step(), Duration::from_millis(2800));
    }

    #[cfg(feature = "serde")]
    mod deser_tests {
        use super::*;

        #[test]
        fn missing_fields_fall_back_to_defaults() {
            // Arrange
            let toml_str = r#"
                splash_step_ms = 1200
                hero_step_ms = 3000
            "#;

            // Act
            let timing: IntroTiming = toml::from_str(toml_str).unwrap();

            // Assert
            assert_eq!(timing.splash_step(), Duration::from_millis(1200));
            assert_eq!(timing.hero_step(), Duration::from_millis(3000));
            assert_eq!(timing.splash_hold(), Duration::from_millis(1500));
        }
    }
}
