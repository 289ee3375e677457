//! Tunables for the scrolling text widget.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default scroll speed in columns per second.
pub const SCROLL_SPEED: f64 = 30.0;

/// Configuration for [`ScrollingText`](super::ScrollingText).
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeConfig {
    /// Columns per second; the loop duration is `content_width / scroll_speed`.
    pub scroll_speed: f64,
    /// Blank columns between the original text and its duplicate.
    pub gap: u16,
    /// Columns covered by each fade edge.
    pub fade_width: u16,
    /// Time the left fade takes to appear or disappear.
    pub fade_transition: Duration,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            scroll_speed: SCROLL_SPEED,
            gap: 4,
            fade_width: 3,
            fade_transition: Duration::from_millis(500),
        }
    }
}

impl MarqueeConfig {
    /// Set the scroll speed (builder pattern).
    #[must_use]
    pub const fn with_scroll_speed(mut self, scroll_speed: f64) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    /// Set the gap between copies (builder pattern).
    #[must_use]
    pub const fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set the fade edge width (builder pattern).
    #[must_use]
    pub const fn with_fade_width(mut self, fade_width: u16) -> Self {
        self.fade_width = fade_width;
        self
    }

    /// Set the left fade transition time (builder pattern).
    #[must_use]
    pub const fn with_fade_transition(mut self, fade_transition: Duration) -> Self {
        self.fade_transition = fade_transition;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "scroll_speed",
                reason: format!("must be a finite number above zero, got {}", self.scroll_speed),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MarqueeConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.scroll_speed - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_bad_speed() {
        for speed in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = MarqueeConfig::default().with_scroll_speed(speed);
            assert!(
                matches!(
                    config.validate(),
                    Err(Error::InvalidConfig { field: "scroll_speed", .. })
                ),
                "speed {speed} should be rejected"
            );
        }
    }

    #[test]
    fn test_builders() {
        let config = MarqueeConfig::default()
            .with_gap(2)
            .with_fade_width(5)
            .with_fade_transition(Duration::ZERO);
        assert_eq!(config.gap, 2);
        assert_eq!(config.fade_width, 5);
        assert_eq!(config.fade_transition, Duration::ZERO);
    }
}
