//! Overflow measurement and the scroll parameters derived from it.
//!
//! Measurement is a pure function of the text's intrinsic width, the
//! container width and the config. The text is always measured as a single
//! copy, whether or not a duplicate is currently laid out.

use super::config::MarqueeConfig;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Graphemes of a one-line label with the columns each occupies.
///
/// Control characters (newlines, tabs) render as a single space and
/// zero-width graphemes are dropped.
pub(crate) fn layout_graphemes(text: &str) -> impl Iterator<Item = (&str, u8)> + '_ {
    text.graphemes(true).filter_map(|g| {
        if g.chars().any(char::is_control) {
            return Some((" ", 1));
        }
        let width = g.width().min(2);
        u8::try_from(width).ok().filter(|&w| w > 0).map(|w| (g, w))
    })
}

/// Intrinsic width of one copy of `text`, in columns.
pub fn text_width(text: &str) -> u32 {
    layout_graphemes(text).map(|(_, w)| u32::from(w)).sum()
}

/// Animation parameters of an overflowing label.
///
/// `duration` and [`distance`](Self::distance) are the two values the
/// renderer consumes: one loop moves the text layer left by `distance`
/// columns over `duration`, then snaps back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollParams {
    content_width: u32,
    gap: u16,
    duration: Duration,
}

impl ScrollParams {
    /// Width of one copy of the text.
    pub const fn content_width(&self) -> u32 {
        self.content_width
    }

    /// Blank columns between the two copies.
    pub const fn gap(&self) -> u16 {
        self.gap
    }

    /// Length of one loop. Always non-zero.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Columns travelled per loop: one copy plus the gap.
    pub fn distance(&self) -> u32 {
        self.content_width.saturating_add(u32::from(self.gap))
    }

    /// Horizontal offset of the text layer after `elapsed` animation time.
    ///
    /// Linear within a loop, in `0..distance()`, and back to 0 at every
    /// loop boundary.
    pub fn offset_at(&self, elapsed: Duration) -> u32 {
        let period = self.duration.as_nanos().max(1);
        let phase = elapsed.as_nanos() % period;
        let offset = phase * u128::from(self.distance()) / period;
        u32::try_from(offset).unwrap_or(0)
    }
}

/// Result of the most recent measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Measurement {
    /// Not measured, or the container is not attached. Renders statically.
    #[default]
    Detached,
    /// The text fits inside the container.
    Fits {
        /// Width of the text.
        content_width: u32,
    },
    /// The text is wider than the container and scrolls.
    Overflowing(ScrollParams),
}

impl Measurement {
    /// Whether the text scrolls.
    pub const fn is_overflowing(&self) -> bool {
        matches!(self, Self::Overflowing(_))
    }

    /// Scroll parameters, present only while overflowing.
    pub const fn scroll_params(&self) -> Option<ScrollParams> {
        match self {
            Self::Overflowing(params) => Some(*params),
            Self::Detached | Self::Fits { .. } => None,
        }
    }

    /// Copies of the text laid out: two while overflowing, otherwise one.
    pub const fn copies(&self) -> usize {
        if self.is_overflowing() {
            2
        } else {
            1
        }
    }

    /// Measured width of one copy, if a measurement happened.
    pub const fn content_width(&self) -> Option<u32> {
        match self {
            Self::Detached => None,
            Self::Fits { content_width } => Some(*content_width),
            Self::Overflowing(params) => Some(params.content_width),
        }
    }
}

/// Decide whether `content_width` overflows `container_width`.
///
/// A zero-width container counts as not attached and yields
/// [`Measurement::Detached`].
pub fn measure(content_width: u32, container_width: u16, config: &MarqueeConfig) -> Measurement {
    if container_width == 0 {
        return Measurement::Detached;
    }
    if content_width <= u32::from(container_width) {
        return Measurement::Fits { content_width };
    }

    let seconds = f64::from(content_width) / config.scroll_speed;
    let duration = Duration::try_from_secs_f64(seconds)
        .unwrap_or(Duration::MAX)
        .max(Duration::from_nanos(1));

    Measurement::Overflowing(ScrollParams {
        content_width,
        gap: config.gap,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("So Much for Stardust"), 20);
        assert_eq!(text_width("日本"), 4);
        assert_eq!(text_width("e\u{301}"), 1);
        assert_eq!(text_width("a\tb\nc"), 5);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_fits() {
        let config = MarqueeConfig::default();
        let m = measure(20, 40, &config);
        assert_eq!(m, Measurement::Fits { content_width: 20 });
        assert!(!m.is_overflowing());
        assert_eq!(m.copies(), 1);
        assert_eq!(m.scroll_params(), None);
    }

    #[test]
    fn test_exact_fit_does_not_overflow() {
        let m = measure(40, 40, &MarqueeConfig::default());
        assert!(!m.is_overflowing());
    }

    #[test]
    fn test_overflow_params() {
        let config = MarqueeConfig::default();
        let m = measure(900, 300, &config);
        let params = m.scroll_params().unwrap();

        assert!(m.is_overflowing());
        assert_eq!(m.copies(), 2);
        assert_eq!(params.duration(), Duration::from_secs(30));
        assert_eq!(params.distance(), 900 + u32::from(config.gap));
        assert_eq!(m.content_width(), Some(900));
    }

    #[test]
    fn test_zero_container_is_detached() {
        let m = measure(900, 0, &MarqueeConfig::default());
        assert_eq!(m, Measurement::Detached);
        assert_eq!(m.copies(), 1);
        assert_eq!(m.content_width(), None);
    }

    #[test]
    fn test_duration_never_zero() {
        let config = MarqueeConfig::default().with_scroll_speed(f64::MAX);
        let params = measure(2, 1, &config).scroll_params().unwrap();
        assert!(params.duration() > Duration::ZERO);
    }

    #[test]
    fn test_offset_is_hard_reset_loop() {
        let config = MarqueeConfig::default().with_gap(0);
        // 60 columns at 30 col/s: a 2 second loop
        let params = measure(60, 10, &config).scroll_params().unwrap();

        assert_eq!(params.offset_at(Duration::ZERO), 0);
        assert_eq!(params.offset_at(Duration::from_millis(500)), 15);
        assert_eq!(params.offset_at(Duration::from_secs(1)), 30);
        assert_eq!(params.offset_at(Duration::from_millis(1999)), 59);
        // Snaps back instead of reversing
        assert_eq!(params.offset_at(Duration::from_secs(2)), 0);
        assert_eq!(params.offset_at(Duration::from_millis(2500)), 15);
    }

    #[test]
    fn test_offset_covers_gap() {
        let config = MarqueeConfig::default().with_gap(4);
        let params = measure(60, 10, &config).scroll_params().unwrap();
        // Half a loop travels half of (60 + 4)
        assert_eq!(params.offset_at(Duration::from_secs(1)), 32);
    }
}
