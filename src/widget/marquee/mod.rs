//! Scrolling Text Widget: a one-line label that scrolls when it overflows.
//!
//! When the text is wider than its container the widget lays out two
//! copies separated by a gap and moves them left at a constant speed,
//! snapping back after each loop so the motion looks endless. Otherwise
//! the text is drawn once, left-aligned and still.
//!
//! # Lifecycle
//!
//! ```text
//! set_bounds ──▶ mount(hub) ──▶ [set_text | set_bounds | sync] * ──▶ unmount
//!                   │                        │
//!                   └──── measure ◀──────────┘
//! ```
//!
//! Measurement is recomputed from scratch on mount, on text change, on
//! bounds change and on every viewport resize delivered through the
//! [`ResizeHub`]. Until the widget is mounted with a non-empty container it
//! renders statically.
//!
//! # Example
//!
//! ```
//! use marquee::{Buffer, Rect, ResizeHub, ScrollingText, Widget};
//!
//! let hub = ResizeHub::new();
//! let mut label = ScrollingText::new("So Much for Stardust");
//! label.set_bounds(Rect::new(0, 0, 40, 1));
//! label.mount(&hub);
//! assert!(!label.is_overflowing());
//!
//! let mut buffer = Buffer::new(40, 1);
//! label.render(&mut buffer);
//! assert!(buffer.row_text(0).starts_with("So Much for Stardust"));
//! ```

mod config;
mod fade;
mod measure;

pub use config::{MarqueeConfig, SCROLL_SPEED};
pub use fade::{Edge, FadeEdge};
pub use measure::{measure, text_width, Measurement, ScrollParams};

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Style};
use crate::error::Result;
use crate::layout::Rect;
use crate::viewport::{ResizeHub, ResizeSubscription};
use measure::layout_graphemes;
use std::time::Duration;

/// What caused a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Mount,
    Content,
    Layout,
    Resize,
    Unmount,
}

/// A label that scrolls horizontally when its text overflows.
#[derive(Debug)]
pub struct ScrollingText {
    /// Label content.
    text: String,
    /// Intrinsic width of one copy of `text`.
    content_width: u32,
    /// Styling hint, passed through to every drawn cell.
    style: Style,
    /// Tunables.
    config: MarqueeConfig,
    /// Container assigned by the parent.
    bounds: Rect,
    /// Result of the latest measurement.
    measurement: Measurement,
    /// Live resize registration while mounted.
    subscription: Option<ResizeSubscription>,
    /// Animation time under the current scroll parameters.
    clock: Duration,
    /// Shown only while overflowing.
    left_fade: FadeEdge,
    /// Always shown.
    right_fade: FadeEdge,
    /// Needs redraw flag.
    dirty: bool,
}

impl ScrollingText {
    /// Create an unmounted label with the default configuration.
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), MarqueeConfig::default())
    }

    /// Create an unmounted label with a custom configuration.
    pub fn with_config(text: impl Into<String>, config: MarqueeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(text.into(), config))
    }

    fn build(text: String, config: MarqueeConfig) -> Self {
        Self {
            content_width: text_width(&text),
            text,
            style: Style::default(),
            left_fade: FadeEdge::new(Edge::Left, config.fade_width, 0.0),
            right_fade: FadeEdge::new(Edge::Right, config.fade_width, 1.0),
            config,
            bounds: Rect::ZERO,
            measurement: Measurement::Detached,
            subscription: None,
            clock: Duration::ZERO,
            dirty: true,
        }
    }

    /// Set the styling hint (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the styling hint.
    pub fn set_style(&mut self, style: Style) {
        if self.style != style {
            self.style = style;
            self.dirty = true;
        }
    }

    /// The styling hint.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// The configuration in use.
    pub const fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// The label content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label content.
    ///
    /// The previous measurement is discarded before the new text is
    /// measured, and the animation restarts from its first frame.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.content_width = text_width(&text);
        self.text = text;
        self.measurement = Measurement::Detached;
        self.clock = Duration::ZERO;
        self.dirty = true;
        self.remeasure(Trigger::Content);
    }

    /// Attach to the viewport and take the first measurement.
    ///
    /// Mounting twice keeps the existing subscription.
    pub fn mount(&mut self, hub: &ResizeHub) {
        if self.subscription.is_none() {
            self.subscription = Some(hub.subscribe());
        }
        self.remeasure(Trigger::Mount);
    }

    /// Detach from the viewport.
    ///
    /// Releases the resize subscription; the label falls back to static
    /// rendering until mounted again.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.remeasure(Trigger::Unmount);
    }

    /// Whether the label holds a resize subscription.
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Re-measure if the viewport was resized since the last call.
    ///
    /// Returns `true` if a resize was pending.
    pub fn sync(&mut self) -> bool {
        let resized = self
            .subscription
            .as_ref()
            .and_then(ResizeSubscription::drain)
            .is_some();
        if resized {
            self.remeasure(Trigger::Resize);
        }
        resized
    }

    /// Result of the latest measurement.
    pub const fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Whether the text currently scrolls.
    pub const fn is_overflowing(&self) -> bool {
        self.measurement.is_overflowing()
    }

    /// Duration and travel distance of the loop, while overflowing.
    pub const fn scroll_params(&self) -> Option<ScrollParams> {
        self.measurement.scroll_params()
    }

    /// Copies of the text in the layout: 2 while overflowing, else 1.
    pub const fn copies(&self) -> usize {
        self.measurement.copies()
    }

    /// Current leftward offset of the text layer, in columns.
    pub fn offset(&self) -> u32 {
        self.scroll_params()
            .map_or(0, |params| params.offset_at(self.clock))
    }

    /// Current opacity of the left fade.
    pub const fn left_fade_opacity(&self) -> f32 {
        self.left_fade.opacity()
    }

    fn container_width(&self) -> u16 {
        if self.is_mounted() {
            self.bounds.width
        } else {
            0
        }
    }

    fn remeasure(&mut self, trigger: Trigger) {
        let next = measure(self.content_width, self.container_width(), &self.config);

        if next != self.measurement {
            tracing::debug!(
                ?trigger,
                overflowing = next.is_overflowing(),
                content_width = self.content_width,
                container_width = self.bounds.width,
                duration = ?next.scroll_params().map(|p| p.duration()),
                "scrolling text measured"
            );
            if next.scroll_params() != self.measurement.scroll_params() {
                self.clock = Duration::ZERO;
            }
            self.measurement = next;
            self.dirty = true;
        }

        let target = if next.is_overflowing() { 1.0 } else { 0.0 };
        if self.left_fade.set_target(target, self.config.fade_transition) {
            self.dirty = true;
        }
    }

    /// Draw the text layer (one or two copies) shifted left by the offset.
    fn draw_text(&self, buffer: &mut Buffer, row: Rect) {
        let width = i64::from(row.width);
        let gap = i64::from(self.config.gap);
        let mut col = -i64::from(self.offset());

        'copies: for copy in 0..self.copies() {
            if copy > 0 {
                col += gap;
            }
            for (grapheme, w) in layout_graphemes(&self.text) {
                if col >= width {
                    break 'copies;
                }
                let w = i64::from(w);
                // Graphemes cut by either edge are clipped entirely
                if col >= 0 && col + w <= width {
                    if let Ok(dx) = u16::try_from(col) {
                        buffer.set_grapheme(row.x + dx, row.y, grapheme, self.style);
                    }
                }
                col += w;
            }
        }
    }
}

impl Widget for ScrollingText {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.dirty = true;
        self.remeasure(Trigger::Layout);
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }

        buffer.fill_rect(self.bounds, &Cell::blank().with_style(self.style));

        let row = self.bounds.row((self.bounds.height - 1) / 2);
        let Some(row) = row.intersection(&buffer.area()) else {
            return;
        };

        self.draw_text(buffer, row);
        self.left_fade.apply(buffer, row, self.style.bg);
        self.right_fade.apply(buffer, row, self.style.bg);
    }

    fn tick(&mut self, delta: Duration) -> bool {
        let mut changed = self.left_fade.advance(delta, self.config.fade_transition);

        if let Some(params) = self.scroll_params() {
            let before = params.offset_at(self.clock);
            self.clock = self.clock.saturating_add(delta);
            changed |= params.offset_at(self.clock) != before;
        }

        if changed {
            self.dirty = true;
        }
        changed
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
