//! Fade edges: decorative gradients over the clipped ends of the label.

use crate::buffer::{Buffer, Rgb};
use crate::layout::Rect;
use std::time::Duration;

/// Which end of the container a fade covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Leading edge; text scrolls out of view here.
    Left,
    /// Trailing edge; text scrolls into view here.
    Right,
}

/// A gradient that blends text toward the background near one edge.
///
/// Opacity moves linearly toward its target; the outermost column is
/// blended the most.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEdge {
    edge: Edge,
    width: u16,
    opacity: f32,
    target: f32,
}

impl FadeEdge {
    /// Create a fade resting at `opacity`.
    pub fn new(edge: Edge, width: u16, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            edge,
            width,
            opacity,
            target: opacity,
        }
    }

    /// The edge this fade covers.
    pub const fn edge(&self) -> Edge {
        self.edge
    }

    /// Current opacity in `0.0..=1.0`.
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Opacity the fade is moving toward.
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Aim at a new opacity. A zero `transition` jumps straight there.
    ///
    /// Returns `true` if the visible opacity changed.
    pub fn set_target(&mut self, target: f32, transition: Duration) -> bool {
        self.target = target.clamp(0.0, 1.0);
        if transition.is_zero() {
            let changed = (self.opacity - self.target).abs() > f32::EPSILON;
            self.opacity = self.target;
            return changed;
        }
        false
    }

    /// Move toward the target by `delta`, covering the full range in
    /// `transition`. Returns `true` if the opacity changed.
    pub fn advance(&mut self, delta: Duration, transition: Duration) -> bool {
        let gap = self.target - self.opacity;
        if gap.abs() <= f32::EPSILON {
            return false;
        }
        if transition.is_zero() {
            self.opacity = self.target;
            return true;
        }
        #[allow(clippy::cast_possible_truncation)]
        let step = (delta.as_secs_f64() / transition.as_secs_f64()) as f32;
        self.opacity = if gap > 0.0 {
            (self.opacity + step).min(self.target)
        } else {
            (self.opacity - step).max(self.target)
        };
        step > 0.0
    }

    /// How strongly column `i` (0 = outermost) is blended, before opacity.
    fn strength(&self, i: u16) -> f32 {
        f32::from(self.width - i) / (f32::from(self.width) + 1.0)
    }

    /// Blend the text colors of `row` toward `bg`.
    pub fn apply(&self, buffer: &mut Buffer, row: Rect, bg: Rgb) {
        if self.opacity <= 0.0 || row.is_empty() {
            return;
        }
        for i in 0..self.width.min(row.width) {
            let x = match self.edge {
                Edge::Left => row.x + i,
                Edge::Right => row.right() - 1 - i,
            };
            let t = self.strength(i) * self.opacity;
            if let Some(cell) = buffer.get_mut(x, row.y) {
                let fg = cell.fg().lerp(bg, t);
                cell.set_fg(fg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    #[test]
    fn test_snap_without_transition() {
        let mut fade = FadeEdge::new(Edge::Left, 3, 0.0);
        assert!(fade.set_target(1.0, Duration::ZERO));
        assert!((fade.opacity() - 1.0).abs() < f32::EPSILON);
        assert!(!fade.set_target(1.0, Duration::ZERO));
    }

    #[test]
    fn test_linear_transition() {
        let transition = Duration::from_millis(500);
        let mut fade = FadeEdge::new(Edge::Left, 3, 0.0);
        assert!(!fade.set_target(1.0, transition));
        assert!(fade.opacity().abs() < f32::EPSILON);

        assert!(fade.advance(Duration::from_millis(250), transition));
        assert!((fade.opacity() - 0.5).abs() < 1e-4);

        assert!(fade.advance(Duration::from_millis(400), transition));
        assert!((fade.opacity() - 1.0).abs() < f32::EPSILON);
        assert!(!fade.advance(Duration::from_millis(100), transition));

        fade.set_target(0.0, transition);
        fade.advance(Duration::from_secs(1), transition);
        assert!(fade.opacity().abs() < f32::EPSILON);
    }

    #[test]
    fn test_apply_right_edge() {
        let white = Rgb::WHITE;
        let bg = Rgb::BLACK;
        let mut buffer = Buffer::new(8, 1);
        for x in 0..8 {
            buffer.set_grapheme(x, 0, "x", Style::new(white, bg));
        }

        FadeEdge::new(Edge::Right, 3, 1.0).apply(&mut buffer, Rect::new(0, 0, 8, 1), bg);

        // Outermost column is darkest, fading inward
        let fg = |x| buffer.get(x, 0).unwrap().fg();
        assert_eq!(fg(4), white);
        assert!(fg(7).r < fg(6).r);
        assert!(fg(6).r < fg(5).r);
        assert!(fg(5).r < white.r);
        assert_eq!(fg(7), white.lerp(bg, 0.75));
    }

    #[test]
    fn test_invisible_fade_is_noop() {
        let mut buffer = Buffer::new(4, 1);
        buffer.set_grapheme(0, 0, "x", Style::default());
        let before = buffer.clone();
        FadeEdge::new(Edge::Left, 3, 0.0).apply(&mut buffer, Rect::new(0, 0, 4, 1), Rgb::BLACK);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_fade_wider_than_row() {
        let mut buffer = Buffer::new(2, 1);
        FadeEdge::new(Edge::Left, 5, 1.0).apply(&mut buffer, Rect::new(0, 0, 2, 1), Rgb::BLACK);
        assert_eq!(buffer.width(), 2);
    }
}
