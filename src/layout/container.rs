//! Container widths: how a parent sizes the box a widget lives in.

use super::rect::Rect;

/// Width rule for a container placed inside a parent rectangle.
///
/// The resulting container is horizontally centered within the parent and
/// never wider than it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ContainerWidth {
    /// Take the parent's full width.
    #[default]
    Full,
    /// Take `num / den` of the parent's width.
    Fraction {
        /// Numerator.
        num: u16,
        /// Denominator (0 is treated as full width).
        den: u16,
    },
    /// Take the parent's width, capped at this many columns.
    Max(u16),
    /// Take exactly this many columns (clamped to the parent).
    Fixed(u16),
}

impl ContainerWidth {
    /// Half of the parent.
    pub const HALF: Self = Self::Fraction { num: 1, den: 2 };
    /// Three quarters of the parent.
    pub const THREE_QUARTERS: Self = Self::Fraction { num: 3, den: 4 };

    /// Resolve the container width for a parent of `parent_width` columns.
    pub fn resolve(self, parent_width: u16) -> u16 {
        match self {
            Self::Full | Self::Fraction { den: 0, .. } => parent_width,
            Self::Fraction { num, den } => {
                let scaled = u32::from(parent_width) * u32::from(num) / u32::from(den);
                u16::try_from(scaled).unwrap_or(u16::MAX).min(parent_width)
            }
            Self::Max(max) | Self::Fixed(max) => max.min(parent_width),
        }
    }

    /// Place a container inside `parent`, centered horizontally.
    pub fn apply(self, parent: Rect) -> Rect {
        let width = self.resolve(parent.width);
        let x = parent.x + (parent.width - width) / 2;
        Rect::new(x, parent.y, width, parent.height)
    }
}
