//! The `Widget` trait shared by every UI component.

use crate::buffer::Buffer;
use crate::layout::Rect;
use std::time::Duration;

/// A UI component that draws itself into a buffer.
///
/// Parents own layout: they assign bounds through [`Widget::set_bounds`]
/// and the widget only reads them. Animated widgets advance on
/// [`Widget::tick`]; the host never asks a widget to run its own timer.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given buffer.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Advance animations by `delta`.
    ///
    /// Returns `true` if the widget's appearance changed.
    fn tick(&mut self, _delta: Duration) -> bool {
        false
    }

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
