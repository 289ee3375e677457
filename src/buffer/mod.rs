//! Buffer module: Cell grid the widgets draw into.
//!
//! This module contains:
//! - [`Cell`]: One grapheme plus its colors and modifiers
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`]: True-color representation with linear blending
//! - [`Style`]: Colors and modifiers passed through to drawn text

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, CellFlags, Modifiers, Rgb, Style};
pub use buffer::Buffer;
