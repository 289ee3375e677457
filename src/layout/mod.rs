//! Layout module: Rectangles and container width rules.
//!
//! Parents decide where a widget lives; widgets only read the
//! rectangle they are given.

mod container;
mod rect;

pub use container::ContainerWidth;
pub use rect::Rect;
