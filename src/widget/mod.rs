//! Widgets: components that draw into a [`Buffer`](crate::buffer::Buffer).
//!
//! The only widget shipped here is [`ScrollingText`], a one-line label that
//! turns into a marquee when its text does not fit.

pub mod marquee;
mod traits;

pub use marquee::{MarqueeConfig, Measurement, ScrollParams, ScrollingText};
pub use traits::Widget;
