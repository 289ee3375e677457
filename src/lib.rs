//! # Marquee
//!
//! Overflow-aware scrolling text labels for true-color terminal UIs.
//!
//! A [`ScrollingText`] measures its text against the width of the
//! container its parent gives it. Text that fits is drawn once, still and
//! left-aligned. Text that does not fit is laid out twice and scrolls left
//! in an endless loop, with soft fades at the clipped edges.
//!
//! ## Core Concepts
//!
//! - **Measurement**: a pure function of text width, container width and
//!   config, recomputed on mount, text change, layout change and resize
//! - **Scoped resize subscriptions**: widgets hear about viewport resizes
//!   only while mounted; dropping the subscription unregisters it
//! - **Host-driven animation**: the ticker actor advances widgets, widgets
//!   never own timers
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee::{Engine, Rect, ScrollingText, Widget};
//!
//! let mut engine = Engine::new()?;
//! let mut label = ScrollingText::new("Tell That Mick He Just Made My List of Things to Do Today");
//! label.set_bounds(Rect::new(0, 0, engine.width() / 2, 1));
//! label.mount(engine.resize_hub());
//! label.render(engine.buffer_mut());
//! engine.present()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod engine;
pub mod error;
pub mod layout;
pub mod terminal;
pub mod viewport;
pub mod widget;

// Re-exports for convenience
pub use actor::{InputActor, InputEvent, KeyCode, KeyModifiers, Tick, TickerActor};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use engine::{Engine, EngineConfig};
pub use error::{Error, Result};
pub use layout::{ContainerWidth, Rect};
pub use viewport::{ResizeHub, ResizeSubscription, Viewport};
pub use widget::{MarqueeConfig, Measurement, ScrollParams, ScrollingText, Widget};
