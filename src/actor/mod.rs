//! Actor Model: Background threads that feed the main loop.
//!
//! - **Input Actor**: Polls terminal events (keys, resizes)
//! - **Ticker Actor**: Emits frame ticks that advance animations
//! - **Main Loop**: Owns the widgets, forwards resizes and ticks to them
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │  Main Loop   │
//! ┌──────────────┐        Tick         │              │
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod input;
mod messages;
mod ticker;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, Tick};
pub use ticker::TickerActor;
