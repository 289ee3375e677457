//! Terminal host: session lifecycle and frame presentation.

mod present;
mod session;

pub use present::{FrameStats, Presenter};
pub use session::TerminalSession;
