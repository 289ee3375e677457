//! Engine: Main coordinator that ties the host together.
//!
//! The engine owns the terminal session, the input and ticker actors, the
//! resize hub and the frame buffer. Applications draw widgets into
//! [`Engine::buffer_mut`] and call [`Engine::present`].

use crate::actor::{InputActor, InputEvent, Tick, TickerActor};
use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::terminal::{FrameStats, Presenter, TerminalSession};
use crate::viewport::{ResizeHub, Viewport};
use crossbeam_channel::{bounded, Receiver};
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Target frames per second for the animation ticker.
    pub target_fps: u32,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

impl EngineConfig {
    /// Interval between ticks.
    pub fn frame_interval(&self) -> Result<Duration> {
        if self.target_fps == 0 {
            return Err(Error::InvalidConfig {
                field: "target_fps",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Duration::from_secs(1) / self.target_fps)
    }
}

/// The main engine.
#[derive(Debug)]
pub struct Engine {
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Frame clock.
    ticker: TickerActor,
    /// Viewport resize broadcaster.
    resize_hub: ResizeHub,
    /// Application buffer.
    buffer: Buffer,
    /// Frame writer.
    presenter: Presenter,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Whether the engine is running.
    running: bool,
    /// Restores the terminal on drop; declared last so it drops last.
    _session: TerminalSession,
}

impl Engine {
    /// Create a new engine with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let frame_interval = config.frame_interval()?;
        let (width, height) = TerminalSession::size()?;
        let session = TerminalSession::enter(config.alternate_screen)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
        let ticker = TickerActor::spawn(frame_interval)?;

        tracing::info!(width, height, fps = config.target_fps, "engine started");

        Ok(Self {
            input_rx,
            input_actor: Some(input_actor),
            ticker,
            resize_hub: ResizeHub::new(),
            buffer: Buffer::new(width, height),
            presenter: Presenter::new(),
            width,
            height,
            running: true,
            _session: session,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the current viewport size.
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Get a mutable reference to the buffer.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Get the input receiver for event-driven loops.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Get the tick receiver for event-driven loops.
    pub const fn tick_receiver(&self) -> &Receiver<Tick> {
        self.ticker.receiver()
    }

    /// The hub widgets subscribe to for viewport resizes.
    pub const fn resize_hub(&self) -> &ResizeHub {
        &self.resize_hub
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Handle a resize event: resize the buffer, force a full redraw and
    /// notify every subscribed widget.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer.resize(width, height);
        self.presenter.invalidate();
        self.resize_hub.broadcast(Viewport::new(width, height));
    }

    /// Write the buffer to the terminal.
    pub fn present(&mut self) -> Result<FrameStats> {
        let mut stdout = io::stdout().lock();
        Ok(self.presenter.present(&self.buffer, &mut stdout)?)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.ticker.shutdown();
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        tracing::info!("engine stopped");
    }
}
