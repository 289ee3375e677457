//! Ticker Actor: Dedicated thread that drives animations.
//!
//! Widgets never own timers. The ticker emits a [`Tick`] at a fixed
//! interval and the main loop forwards each tick's `delta` to the widgets
//! that animate.

use super::messages::Tick;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Ticker actor that generates regular timing events.
#[derive(Debug)]
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a new ticker with the given interval (e.g. 16ms for ~60 FPS).
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        // Small buffer: a slow consumer skips ticks instead of queueing them
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("marquee-ticker".to_string())
            .spawn(move || Self::run_loop(&tick_tx, &shutdown_clone, interval))?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Get a reference to the tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut last_sent = start;
        let mut next_tick = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now < next_tick {
                thread::sleep((next_tick - now).min(Duration::from_millis(1)));
                continue;
            }

            let tick = Tick {
                frame,
                elapsed: now - start,
                delta: now - last_sent,
            };

            match tick_tx.try_send(tick) {
                Ok(()) => {
                    last_sent = now;
                    frame += 1;
                }
                // Dropped ticks fold into the next delivered delta
                Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => break,
            }

            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_basic() {
        let ticker = TickerActor::spawn(Duration::from_millis(10)).unwrap();

        let tick = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(500))
            .unwrap();
        assert_eq!(tick.frame, 0);
        assert!(tick.delta >= Duration::from_millis(10));

        let tick2 = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(500))
            .unwrap();
        assert_eq!(tick2.frame, 1);
        assert!(tick2.elapsed > tick.elapsed);

        ticker.join();
    }

    #[test]
    fn test_ticker_shutdown() {
        let ticker = TickerActor::spawn(Duration::from_millis(100)).unwrap();
        ticker.shutdown();
        thread::sleep(Duration::from_millis(20));
        ticker.join();
    }
}
