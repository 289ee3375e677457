//! Viewport resize broadcasting.
//!
//! The terminal window is process-wide state. Widgets that depend on it
//! hold a [`ResizeSubscription`] while they are mounted; dropping the
//! subscription unregisters it, so no notification reaches a widget after
//! it has been released.
//!
//! ```text
//! InputEvent::Resize ──▶ ResizeHub::broadcast ──▶ subscription 1 (queue)
//!                                             └─▶ subscription 2 (queue)
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Size of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Viewport {
    /// Create a new viewport size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    senders: HashMap<u64, Sender<Viewport>>,
    last: Option<Viewport>,
}

type Shared = Arc<Mutex<Listeners>>;

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    // A panic while holding the lock cannot leave the map inconsistent
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcasts viewport resizes to every live subscription.
///
/// Cloning the hub shares the same listener set.
#[derive(Debug, Clone, Default)]
pub struct ResizeHub {
    inner: Shared,
}

impl ResizeHub {
    /// Create a hub with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener.
    pub fn subscribe(&self) -> ResizeSubscription {
        let (tx, rx) = unbounded();
        let mut listeners = lock(&self.inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.senders.insert(id, tx);
        tracing::trace!(id, listeners = listeners.senders.len(), "resize listener attached");

        ResizeSubscription {
            id,
            rx,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a resize to every listener.
    ///
    /// Returns how many listeners received it.
    pub fn broadcast(&self, viewport: Viewport) -> usize {
        let mut listeners = lock(&self.inner);
        listeners.last = Some(viewport);
        listeners.senders.retain(|_, tx| tx.send(viewport).is_ok());
        let delivered = listeners.senders.len();
        tracing::trace!(
            width = viewport.width,
            height = viewport.height,
            delivered,
            "viewport resize broadcast"
        );
        delivered
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).senders.len()
    }

    /// The most recently broadcast viewport, if any.
    pub fn last(&self) -> Option<Viewport> {
        lock(&self.inner).last
    }
}

/// A live registration with a [`ResizeHub`].
///
/// Unregisters itself when dropped. Holds only a weak reference to the hub,
/// so it never keeps the hub alive.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    rx: Receiver<Viewport>,
    hub: Weak<Mutex<Listeners>>,
}

impl ResizeSubscription {
    /// Identifier assigned by the hub.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Take every pending notification, returning the latest one.
    pub fn drain(&self) -> Option<Viewport> {
        self.rx.try_iter().last()
    }

    /// Whether any notification is waiting.
    pub fn is_pending(&self) -> bool {
        !self.rx.is_empty()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            let mut listeners = lock(&inner);
            listeners.senders.remove(&self.id);
            tracing::trace!(id = self.id, "resize listener released");
        }
    }
}
