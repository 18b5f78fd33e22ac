//! Shortcut listener registry.
//!
//! The global keydown listener is modeled as an explicitly owned resource:
//! registration hands back a [`ListenerGuard`] that deregisters on drop, so
//! a surface that unmounts cannot leak its handler into the registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use vigil_core::config::KeyChord;

type KeyHandler = Box<dyn Fn(KeyChord) + Send + Sync>;

#[derive(Default)]
struct RegistryInner {
    listeners: Mutex<HashMap<u64, KeyHandler>>,
    next_id: AtomicU64,
}

/// Dispatches key chords to registered listeners.
///
/// One registry instance stands in for the host document's keydown stream;
/// every mounted surface registers against it and releases its slot on
/// teardown.
#[derive(Clone, Default)]
pub struct ShortcutRegistry {
    inner: Arc<RegistryInner>,
}

impl ShortcutRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for every dispatched chord.
    ///
    /// The handler stays registered exactly as long as the returned guard
    /// is alive.
    pub fn register(&self, handler: impl Fn(KeyChord) + Send + Sync + 'static) -> ListenerGuard {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .expect("shortcut registry lock poisoned")
            .insert(id, Box::new(handler));
        ListenerGuard {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers a chord to every live listener.
    pub fn dispatch(&self, chord: KeyChord) {
        let listeners = self
            .inner
            .listeners
            .lock()
            .expect("shortcut registry lock poisoned");
        for handler in listeners.values() {
            handler(chord);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .expect("shortcut registry lock poisoned")
            .len()
    }
}

/// Scoped ownership of one registered listener.
///
/// Dropping the guard removes the handler from the registry.
pub struct ListenerGuard {
    registry: Weak<RegistryInner>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut listeners) = inner.listeners.lock() {
                listeners.remove(&self.id);
            }
        }
    }
}
