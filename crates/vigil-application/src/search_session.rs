//! Search session state machine.
//!
//! The command palette toggles between closed and open via a keyboard
//! chord delivered through the [`ShortcutRegistry`]. While open, every
//! query change re-filters the record set synchronously; the dataset is
//! tiny and in-memory, so there is no debounce.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use vigil_core::config::KeyChord;
use vigil_core::search::{ResultGroup, SearchRecord, builtin_records, grouped_results};

use crate::shortcut::{ListenerGuard, ShortcutRegistry};

#[derive(Default)]
struct SearchState {
    open: AtomicBool,
    query: RwLock<String>,
}

impl SearchState {
    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
        // Query resets on the open -> closed transition.
        self.query
            .write()
            .expect("search query lock poisoned")
            .clear();
    }

    fn toggle(&self) {
        if self.open.load(Ordering::SeqCst) {
            self.close();
        } else {
            self.open.store(true, Ordering::SeqCst);
        }
    }
}

/// An in-memory search palette bound to one host surface.
///
/// Mounting registers the chord listener; dropping the session releases it,
/// so repeated mount/unmount cycles leave no handlers behind.
pub struct SearchSession {
    state: Arc<SearchState>,
    records: Vec<SearchRecord>,
    chord: KeyChord,
    _listener: ListenerGuard,
}

impl SearchSession {
    /// Mounts a palette over the built-in record set.
    pub fn mount(registry: &ShortcutRegistry, chord: KeyChord) -> Self {
        Self::mount_with_records(registry, chord, builtin_records().to_vec())
    }

    /// Mounts a palette over a caller-supplied record set.
    pub fn mount_with_records(
        registry: &ShortcutRegistry,
        chord: KeyChord,
        records: Vec<SearchRecord>,
    ) -> Self {
        let state = Arc::new(SearchState::default());
        let weak: Weak<SearchState> = Arc::downgrade(&state);
        let listener = registry.register(move |pressed| {
            if pressed == chord {
                if let Some(state) = weak.upgrade() {
                    state.toggle();
                }
            }
        });
        tracing::debug!(?chord, "search session mounted");
        Self {
            state,
            records,
            chord,
            _listener: listener,
        }
    }

    /// The chord this palette toggles on.
    pub fn chord(&self) -> KeyChord {
        self.chord
    }

    /// Whether the palette is currently open.
    pub fn is_open(&self) -> bool {
        self.state.open.load(Ordering::SeqCst)
    }

    /// Opens the palette explicitly.
    pub fn open(&self) {
        self.state.open.store(true, Ordering::SeqCst);
    }

    /// Closes the palette and resets the query.
    ///
    /// Used for explicit close requests: selecting a result, escape, or a
    /// click outside the palette.
    pub fn close(&self) {
        self.state.close();
    }

    /// Updates the query string. Ignored while the palette is closed; the
    /// matcher only runs against an open palette.
    pub fn set_query(&self, query: &str) {
        if !self.is_open() {
            return;
        }
        *self.state.query.write().expect("search query lock poisoned") = query.to_string();
    }

    /// Current query string.
    pub fn query(&self) -> String {
        self.state
            .query
            .read()
            .expect("search query lock poisoned")
            .clone()
    }

    /// Matches the current query against the record set.
    ///
    /// Returns nothing while closed, and nothing for an empty query; the
    /// host renders placeholder suggestions in both cases.
    pub fn grouped_results(&self) -> Vec<ResultGroup> {
        if !self.is_open() {
            return Vec::new();
        }
        grouped_results(&self.query(), &self.records)
    }
}
