//! OS dark-mode signal
//!
//! A [`SchemeSource`] answers "is the OS in dark mode right now" and pushes
//! change notifications to subscribed listeners. Two sources ship with the
//! crate: [`ManualSchemeSource`], fed by the embedder (for example from a
//! windowing library's theme-changed event), and, behind the `watcher`
//! feature, a polling `SystemSchemeWatcher`.

use crate::scheme::ColorScheme;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Callback invoked with the new OS scheme
pub type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Handle identifying a registered listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Live OS color scheme with change notifications
pub trait SchemeSource: Send + Sync {
    /// Query the current OS scheme synchronously
    fn current(&self) -> ColorScheme;

    /// Register a listener for scheme changes
    fn subscribe(&self, listener: SchemeListener) -> ListenerId;

    /// Remove a listener; unknown ids are ignored
    fn unsubscribe(&self, id: ListenerId);
}

/// Detect the system color scheme
///
/// Falls back to light when the OS gives no answer.
pub fn detect_system_color_scheme() -> ColorScheme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ColorScheme::Dark,
        Ok(_) => ColorScheme::Light,
        Err(err) => {
            tracing::debug!("System color scheme detection failed, assuming light: {}", err);
            ColorScheme::Light
        }
    }
}

/// Listener registry shared by the bundled sources
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<Vec<(ListenerId, SchemeListener)>>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: SchemeListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().unwrap().push((id, listener));
        id
    }

    /// Returns the number of listeners left
    pub(crate) fn remove(&self, id: ListenerId) -> usize {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|(existing, _)| *existing != id);
        entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Invoke every listener outside the registry lock
    pub(crate) fn notify(&self, scheme: ColorScheme) {
        let snapshot: Vec<SchemeListener> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(scheme);
        }
    }
}

/// Scheme source driven by explicit updates
pub struct ManualSchemeSource {
    scheme: Mutex<ColorScheme>,
    listeners: Listeners,
}

impl ManualSchemeSource {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: Mutex::new(initial),
            listeners: Listeners::default(),
        }
    }

    /// Seed with whatever the OS reports right now
    pub fn from_system() -> Self {
        Self::new(detect_system_color_scheme())
    }

    /// Update the scheme, notifying listeners if it changed
    pub fn set(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.lock().unwrap();
            if *current == scheme {
                return;
            }
            *current = scheme;
        }
        tracing::debug!(scheme = %scheme, "system color scheme changed");
        self.listeners.notify(scheme);
    }

    /// Update the value without notifying anyone
    ///
    /// Models the OS flipping between a notification and a later query.
    pub fn set_silently(&self, scheme: ColorScheme) {
        *self.scheme.lock().unwrap() = scheme;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ManualSchemeSource {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl SchemeSource for ManualSchemeSource {
    fn current(&self) -> ColorScheme {
        *self.scheme.lock().unwrap()
    }

    fn subscribe(&self, listener: SchemeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}
