//! Polling watcher for the system color scheme
//!
//! Most desktop platforms do not expose a portable change notification for
//! the dark-mode setting, so the watcher re-queries the OS on a background
//! thread and notifies listeners when the answer changes. The thread only
//! runs while somebody is listening.

use crate::scheme::ColorScheme;
use crate::system::{
    detect_system_color_scheme, ListenerId, Listeners, SchemeListener, SchemeSource,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Function used to query the OS scheme
pub type SchemeProbe = Arc<dyn Fn() -> ColorScheme + Send + Sync>;

/// Watcher configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Delay between two OS queries
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
        }
    }
}

struct PollThread {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

struct WatcherInner {
    config: WatcherConfig,
    probe: SchemeProbe,
    listeners: Listeners,
}

/// Scheme source that polls the OS for dark-mode changes
pub struct SystemSchemeWatcher {
    inner: Arc<WatcherInner>,
    thread: Mutex<Option<PollThread>>,
}

impl SystemSchemeWatcher {
    /// Watch the real OS setting
    pub fn new(config: WatcherConfig) -> Self {
        Self::with_probe(config, Arc::new(detect_system_color_scheme))
    }

    /// Watch an arbitrary probe
    pub fn with_probe(config: WatcherConfig, probe: SchemeProbe) -> Self {
        Self {
            inner: Arc::new(WatcherInner {
                config,
                probe,
                listeners: Listeners::default(),
            }),
            thread: Mutex::new(None),
        }
    }

    /// Whether the polling thread is currently running
    pub fn is_polling(&self) -> bool {
        self.thread.lock().unwrap().is_some()
    }

    /// Spawn the poll thread; called with the `thread` slot locked
    fn spawn(&self) -> Option<PollThread> {
        let stop = Arc::new(AtomicBool::new(false));
        let inner = self.inner.clone();
        let thread_stop = stop.clone();
        let baseline = (self.inner.probe)();
        let spawned = thread::Builder::new()
            .name("scheme-watcher".into())
            .spawn(move || poll_loop(&inner, &thread_stop, baseline));

        match spawned {
            Ok(handle) => {
                tracing::debug!(
                    interval_ms = self.inner.config.poll_interval.as_millis() as u64,
                    "started system scheme watcher"
                );
                Some(PollThread { stop, handle })
            }
            Err(err) => {
                tracing::warn!("Failed to start system scheme watcher: {}", err);
                None
            }
        }
    }
}

impl PollThread {
    /// Signal the thread and wait for it; must run without the slot locked
    fn shutdown(self) {
        self.stop.store(true, Ordering::SeqCst);
        self.handle.thread().unpark();

        // A listener running on the poll thread may be the one unsubscribing
        if self.handle.thread().id() != thread::current().id() && self.handle.join().is_err() {
            tracing::warn!("System scheme watcher thread panicked");
        }
        tracing::debug!("stopped system scheme watcher");
    }
}

fn poll_loop(inner: &WatcherInner, stop: &AtomicBool, baseline: ColorScheme) {
    let mut last = baseline;
    loop {
        thread::park_timeout(inner.config.poll_interval);
        if stop.load(Ordering::SeqCst) {
            return;
        }

        let scheme = (inner.probe)();
        tracing::trace!(scheme = %scheme, "polled system color scheme");
        if scheme != last {
            last = scheme;
            inner.listeners.notify(scheme);
        }
    }
}

impl SchemeSource for SystemSchemeWatcher {
    fn current(&self) -> ColorScheme {
        (self.inner.probe)()
    }

    fn subscribe(&self, listener: SchemeListener) -> ListenerId {
        // Listener count and thread state change together under the slot lock
        let mut slot = self.thread.lock().unwrap();
        let id = self.inner.listeners.add(listener);
        if slot.is_none() {
            *slot = self.spawn();
        }
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let finished = {
            let mut slot = self.thread.lock().unwrap();
            if self.inner.listeners.remove(id) == 0 {
                slot.take()
            } else {
                None
            }
        };
        if let Some(poll) = finished {
            poll.shutdown();
        }
    }
}

impl Drop for SystemSchemeWatcher {
    fn drop(&mut self) {
        let finished = self.thread.lock().unwrap().take();
        if let Some(poll) = finished {
            poll.shutdown();
        }
    }
}
