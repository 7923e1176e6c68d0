//! Native window decoration
//!
//! The title bar and other OS chrome carry their own color scheme, set
//! independently of in-app styling. Requests are fire-and-forget: the
//! outcome arrives through a completion callback, possibly on another thread
//! and possibly after the caller has moved on.

use crate::error::{PlatformError, Result};
use std::sync::Mutex;

/// Explicit decoration theme; `None` at the call site means "follow the OS"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowTheme {
    Light,
    Dark,
}

impl WindowTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowTheme::Light => "light",
            WindowTheme::Dark => "dark",
        }
    }
}

/// Completion callback for a decoration request
pub type DecorationCallback = Box<dyn FnOnce(Result<()>) + Send>;

/// Native window chrome that can be themed
pub trait WindowDecoration: Send + Sync {
    /// Request a decoration theme without blocking
    ///
    /// `None` clears any explicit override so the window follows the OS.
    /// `done` is invoked exactly once with the outcome.
    fn set_theme(&self, theme: Option<WindowTheme>, done: DecorationCallback);
}

#[derive(Default)]
struct HeadlessState {
    requests: Vec<Option<WindowTheme>>,
    failure: Option<PlatformError>,
    deferred: bool,
    pending: Vec<DecorationCallback>,
}

/// Window decoration for runs without a native window
///
/// Records every request. Can be configured to fail or to hold completions
/// until [`HeadlessWindow::complete_pending`] is called, which mirrors a
/// native call resolving on a later event-loop turn.
#[derive(Default)]
pub struct HeadlessWindow {
    state: Mutex<HeadlessState>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold completions until `complete_pending` is called
    pub fn deferred() -> Self {
        let window = Self::default();
        window.state.lock().unwrap().deferred = true;
        window
    }

    /// Make every subsequent request fail with `error`
    pub fn fail_with(&self, error: PlatformError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    /// Let subsequent requests succeed again
    pub fn clear_failure(&self) {
        self.state.lock().unwrap().failure = None;
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<Option<WindowTheme>> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<Option<WindowTheme>> {
        self.state.lock().unwrap().requests.last().copied()
    }

    /// Number of completions still held back
    pub fn pending_count(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    /// Resolve every held completion, in request order
    ///
    /// Returns the number of completions delivered.
    pub fn complete_pending(&self) -> usize {
        let (pending, failure) = {
            let mut state = self.state.lock().unwrap();
            (std::mem::take(&mut state.pending), state.failure.clone())
        };
        let count = pending.len();
        for done in pending {
            done(outcome(&failure));
        }
        count
    }
}

fn outcome(failure: &Option<PlatformError>) -> Result<()> {
    match failure {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

impl WindowDecoration for HeadlessWindow {
    fn set_theme(&self, theme: Option<WindowTheme>, done: DecorationCallback) {
        let failure = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(theme);
            if state.deferred {
                state.pending.push(done);
                return;
            }
            state.failure.clone()
        };
        // Invoked without the lock so the callback may issue new requests
        done(outcome(&failure));
    }
}
