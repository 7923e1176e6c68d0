//! Theme store
//!
//! [`ThemeStore`] owns the user's [`ThemeMode`] and the [`ColorScheme`] it
//! resolves to. It is an explicitly constructed handle rather than a global:
//! whoever builds it hands it to the UI scopes that need it, and disposing
//! it (or dropping the last clone) releases the OS-signal subscription.
//!
//! Every change of mode or resolved scheme is pushed out in a fixed order:
//!
//! 1. display root (`data-theme`, `color-scheme`, `dark` class)
//! 2. preference storage (the raw mode, never the resolved scheme)
//! 3. native window decoration (fire-and-forget)
//!
//! so visible styling is never behind what was persisted or sent to the
//! window. None of these steps can fail the caller; errors are logged.

use crate::scheme::{ColorScheme, ThemeMode};
use crate::storage::{MemoryStorage, PreferenceStorage, THEME_STORAGE_KEY};
use crate::system::{ListenerId, ManualSchemeSource, SchemeSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use workbench_platform::{DisplayRoot, DocumentRoot, HeadlessWindow, WindowDecoration};

/// Display root attribute carrying the resolved scheme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Style property hinting native form controls and scrollbars
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Class present on the display root while dark
pub const DARK_CLASS: &str = "dark";

/// Notification sent to observers after a change has been propagated
///
/// `scheme` is the scheme in effect once propagation finished, so the last
/// notification an observer receives always matches [`ThemeStore::resolved`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub mode: ThemeMode,
    pub scheme: ColorScheme,
    pub previous_mode: ThemeMode,
    pub previous_scheme: ColorScheme,
}

impl ThemeChange {
    /// Whether the applied scheme actually flipped
    pub fn scheme_changed(&self) -> bool {
        self.scheme != self.previous_scheme
    }
}

/// Observer callback
pub type ThemeObserver = Arc<dyn Fn(&ThemeChange) + Send + Sync>;

/// Handle identifying a registered observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct StoreState {
    mode: ThemeMode,
    scheme: ColorScheme,
    /// Source subscription, present exactly while `mode` is `System`
    subscription: Option<ListenerId>,
    /// Bumped on every mode change; stale callbacks compare against it
    generation: u64,
    disposed: bool,
}

struct Inner {
    storage: Arc<dyn PreferenceStorage>,
    storage_key: String,
    source: Arc<dyn SchemeSource>,
    display: Arc<dyn DisplayRoot>,
    window: Arc<dyn WindowDecoration>,
    state: Mutex<StoreState>,
    observers: Mutex<Vec<(ObserverId, ThemeObserver)>>,
    next_observer: AtomicU64,
}

/// Theme preference store
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

/// Builder for [`ThemeStore`]
///
/// Unset collaborators default to in-memory storage, a scheme source seeded
/// from the OS, an in-memory display root and a headless window.
#[derive(Default)]
pub struct ThemeStoreBuilder {
    storage: Option<Arc<dyn PreferenceStorage>>,
    storage_key: Option<String>,
    source: Option<Arc<dyn SchemeSource>>,
    display: Option<Arc<dyn DisplayRoot>>,
    window: Option<Arc<dyn WindowDecoration>>,
}

impl ThemeStoreBuilder {
    pub fn storage(mut self, storage: Arc<dyn PreferenceStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn source(mut self, source: Arc<dyn SchemeSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn display(mut self, display: Arc<dyn DisplayRoot>) -> Self {
        self.display = Some(display);
        self
    }

    pub fn window(mut self, window: Arc<dyn WindowDecoration>) -> Self {
        self.window = Some(window);
        self
    }

    /// Read the stored preference, resolve it and apply it once
    pub fn build(self) -> ThemeStore {
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| THEME_STORAGE_KEY.to_string());
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(ManualSchemeSource::from_system()));

        let mode = stored_mode(storage.as_ref(), &storage_key);
        let inner = Arc::new(Inner {
            storage,
            storage_key,
            source,
            display: self
                .display
                .unwrap_or_else(|| Arc::new(DocumentRoot::new())),
            window: self
                .window
                .unwrap_or_else(|| Arc::new(HeadlessWindow::new())),
            state: Mutex::new(StoreState {
                mode,
                scheme: ColorScheme::Light,
                subscription: None,
                generation: 0,
                disposed: false,
            }),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
        });

        let scheme = inner.enter_mode(mode, 0);
        inner.store_scheme(0, scheme);
        tracing::debug!(mode = %mode, scheme = %scheme, "theme store initialized");
        inner.propagate(mode, scheme, 0);

        ThemeStore { inner }
    }
}

/// Read the persisted mode, falling back to light on absence or corruption
///
/// Never writes; building a [`ThemeStore`] is what normalizes the stored
/// value.
pub fn stored_mode(storage: &dyn PreferenceStorage, key: &str) -> ThemeMode {
    match storage.get(key) {
        Ok(Some(value)) => ThemeMode::from_stored(&value).unwrap_or_else(|| {
            tracing::warn!("Ignoring invalid stored theme '{}', using light", value);
            ThemeMode::default()
        }),
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            tracing::warn!("Failed to read stored theme, using light: {}", err);
            ThemeMode::default()
        }
    }
}

impl ThemeStore {
    pub fn builder() -> ThemeStoreBuilder {
        ThemeStoreBuilder::default()
    }

    /// Build a store from explicit collaborators
    pub fn new(
        storage: Arc<dyn PreferenceStorage>,
        source: Arc<dyn SchemeSource>,
        display: Arc<dyn DisplayRoot>,
        window: Arc<dyn WindowDecoration>,
    ) -> Self {
        Self::builder()
            .storage(storage)
            .source(source)
            .display(display)
            .window(window)
            .build()
    }

    /// Current user preference
    pub fn mode(&self) -> ThemeMode {
        self.inner.state.lock().unwrap().mode
    }

    /// Scheme currently applied to the UI
    pub fn resolved(&self) -> ColorScheme {
        self.inner.state.lock().unwrap().scheme
    }

    /// Preference and resolved scheme read together
    pub fn snapshot(&self) -> (ThemeMode, ColorScheme) {
        let state = self.inner.state.lock().unwrap();
        (state.mode, state.scheme)
    }

    /// Whether the store currently follows the OS signal
    pub fn is_following_system(&self) -> bool {
        self.inner.state.lock().unwrap().subscription.is_some()
    }

    /// Replace the preference
    ///
    /// Setting the mode already in effect does nothing.
    pub fn set_mode(&self, mode: ThemeMode) {
        let (previous_mode, previous_scheme, generation, stale) = {
            let mut state = self.inner.state.lock().unwrap();
            if state.disposed {
                tracing::debug!(mode = %mode, "ignoring set_mode on disposed theme store");
                return;
            }
            if state.mode == mode {
                return;
            }
            let previous_mode = std::mem::replace(&mut state.mode, mode);
            state.generation += 1;
            (
                previous_mode,
                state.scheme,
                state.generation,
                state.subscription.take(),
            )
        };

        if let Some(id) = stale {
            self.inner.source.unsubscribe(id);
        }

        let scheme = self.inner.enter_mode(mode, generation);
        if !self.inner.store_scheme(generation, scheme) {
            return;
        }

        tracing::debug!(
            "theme mode {} -> {} (scheme {} -> {})",
            previous_mode,
            mode,
            previous_scheme,
            scheme
        );
        self.inner.propagate(mode, scheme, generation);

        // A synchronous window completion may already have re-resolved
        let Some(scheme) = self.inner.settled_scheme(generation) else {
            return;
        };
        self.inner.notify(ThemeChange {
            mode,
            scheme,
            previous_mode,
            previous_scheme,
        });
    }

    /// Flip between light and dark
    ///
    /// While following the OS this pins the scheme opposite to the one on
    /// screen, so toggling always produces a visible change.
    pub fn toggle(&self) -> ThemeMode {
        let (mode, scheme) = self.snapshot();
        let next = match mode {
            ThemeMode::System => ThemeMode::pinned(scheme.toggle()),
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
        next
    }

    /// Register an observer for theme changes
    pub fn subscribe(
        &self,
        observer: impl Fn(&ThemeChange) + Send + Sync + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.inner.next_observer.fetch_add(1, Ordering::Relaxed));
        let observer: ThemeObserver = Arc::new(observer);
        self.inner.observers.lock().unwrap().push((id, observer));
        id
    }

    /// Remove an observer; unknown ids are ignored
    pub fn unsubscribe(&self, id: ObserverId) {
        self.inner
            .observers
            .lock()
            .unwrap()
            .retain(|(existing, _)| *existing != id);
    }

    /// Release the OS-signal subscription and all observers
    ///
    /// The store keeps answering queries but ignores further changes.
    pub fn dispose(&self) {
        let subscription = {
            let mut state = self.inner.state.lock().unwrap();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.generation += 1;
            state.subscription.take()
        };
        if let Some(id) = subscription {
            self.inner.source.unsubscribe(id);
        }
        self.inner.observers.lock().unwrap().clear();
        tracing::debug!("theme store disposed");
    }
}

impl Inner {
    /// Subscribe to the OS signal when entering `System` and resolve the mode
    fn enter_mode(self: &Arc<Self>, mode: ThemeMode, generation: u64) -> ColorScheme {
        if !mode.is_system() {
            return mode.resolve(ColorScheme::Light);
        }

        let weak: Weak<Inner> = Arc::downgrade(self);
        let id = self.source.subscribe(Arc::new(move |scheme: ColorScheme| {
            if let Some(inner) = weak.upgrade() {
                inner.on_system_scheme(generation, scheme);
            }
        }));

        let keep = {
            let mut state = self.state.lock().unwrap();
            if state.generation == generation && !state.disposed {
                state.subscription = Some(id);
                true
            } else {
                false
            }
        };
        if !keep {
            self.source.unsubscribe(id);
        }

        self.source.current()
    }

    /// Record the resolved scheme unless a newer mode change superseded it
    fn store_scheme(&self, generation: u64, scheme: ColorScheme) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.generation != generation || state.disposed {
            return false;
        }
        state.scheme = scheme;
        true
    }

    /// OS scheme reported while following the system
    fn on_system_scheme(self: &Arc<Self>, generation: u64, scheme: ColorScheme) {
        let (mode, previous_scheme) = {
            let mut state = self.state.lock().unwrap();
            if state.disposed || state.generation != generation || !state.mode.is_system() {
                tracing::trace!(scheme = %scheme, "ignoring stale system scheme notification");
                return;
            }
            if state.scheme == scheme {
                return;
            }
            let previous = state.scheme;
            state.scheme = scheme;
            (state.mode, previous)
        };

        tracing::debug!("system scheme {} -> {}", previous_scheme, scheme);
        self.propagate(mode, scheme, generation);

        let Some(scheme) = self.settled_scheme(generation) else {
            return;
        };
        self.notify(ThemeChange {
            mode,
            scheme,
            previous_mode: mode,
            previous_scheme,
        });
    }

    /// Scheme in effect after propagation, `None` once superseded
    fn settled_scheme(&self, generation: u64) -> Option<ColorScheme> {
        let state = self.state.lock().unwrap();
        if state.disposed || state.generation != generation {
            return None;
        }
        Some(state.scheme)
    }

    /// Push the current state to display, storage and window, in that order
    fn propagate(self: &Arc<Self>, mode: ThemeMode, scheme: ColorScheme, generation: u64) {
        self.display.set_attribute(THEME_ATTRIBUTE, scheme.as_str());
        self.display
            .set_style_property(COLOR_SCHEME_PROPERTY, scheme.as_str());
        self.display.toggle_class(DARK_CLASS, scheme.is_dark());

        if let Err(err) = self.storage.set(&self.storage_key, mode.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", err);
        }

        match mode.window_theme() {
            Some(theme) => self.window.set_theme(
                Some(theme),
                Box::new(|result: workbench_platform::Result<()>| {
                    if let Err(err) = result {
                        tracing::warn!("Failed to set window theme: {}", err);
                    }
                }),
            ),
            None => {
                let weak = Arc::downgrade(self);
                self.window.set_theme(
                    None,
                    Box::new(move |result: workbench_platform::Result<()>| match result {
                        Ok(()) => {
                            if let Some(inner) = weak.upgrade() {
                                inner.reconcile(generation);
                            }
                        }
                        Err(err) => tracing::warn!("Failed to set window theme: {}", err),
                    }),
                );
            }
        }
    }

    /// Re-read the OS scheme once the window follows the OS natively
    fn reconcile(self: &Arc<Self>, generation: u64) {
        {
            let state = self.state.lock().unwrap();
            if state.disposed || state.generation != generation {
                return;
            }
        }
        let fresh = self.source.current();
        self.on_system_scheme(generation, fresh);
    }

    fn notify(&self, change: ThemeChange) {
        let observers: Vec<ThemeObserver> = self
            .observers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&change);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Ok(state) = self.state.get_mut() {
            if let Some(id) = state.subscription.take() {
                self.source.unsubscribe(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbench_platform::{PlatformError, WindowTheme};

    struct Fixture {
        storage: MemoryStorage,
        source: Arc<ManualSchemeSource>,
        display: Arc<DocumentRoot>,
        window: Arc<HeadlessWindow>,
    }

    impl Fixture {
        fn new(system: ColorScheme) -> Self {
            Self {
                storage: MemoryStorage::new(),
                source: Arc::new(ManualSchemeSource::new(system)),
                display: Arc::new(DocumentRoot::new()),
                window: Arc::new(HeadlessWindow::new()),
            }
        }

        fn store(&self) -> ThemeStore {
            ThemeStore::new(
                Arc::new(self.storage.clone()),
                self.source.clone(),
                self.display.clone(),
                self.window.clone(),
            )
        }
    }

    #[test]
    fn test_initial_state_is_applied() {
        let fixture = Fixture::new(ColorScheme::Dark);
        let store = fixture.store();

        assert_eq!(store.snapshot(), (ThemeMode::Light, ColorScheme::Light));
        assert_eq!(
            fixture.display.attribute(THEME_ATTRIBUTE).as_deref(),
            Some("light")
        );
        assert_eq!(
            fixture.display.style_property(COLOR_SCHEME_PROPERTY).as_deref(),
            Some("light")
        );
        assert!(!fixture.display.has_class(DARK_CLASS));
        assert_eq!(fixture.window.requests(), vec![Some(WindowTheme::Light)]);
        assert!(!store.is_following_system());
    }

    #[test]
    fn test_stored_system_resolves_against_source() {
        let fixture = Fixture::new(ColorScheme::Dark);
        fixture.storage.set(THEME_STORAGE_KEY, "system").unwrap();
        let store = fixture.store();

        assert_eq!(store.snapshot(), (ThemeMode::System, ColorScheme::Dark));
        assert!(store.is_following_system());
        assert_eq!(fixture.source.listener_count(), 1);
        assert!(fixture.display.has_class(DARK_CLASS));
        assert_eq!(fixture.window.last_request(), Some(None));
    }

    #[test]
    fn test_storage_read_error_falls_back_to_light() {
        struct Broken;
        impl PreferenceStorage for Broken {
            fn get(&self, _key: &str) -> crate::Result<Option<String>> {
                Err(crate::ThemeError::InvalidMode("unreadable".into()))
            }
            fn set(&self, _key: &str, _value: &str) -> crate::Result<()> {
                Err(crate::ThemeError::InvalidMode("unwritable".into()))
            }
        }

        let fixture = Fixture::new(ColorScheme::Dark);
        let store = ThemeStore::builder()
            .storage(Arc::new(Broken))
            .source(fixture.source.clone())
            .display(fixture.display.clone())
            .window(fixture.window.clone())
            .build();

        assert_eq!(store.mode(), ThemeMode::Light);
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.resolved(), ColorScheme::Dark);
        assert_eq!(
            fixture.display.attribute(THEME_ATTRIBUTE).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_mode_change_with_same_scheme_still_persists() {
        let fixture = Fixture::new(ColorScheme::Light);
        let store = fixture.store();

        store.set_mode(ThemeMode::System);
        assert_eq!(store.resolved(), ColorScheme::Light);
        assert_eq!(
            fixture.storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("system")
        );
    }

    #[test]
    fn test_observers_receive_changes() {
        let fixture = Fixture::new(ColorScheme::Light);
        let store = fixture.store();
        store.set_mode(ThemeMode::System);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = store.subscribe(move |change| sink.lock().unwrap().push(*change));

        fixture.source.set(ColorScheme::Dark);
        store.set_mode(ThemeMode::Light);

        let changes = seen.lock().unwrap().clone();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].mode, ThemeMode::System);
        assert_eq!(changes[0].scheme, ColorScheme::Dark);
        assert!(changes[0].scheme_changed());
        assert_eq!(changes[1].previous_mode, ThemeMode::System);
        assert_eq!(changes[1].scheme, ColorScheme::Light);

        store.unsubscribe(id);
        store.set_mode(ThemeMode::Dark);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_observer_may_call_back_into_store() {
        let fixture = Fixture::new(ColorScheme::Light);
        let store = fixture.store();

        let handle = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        store.subscribe(move |_| *sink.lock().unwrap() = Some(handle.resolved()));

        store.set_mode(ThemeMode::Dark);
        assert_eq!(*seen.lock().unwrap(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_entering_system_queries_source() {
        let fixture = Fixture::new(ColorScheme::Light);
        let store = fixture.store();

        // OS flipped without a notification reaching the store
        fixture.source.set_silently(ColorScheme::Dark);
        store.set_mode(ThemeMode::System);

        assert_eq!(store.resolved(), ColorScheme::Dark);
    }

    #[test]
    fn test_deferred_reconcile_adopts_fresh_value() {
        let fixture = Fixture::new(ColorScheme::Light);
        let window = Arc::new(HeadlessWindow::deferred());
        let store = ThemeStore::new(
            Arc::new(fixture.storage.clone()),
            fixture.source.clone(),
            fixture.display.clone(),
            window.clone(),
        );
        window.complete_pending();

        store.set_mode(ThemeMode::System);
        assert_eq!(store.resolved(), ColorScheme::Light);

        fixture.source.set_silently(ColorScheme::Dark);
        window.complete_pending();

        assert_eq!(store.resolved(), ColorScheme::Dark);
        assert_eq!(
            fixture.display.attribute(THEME_ATTRIBUTE).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_late_completion_after_mode_change_is_ignored() {
        let fixture = Fixture::new(ColorScheme::Light);
        let window = Arc::new(HeadlessWindow::deferred());
        let store = ThemeStore::new(
            Arc::new(fixture.storage.clone()),
            fixture.source.clone(),
            fixture.display.clone(),
            window.clone(),
        );

        store.set_mode(ThemeMode::System);
        store.set_mode(ThemeMode::Light);
        fixture.source.set_silently(ColorScheme::Dark);
        window.complete_pending();

        assert_eq!(store.snapshot(), (ThemeMode::Light, ColorScheme::Light));
    }

    #[test]
    fn test_window_failure_is_logged_not_raised() {
        let fixture = Fixture::new(ColorScheme::Dark);
        fixture
            .window
            .fail_with(PlatformError::WindowTheme("denied".into()));
        let store = fixture.store();

        store.set_mode(ThemeMode::System);
        assert_eq!(store.resolved(), ColorScheme::Dark);
        assert_eq!(
            fixture.display.attribute(THEME_ATTRIBUTE).as_deref(),
            Some("dark")
        );
    }

    /// Window that lets the OS flip before reporting completion
    struct FlippingWindow {
        source: Arc<ManualSchemeSource>,
        flip_to: ColorScheme,
    }

    impl WindowDecoration for FlippingWindow {
        fn set_theme(
            &self,
            theme: Option<WindowTheme>,
            done: workbench_platform::DecorationCallback,
        ) {
            if theme.is_none() {
                self.source.set_silently(self.flip_to);
            }
            done(Ok(()));
        }
    }

    #[test]
    fn test_last_notification_matches_resolved_after_sync_reconcile() {
        let source = Arc::new(ManualSchemeSource::new(ColorScheme::Light));
        let display = Arc::new(DocumentRoot::new());
        let store = ThemeStore::builder()
            .source(source.clone())
            .display(display.clone())
            .window(Arc::new(FlippingWindow {
                source: source.clone(),
                flip_to: ColorScheme::Dark,
            }))
            .build();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |change| sink.lock().unwrap().push(*change));

        store.set_mode(ThemeMode::System);

        let changes = seen.lock().unwrap().clone();
        let last = changes.last().copied().unwrap();
        assert_eq!(store.resolved(), ColorScheme::Dark);
        assert_eq!(last.scheme, store.resolved());
        assert_eq!(last.mode, ThemeMode::System);
        assert!(changes
            .iter()
            .all(|change| change.scheme == ColorScheme::Dark));
        assert_eq!(display.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_mode_does_not_write() {
        let storage = MemoryStorage::with_value(THEME_STORAGE_KEY, "blue");
        assert_eq!(stored_mode(&storage, THEME_STORAGE_KEY), ThemeMode::Light);
        assert_eq!(storage.write_count(), 0);
        assert_eq!(
            storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("blue")
        );
    }

    #[test]
    fn test_dispose_releases_subscription() {
        let fixture = Fixture::new(ColorScheme::Light);
        let store = fixture.store();
        store.set_mode(ThemeMode::System);
        assert_eq!(fixture.source.listener_count(), 1);

        store.dispose();
        assert_eq!(fixture.source.listener_count(), 0);

        fixture.source.set(ColorScheme::Dark);
        assert_eq!(store.resolved(), ColorScheme::Light);

        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let fixture = Fixture::new(ColorScheme::Light);
        fixture.storage.set(THEME_STORAGE_KEY, "system").unwrap();
        let store = fixture.store();
        let clone = store.clone();
        assert_eq!(fixture.source.listener_count(), 1);

        drop(store);
        assert_eq!(fixture.source.listener_count(), 1);

        drop(clone);
        assert_eq!(fixture.source.listener_count(), 0);
    }
}
