//! Display root abstraction
//!
//! The display root is the single element all in-app styling keys off:
//! attributes, inline style properties and class names set here cascade to
//! every component.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;

/// Global UI root that accepts styling updates
pub trait DisplayRoot: Send + Sync {
    /// Set an attribute on the root (e.g. `data-theme`)
    fn set_attribute(&self, name: &str, value: &str);

    /// Set an inline style property on the root (e.g. `color-scheme`)
    fn set_style_property(&self, name: &str, value: &str);

    /// Add or remove a class on the root
    fn toggle_class(&self, name: &str, enabled: bool);
}

#[derive(Default)]
struct DocumentState {
    attributes: FxHashMap<String, String>,
    style: FxHashMap<String, String>,
    classes: FxHashSet<String>,
}

/// In-memory display root
///
/// Backs headless runs and tests; a host embedding a real document forwards
/// the same calls to its root element instead.
#[derive(Default)]
pub struct DocumentRoot {
    state: Mutex<DocumentState>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.lock().unwrap().attributes.get(name).cloned()
    }

    /// Get an inline style property value
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.state.lock().unwrap().style.get(name).cloned()
    }

    /// Check whether a class is present
    pub fn has_class(&self, name: &str) -> bool {
        self.state.lock().unwrap().classes.contains(name)
    }
}

impl DisplayRoot for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .style
            .insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&self, name: &str, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        if enabled {
            state.classes.insert(name.to_string());
        } else {
            state.classes.remove(name);
        }
    }
}
