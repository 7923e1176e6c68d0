//! Desktop window decoration using winit

use crate::window::{DecorationCallback, WindowDecoration, WindowTheme};
use std::sync::Arc;
use winit::window::{Theme, Window as WinitWindow};

/// Window decoration backed by a winit window
pub struct WinitDecoration {
    window: Arc<WinitWindow>,
}

impl WinitDecoration {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }
}

impl WindowDecoration for WinitDecoration {
    fn set_theme(&self, theme: Option<WindowTheme>, done: DecorationCallback) {
        let theme = theme.map(|theme| match theme {
            WindowTheme::Light => Theme::Light,
            WindowTheme::Dark => Theme::Dark,
        });
        // winit applies the theme on the next event-loop turn and never reports failure
        self.window.set_theme(theme);
        done(Ok(()));
    }
}
