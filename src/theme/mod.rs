//! Process-wide light/dark theme.
//!
//! There is exactly one theme cell per client. The explicit toggle control
//! and chat-driven UI actions both go through [`ThemeStore::toggle`], so the
//! two paths can never hold diverging copies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Shared handle to the theme cell. Clones observe and mutate the same cell.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<Theme>>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&self) -> Theme {
        self.tx.send_modify(|theme| *theme = theme.flipped());
        let theme = self.current();
        info!(%theme, "theme toggled");
        theme
    }

    /// Move to `theme`, toggling only when it differs. Returns whether a
    /// toggle happened.
    pub fn set(&self, theme: Theme) -> bool {
        if self.current() == theme {
            return false;
        }
        self.toggle();
        true
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

/// UI action names a chat reply may carry.
pub const THEME_DARK: &str = "THEME_DARK";
pub const THEME_LIGHT: &str = "THEME_LIGHT";

/// Apply a chat `ACTION` directive. Only `THEME_DARK` and `THEME_LIGHT` are
/// recognized; each toggles at most once and only when the theme differs.
/// Anything else is ignored. Returns whether the theme changed.
pub fn apply_ui_action(store: &ThemeStore, action_name: &str) -> bool {
    let target = match action_name {
        THEME_DARK => Theme::Dark,
        THEME_LIGHT => Theme::Light,
        other => {
            debug!(action = other, "ignoring unrecognized ui action");
            return false;
        }
    };
    store.set(target)
}
