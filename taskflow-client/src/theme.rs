/// Light/dark theme persisted in local storage

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{LocalStore, StorageError, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `"dark"` means dark; anything else, including nothing, means light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Theme,
    store: Arc<LocalStore>,
}

impl ThemeState {
    pub fn load(store: Arc<LocalStore>) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flips the theme and persists it
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}
