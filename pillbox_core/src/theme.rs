//! Theme preference, persisted next to the medication list.

use crate::kv::{KeyValueStore, THEME_KEY};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the button that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }

    /// Stored theme; anything other than "dark" means light
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self> {
        Ok(match store.get(THEME_KEY)?.as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        })
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Flip the stored theme and return the new one
    pub fn toggle<S: KeyValueStore>(store: &mut S) -> Result<Self> {
        let next = Self::load(store)?.toggled();
        next.save(store)?;
        tracing::info!("Theme switched to {}", next);
        Ok(next)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
