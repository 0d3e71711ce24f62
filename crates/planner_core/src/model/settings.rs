//! User settings singleton record.

use serde::{Deserialize, Serialize};

/// UI color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Singleton settings record; not a collection.
///
/// Missing or unreadable persisted settings resolve to `Settings::default()`
/// so a blank-slate session never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}
