pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

use std::time::Duration;

pub use key::{Key, KeyBinding};
pub use keybindings::PickerKeybindings;
pub use loader::{config_path, load, load_from};
pub use resolver::{KeyResolver, PickAction};
use serde::{Deserialize, Serialize};

use crate::state::InputMode;

/// Behaviour options for a picker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PickerOptions {
    pub mode: InputMode,
    /// Quiet period before a search is reported. Negative values count as zero.
    pub debounce_ms: i64,
    pub initial_search: Option<String>,
}

impl PickerOptions {
    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.max(0).unsigned_abs())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub picker: PickerOptions,
    #[serde(default)]
    pub keybindings: PickerKeybindings,
}
