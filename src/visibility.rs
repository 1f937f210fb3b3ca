//! Open/closed state of the item list.

use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// Whether the selectable item list is shown for interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Off,
    On,
}

impl Visibility {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl Not for Visibility {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<bool> for Visibility {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Visibility> for bool {
    fn from(value: Visibility) -> Self {
        value.is_on()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}
