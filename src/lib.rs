//! Headless selection behaviour for dropdowns, autocompletes and keyboard
//! pickers.
//!
//! The crate owns the interaction state of a picker (search text, debounced
//! search reporting, highlight navigation, open/closed visibility and focus
//! handling) and leaves drawing to a render function supplied by the host.
//!
//! ```ignore
//! let config = SelectConfig::new(|state| state.highlighted_item().cloned())
//!     .with_items(vec!["apple", "banana"])
//!     .with_debounce_ms(150);
//! let (mut picker, mut notifications) = Controller::new(config, platform);
//!
//! picker.dispatch(Command::Search("ap".into()));
//! picker.process_next().await;
//! assert_eq!(notifications.recv().await, Some(Notification::Searched("ap".into())));
//! ```

pub mod config;
pub mod controller;
mod debounce;
pub mod host;
pub mod navigation;
pub mod platform;
pub mod render;
pub mod router;
pub mod search;
pub mod state;
pub mod visibility;

pub use controller::{Command, Controller, Notification, SelectConfig};
pub use host::Reconfigure;
pub use navigation::Target;
pub use platform::Platform;
pub use state::{InputMode, InteractionState};
pub use visibility::Visibility;
