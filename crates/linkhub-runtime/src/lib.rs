pub mod config;
pub mod error;
pub mod hub;
pub mod preferences;
pub mod source;

pub use config::{Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use hub::{Hub, HubSettings, HubView, ViewStatus, ViewportClass};
pub use preferences::{
    FilePreferences, MemoryPreferences, PreferenceStore, THEME_KEY, load_theme, save_theme,
};
pub use source::{LoadOutcome, load_links, spawn_load};
