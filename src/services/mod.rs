//! Services around the core: settings and on-disk locations.

pub mod settings;

pub use settings::{
    ensure_log_dir, load_settings, load_settings_from, FieldSettings, Settings, SettingsError,
};
