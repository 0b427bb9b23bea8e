//! Settings loading for cronlint.
//!
//! This module handles:
//! - The settings schema in [`settings`]
//! - File discovery and loading in [`loader`]
//! - JSON Schema generation in [`schema`]
//!
//! # Example
//!
//! ```
//! use cronlint::config::{resolve_settings, SettingsOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".cronlint.yml"), "allow_environment: true").unwrap();
//!
//! let settings = resolve_settings(None, temp.path())
//!     .unwrap()
//!     .with_overrides(&SettingsOverrides {
//!         check_scripts: true,
//!         ..Default::default()
//!     });
//! assert!(settings.allow_environment);
//! assert!(settings.check_scripts);
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{discover_settings, load_settings, resolve_settings, SETTINGS_FILE_NAME};
pub use schema::SchemaGenerator;
pub use settings::{Settings, SettingsOverrides, REQUIRED_RULES};
