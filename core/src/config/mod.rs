//! Settings persistence
//!
//! `ConfigStore` reads and writes the module's `Settings.json`, retrying file
//! access a bounded number of times before reporting failure.

mod error;
mod file;
mod store;

#[cfg(test)]
mod store_tests;

pub use error::ConfigError;
pub use file::{DiskFile, SettingsFile};
pub use store::{ConfigStore, RETRIES, SETTINGS_FILE_NAME, decode, encode};
pub use valheel_types::{Settings, SkillAdvancementClass};
