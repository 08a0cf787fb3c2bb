//! Valheel server module core
//!
//! Lifecycle, persisted settings, and the gameplay hooks a host server routes
//! its player, creature and damage-history calls through.

pub mod config;
pub mod gameplay;
pub mod hooks;
pub mod host;
pub mod lifecycle;
pub mod module;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, ConfigStore, Settings, SkillAdvancementClass};
pub use hooks::{HookError, HookRegistry, HookResult, Operation, OperationId};
pub use lifecycle::{LifecycleController, ModState, ModuleContext};
pub use module::{ValheelMod, ValheelModBuilder};
