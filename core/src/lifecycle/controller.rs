//! Start/shutdown state machine
//!
//! ```text
//! Uninitialized ──start──▶ Loading ──load ok──▶ Running ──shutdown──▶ Uninitialized
//!                              │
//!                              └──load failed──▶ Error (host asked to disable us)
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use valheel_types::Settings;

use super::context::ModuleContext;
use super::state::ModState;
use crate::config::{ConfigError, ConfigStore};
use crate::host::ModHost;

pub struct LifecycleController {
    mod_path: PathBuf,
    ctx: Arc<ModuleContext>,
    store: ConfigStore,
    host: Arc<dyn ModHost>,
}

impl LifecycleController {
    pub fn new(
        mod_path: impl Into<PathBuf>,
        ctx: Arc<ModuleContext>,
        store: ConfigStore,
        host: Arc<dyn ModHost>,
    ) -> Self {
        Self {
            mod_path: mod_path.into(),
            ctx,
            store,
            host,
        }
    }

    pub fn mod_path(&self) -> &Path {
        &self.mod_path
    }

    pub fn state(&self) -> ModState {
        self.ctx.state()
    }

    pub fn context(&self) -> &Arc<ModuleContext> {
        &self.ctx
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Load settings and enter `Running`, or enter `Error` and ask the host to
    /// disable the module.
    pub fn start(&mut self) {
        match self.ctx.state() {
            ModState::Uninitialized => {}
            ModState::Error => {
                tracing::warn!(mod_path = ?self.mod_path, "Start ignored: module is in error state");
                return;
            }
            state => {
                tracing::debug!(%state, "Start ignored: module already started");
                return;
            }
        }

        self.ctx.set_state(ModState::Loading);

        match self.store.load() {
            Ok(settings) => {
                self.ctx.replace_settings(settings);
                self.ctx.set_state(ModState::Running);
                tracing::info!(mod_path = ?self.mod_path, "Module started");
            }
            Err(e) => {
                self.ctx.set_state(ModState::Error);
                tracing::warn!(
                    mod_path = ?self.mod_path,
                    error = %e,
                    "Failed to load settings; disabling module"
                );
                self.host.disable_mod(&self.mod_path);
            }
        }
    }

    /// Leave `Running`. Settings are not flushed: hooks never change them at
    /// runtime, so the file already matches memory.
    pub fn shutdown(&mut self) {
        match self.ctx.state() {
            ModState::Running => {
                self.ctx.set_state(ModState::Uninitialized);
                tracing::info!(mod_path = ?self.mod_path, "Module shut down");
            }
            ModState::Error => {
                tracing::error!(mod_path = ?self.mod_path, "Improper shutdown");
            }
            state => {
                tracing::debug!(%state, "Shutdown with nothing to stop");
            }
        }
    }

    /// Persist `settings` and make them active.
    ///
    /// On failure the module enters `Error` and the active settings are left as
    /// they were.
    pub fn save_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        match self.store.save(&settings) {
            Ok(()) => {
                self.ctx.replace_settings(settings);
                Ok(())
            }
            Err(e) => {
                self.ctx.set_state(ModState::Error);
                Err(e)
            }
        }
    }
}
