//! Module entry point the host loads
//!
//! Ties the lifecycle controller to the gameplay hooks: the hooks are installed
//! and the registry sealed at construction, before the host can route a single
//! call through them. `start`/`shutdown` then only move the shared state the
//! hooks consult.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use valheel_types::Settings;

use crate::config::{ConfigError, ConfigStore};
use crate::gameplay::{Clock, GameplayHookSet, ProcRoll};
use crate::hooks::{HookError, HookRegistry};
use crate::host::ModHost;
use crate::lifecycle::{LifecycleController, ModState, ModuleContext};

pub struct ValheelMod {
    lifecycle: LifecycleController,
    hooks: Arc<HookRegistry>,
}

impl ValheelMod {
    /// Module rooted at `mod_path`, reading `<mod_path>/Settings.json`
    pub fn new(mod_path: impl Into<PathBuf>, host: Arc<dyn ModHost>) -> Result<Self, HookError> {
        Self::builder(mod_path, host).build()
    }

    pub fn builder(mod_path: impl Into<PathBuf>, host: Arc<dyn ModHost>) -> ValheelModBuilder {
        ValheelModBuilder {
            mod_path: mod_path.into(),
            host,
            store: None,
            clock: None,
            roll: None,
        }
    }

    pub fn start(&mut self) {
        self.lifecycle.start();
    }

    pub fn shutdown(&mut self) {
        self.lifecycle.shutdown();
    }

    pub fn state(&self) -> ModState {
        self.lifecycle.state()
    }

    pub fn settings(&self) -> Arc<Settings> {
        self.lifecycle.context().settings()
    }

    pub fn save_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        self.lifecycle.save_settings(settings)
    }

    /// Sealed registry the host routes intercepted calls through
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hooks
    }

    pub fn mod_path(&self) -> &Path {
        self.lifecycle.mod_path()
    }

    pub fn settings_path(&self) -> &Path {
        self.lifecycle.store().path()
    }
}

impl std::fmt::Debug for ValheelMod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValheelMod")
            .field("mod_path", &self.mod_path())
            .field("state", &self.state())
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Overrides for the settings store and the gameplay time/randomness sources
pub struct ValheelModBuilder {
    mod_path: PathBuf,
    host: Arc<dyn ModHost>,
    store: Option<ConfigStore>,
    clock: Option<Arc<dyn Clock>>,
    roll: Option<Arc<dyn ProcRoll>>,
}

impl ValheelModBuilder {
    pub fn store(mut self, store: ConfigStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn roll(mut self, roll: Arc<dyn ProcRoll>) -> Self {
        self.roll = Some(roll);
        self
    }

    pub fn build(self) -> Result<ValheelMod, HookError> {
        let ctx = Arc::new(ModuleContext::new());

        let mut hook_set = GameplayHookSet::new(Arc::clone(&ctx));
        if let Some(clock) = self.clock {
            hook_set = hook_set.with_clock(clock);
        }
        if let Some(roll) = self.roll {
            hook_set = hook_set.with_roll(roll);
        }

        let mut hooks = HookRegistry::new();
        Arc::new(hook_set).install(&mut hooks)?;
        hooks.seal();
        tracing::debug!(
            hooks = hooks.registrations().len(),
            "Gameplay hooks installed"
        );

        let store = self
            .store
            .unwrap_or_else(|| ConfigStore::for_module(&self.mod_path));
        let lifecycle = LifecycleController::new(self.mod_path, ctx, store, self.host);

        Ok(ValheelMod {
            lifecycle,
            hooks: Arc::new(hooks),
        })
    }
}
