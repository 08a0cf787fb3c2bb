//! State shared between the lifecycle controller and the hook bodies

use std::sync::{Arc, PoisonError, RwLock};

use valheel_types::Settings;

use super::state::ModState;

/// Lifecycle state plus the active settings record.
///
/// Only the lifecycle controller writes; hooks read from whatever host thread
/// calls them. Settings are handed out as an `Arc` snapshot so a hook sees one
/// consistent record for the whole call.
#[derive(Debug, Default)]
pub struct ModuleContext {
    state: RwLock<ModState>,
    settings: RwLock<Arc<Settings>>,
}

impl ModuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn set_state(&self, state: ModState) {
        let mut current = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if *current != state {
            tracing::debug!(from = %*current, to = %state, "Module state transition");
            *current = state;
        }
    }

    pub(crate) fn replace_settings(&self, settings: Settings) {
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(settings);
    }
}
