//! Module lifecycle state

use std::fmt;

/// Lifecycle status of the module.
///
/// `Running` is the only state in which hooks apply their own logic. `Error`
/// is terminal for a module lifetime; only the host can recover by reloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModState {
    #[default]
    Uninitialized,
    Loading,
    Running,
    Error,
}

impl ModState {
    pub fn is_running(&self) -> bool {
        matches!(self, ModState::Running)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModState::Uninitialized => "uninitialized",
            ModState::Loading => "loading",
            ModState::Running => "running",
            ModState::Error => "error",
        }
    }
}

impl fmt::Display for ModState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
