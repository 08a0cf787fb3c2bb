//! Module lifecycle
//!
//! The controller is the only writer of [`ModState`] and of the active
//! settings. Hooks read both through a shared [`ModuleContext`].

mod context;
mod controller;
mod state;


pub use context::ModuleContext;
pub use controller::LifecycleController;
pub use state::ModState;
