//! Behavior interception for host operations
//!
//! Hooks observe or replace host methods without the host knowing what they do.
//! Each intercepted method is an [`Operation`]; the [`HookRegistry`] holds at
//! most one before-hook and any number of after-hooks per operation.
//!
//! | Kind | When | Can |
//! |------|------|-----|
//! | before | ahead of the original | skip the original and supply its result |
//! | after | once the original (or its stand-in) finished | adjust the result |

mod error;
mod operation;
mod registry;

pub use error::HookError;
pub use operation::{
    Attack, AttackArgs, CastArgs, DamageHistoryArgs, DamageHistoryCtor, DoCastSpellInner,
    FindNextTarget, HandleActionUseItem, LaunchMissile, MissileArgs, Operation, OperationId,
    PlayerTick, TickArgs, UseItemArgs,
};
pub use registry::{AfterHook, BeforeHook, HookKind, HookRegistration, HookRegistry, HookResult};
