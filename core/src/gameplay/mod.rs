//! Gameplay hooks
//!
//! The payload carried through the hook registry: tick-driven ability
//! processing, post-cast procs, and full replacements of the host's missile,
//! item-use, attack, targeting and damage-history logic.
//!
//! # Cast Procs
//!
//! | Caster | Spell | Effect |
//! |--------|-------|--------|
//! | healer | beneficial life magic on health | heal-over-time on the target player |
//! | healer | beneficial life magic on stamina | stamina-over-time on the target player |
//! | dps | war magic with projectiles | chance to channel a bonus cast |
//! | sneaking | anything | stealth breaks |

mod hook_set;
mod sources;


pub use hook_set::GameplayHookSet;
pub use sources::{Clock, FixedClock, FixedRoll, ProcRoll, SystemClock, ThreadRoll};
