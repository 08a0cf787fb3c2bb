//! Host server model
//!
//! Interfaces and plain data for the parts of the game server this module
//! touches. Combat simulation itself stays in the host.

mod entity;
mod record;
mod spell;

pub use entity::{
    CloakStatus, CreatureSkill, HostCreature, HostPlayer, MotionStance, ObjectGuid, ObjectKind,
    PlayScript, PlayerCombatState, Skill, WorldObjectRef,
};
pub use record::DamageHistoryInfo;
pub use spell::{CastingPreCheckStatus, DamageType, MagicSchool, Spell};

use std::path::Path;

/// Module-management surface of the host
pub trait ModHost: Send + Sync {
    /// Ask the host to disable and unload the module installed at `mod_path`
    fn disable_mod(&self, mod_path: &Path);
}
