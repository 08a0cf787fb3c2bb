//! Hookable host operations
//!
//! Each host method this module intercepts is a marker type implementing
//! [`Operation`]. The associated types pin the receiver, argument shape and
//! result, so a hook written against the wrong parameter shape fails to compile
//! instead of silently never firing.

use std::fmt;

use crate::host::{
    CastingPreCheckStatus, DamageHistoryInfo, HostCreature, HostPlayer, MotionStance, Spell,
    WorldObjectRef,
};

/// Stable key of a hookable host operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationId {
    PlayerTick,
    DoCastSpellInner,
    LaunchMissile,
    HandleActionUseItem,
    Attack,
    FindNextTarget,
    DamageHistoryCtor,
}

impl OperationId {
    pub const ALL: [OperationId; 7] = [
        OperationId::PlayerTick,
        OperationId::DoCastSpellInner,
        OperationId::LaunchMissile,
        OperationId::HandleActionUseItem,
        OperationId::Attack,
        OperationId::FindNextTarget,
        OperationId::DamageHistoryCtor,
    ];

    /// Host method name plus parameter shape
    pub fn signature(&self) -> &'static str {
        match self {
            OperationId::PlayerTick => "Player::Player_Tick(f64)",
            OperationId::DoCastSpellInner => {
                "Player::DoCastSpell_Inner(Spell, WorldObject, u32, WorldObject, CastingPreCheckStatus, bool)"
            }
            OperationId::LaunchMissile => {
                "Player::LaunchMissile(WorldObject, i32, MotionStance, bool)"
            }
            OperationId::HandleActionUseItem => "Player::HandleActionUseItem(u32)",
            OperationId::Attack => "Player::Attack(WorldObject, i32, bool)",
            OperationId::FindNextTarget => "Creature::FindNextTarget() -> bool",
            OperationId::DamageHistoryCtor => "DamageHistoryInfo::new(WorldObject, f32)",
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

/// A host operation that hooks can be registered against.
pub trait Operation: 'static {
    const ID: OperationId;

    /// Object the host method is invoked on
    type Receiver: ?Sized + 'static;

    type Args: 'static;

    /// Result of the host method; `()` for methods without one
    type Output: 'static;
}

// ─────────────────────────────────────────────────────────────────────────────
// Player Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Periodic per-player update
pub struct PlayerTick;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickArgs {
    pub current_unix_time: f64,
}

impl Operation for PlayerTick {
    const ID: OperationId = OperationId::PlayerTick;
    type Receiver = dyn HostPlayer;
    type Args = TickArgs;
    type Output = ();
}

/// Completion of a spell cast
pub struct DoCastSpellInner;

#[derive(Debug, Clone, PartialEq)]
pub struct CastArgs {
    pub spell: Spell,
    pub caster_item: Option<WorldObjectRef>,
    pub mana_used: u32,
    pub target: Option<WorldObjectRef>,
    pub pre_check: CastingPreCheckStatus,
    pub finish_cast: bool,
}

impl Operation for DoCastSpellInner {
    const ID: OperationId = OperationId::DoCastSpellInner;
    type Receiver = dyn HostPlayer;
    type Args = CastArgs;
    type Output = ();
}

pub struct LaunchMissile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileArgs {
    pub target: WorldObjectRef,
    pub attack_sequence: i32,
    pub stance: MotionStance,
    pub subsequent: bool,
}

impl Operation for LaunchMissile {
    const ID: OperationId = OperationId::LaunchMissile;
    type Receiver = dyn HostPlayer;
    type Args = MissileArgs;
    type Output = ();
}

pub struct HandleActionUseItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseItemArgs {
    pub item_guid: u32,
}

impl Operation for HandleActionUseItem {
    const ID: OperationId = OperationId::HandleActionUseItem;
    type Receiver = dyn HostPlayer;
    type Args = UseItemArgs;
    type Output = ();
}

/// Melee attack action
pub struct Attack;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackArgs {
    pub target: WorldObjectRef,
    pub attack_sequence: i32,
    pub subsequent: bool,
}

impl Operation for Attack {
    const ID: OperationId = OperationId::Attack;
    type Receiver = dyn HostPlayer;
    type Args = AttackArgs;
    type Output = ();
}

// ─────────────────────────────────────────────────────────────────────────────
// Creature & Record Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Creature target acquisition; the result says whether a target was found
pub struct FindNextTarget;

impl Operation for FindNextTarget {
    const ID: OperationId = OperationId::FindNextTarget;
    type Receiver = dyn HostCreature;
    type Args = ();
    type Output = bool;
}

/// Two-argument construction of a damage history record
pub struct DamageHistoryCtor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageHistoryArgs {
    pub attacker: WorldObjectRef,
    pub total_damage: f32,
}

impl Operation for DamageHistoryCtor {
    const ID: OperationId = OperationId::DamageHistoryCtor;
    type Receiver = ();
    type Args = DamageHistoryArgs;
    type Output = DamageHistoryInfo;
}
