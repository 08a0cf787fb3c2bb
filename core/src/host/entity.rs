//! Host entity interfaces
//!
//! The host server owns its players and creatures. Hooks only ever see them as
//! `&mut dyn HostPlayer` / `&mut dyn HostCreature` for the duration of one call.

use valheel_types::SkillAdvancementClass;

use super::spell::Spell;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers & References
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectGuid(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Player,
    Creature,
    Item,
    Other,
}

/// A world object passed as a call argument (e.g. a spell or attack target)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldObjectRef {
    pub guid: ObjectGuid,
    pub kind: ObjectKind,
}

impl WorldObjectRef {
    pub fn new(guid: u32, kind: ObjectKind) -> Self {
        Self {
            guid: ObjectGuid(guid),
            kind,
        }
    }

    pub fn player(guid: u32) -> Self {
        Self::new(guid, ObjectKind::Player)
    }

    pub fn creature(guid: u32) -> Self {
        Self::new(guid, ObjectKind::Creature)
    }

    pub fn is_player(&self) -> bool {
        self.kind == ObjectKind::Player
    }

    /// Players are creatures too
    pub fn is_creature(&self) -> bool {
        matches!(self.kind, ObjectKind::Player | ObjectKind::Creature)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host Enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    LifeMagic,
    WarMagic,
    CreatureEnchantment,
    ItemEnchantment,
    VoidMagic,
}

/// A creature's standing in one skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatureSkill {
    pub skill: Skill,
    pub advancement_class: SkillAdvancementClass,
}

/// Value of the player's visible cloak status property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloakStatus {
    #[default]
    Undef,
    Off,
    Player,
    Creature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayScript {
    EnchantUpGreen,
    EnchantDownRed,
    HealthUpRed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionStance {
    #[default]
    NonCombat,
    HandCombat,
    MissileCombat,
    Magic,
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-Entity State
// ─────────────────────────────────────────────────────────────────────────────

/// Fields the combat hooks read and write on a player.
///
/// Owned by the player; hooks borrow it through [`HostPlayer::combat_state`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCombatState {
    /// Unix seconds of the last war channel proc, 0 until first used
    pub last_war_channel_timestamp: u64,
    pub is_sneaking: bool,
    /// Tick time most recently handed to the ability manager
    pub last_ability_tick: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Creature surface used by the target-acquisition replacement
pub trait HostCreature {
    fn guid(&self) -> ObjectGuid;

    /// Module targeting tactics; returns whether a target was found
    fn val_find_next_target(&mut self) -> bool;
}

/// Player surface used by the gameplay hooks
pub trait HostPlayer {
    fn guid(&self) -> ObjectGuid;

    fn combat_state(&mut self) -> &mut PlayerCombatState;

    /// None when the host has no skill data for this player
    fn creature_skill(&self, skill: Skill) -> Option<CreatureSkill>;

    fn is_healer(&self) -> bool;

    fn is_dps(&self) -> bool;

    /// A heal/stamina-over-time cast by this player is still running
    fn is_hot_ticking(&self) -> bool;

    /// Over-time variant of a life spell, looked up by the base spell's name
    fn hot_spell_for(&self, spell_name: &str) -> Option<Spell>;

    fn life_magic_hot(&mut self, target: WorldObjectRef, hot: &Spell);

    fn life_magic_sot(&mut self, target: WorldObjectRef, sot: &Spell);

    fn war_magic_channel(&mut self, target: WorldObjectRef, spell: &Spell, num_casts: u32);

    /// Host's un-stealth effect
    fn un_sneak(&mut self);

    fn set_cloak_status(&mut self, status: CloakStatus);

    fn play_particle_effect(&mut self, script: PlayScript, target: ObjectGuid);

    /// Ability and cooldown evaluation for one tick
    fn run_ability_manager(&mut self, current_unix_time: f64);

    fn val_launch_missile(
        &mut self,
        target: WorldObjectRef,
        attack_sequence: i32,
        stance: MotionStance,
        subsequent: bool,
    );

    fn val_handle_action_use_item(&mut self, item_guid: u32);

    fn val_attack(&mut self, target: WorldObjectRef, attack_sequence: i32, subsequent: bool);
}
