//! In-process stand-ins for the host server
//!
//! Just enough of a player, a creature and the mod manager to drive the hooks
//! by hand. Every effect the hooks trigger is printed instead of simulated.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use valheel_core::host::{
    CloakStatus, CreatureSkill, HostCreature, HostPlayer, ModHost, MotionStance, ObjectGuid,
    PlayScript, PlayerCombatState, Skill, Spell, WorldObjectRef,
};
use valheel_types::SkillAdvancementClass;

/// Mod manager that records whether it was asked to disable the module
#[derive(Debug, Default)]
pub struct SimHost {
    disabled: AtomicBool,
}

impl SimHost {
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

impl ModHost for SimHost {
    fn disable_mod(&self, mod_path: &Path) {
        self.disabled.store(true, Ordering::SeqCst);
        println!("host: disabling mod at {}", mod_path.display());
    }
}

pub struct SimPlayer {
    pub guid: u32,
    pub state: PlayerCombatState,
    pub healer: bool,
    pub dps: bool,
    pub life_magic: SkillAdvancementClass,
    pub war_magic: SkillAdvancementClass,
    hot_ticking: bool,
}

impl SimPlayer {
    pub fn new(guid: u32) -> Self {
        Self {
            guid,
            state: PlayerCombatState::default(),
            healer: true,
            dps: true,
            life_magic: SkillAdvancementClass::Specialized,
            war_magic: SkillAdvancementClass::Specialized,
            hot_ticking: false,
        }
    }

    pub fn target_ref(&self) -> WorldObjectRef {
        WorldObjectRef::player(self.guid)
    }
}

fn describe(target: WorldObjectRef) -> String {
    format!("{:?} {}", target.kind, target.guid.0)
}

impl HostPlayer for SimPlayer {
    fn guid(&self) -> ObjectGuid {
        ObjectGuid(self.guid)
    }

    fn combat_state(&mut self) -> &mut PlayerCombatState {
        &mut self.state
    }

    fn creature_skill(&self, skill: Skill) -> Option<CreatureSkill> {
        let advancement_class = match skill {
            Skill::LifeMagic => self.life_magic,
            Skill::WarMagic => self.war_magic,
            _ => return None,
        };
        Some(CreatureSkill {
            skill,
            advancement_class,
        })
    }

    fn is_healer(&self) -> bool {
        self.healer
    }

    fn is_dps(&self) -> bool {
        self.dps
    }

    fn is_hot_ticking(&self) -> bool {
        self.hot_ticking
    }

    fn hot_spell_for(&self, spell_name: &str) -> Option<Spell> {
        Some(Spell {
            id: 0,
            name: format!("{spell_name} (over time)"),
            school: valheel_core::host::MagicSchool::LifeMagic,
            is_beneficial: true,
            vital_damage_type: valheel_core::host::DamageType::Health,
            num_projectiles: 0,
        })
    }

    fn life_magic_hot(&mut self, target: WorldObjectRef, hot: &Spell) {
        self.hot_ticking = true;
        println!("  heal over time: {} on {}", hot.name, describe(target));
    }

    fn life_magic_sot(&mut self, target: WorldObjectRef, sot: &Spell) {
        self.hot_ticking = true;
        println!("  stamina over time: {} on {}", sot.name, describe(target));
    }

    fn war_magic_channel(&mut self, target: WorldObjectRef, spell: &Spell, num_casts: u32) {
        println!(
            "  war channel: {} x{} at {}",
            spell.name,
            num_casts,
            describe(target)
        );
    }

    fn un_sneak(&mut self) {
        println!("  un-sneak");
    }

    fn set_cloak_status(&mut self, status: CloakStatus) {
        println!("  cloak status: {status:?}");
    }

    fn play_particle_effect(&mut self, script: PlayScript, target: ObjectGuid) {
        println!("  particle effect: {script:?} on {}", target.0);
    }

    fn run_ability_manager(&mut self, current_unix_time: f64) {
        // Over-time effects expire on the next tick here
        self.hot_ticking = false;
        println!("  ability manager tick at {current_unix_time:.3}");
    }

    fn val_launch_missile(
        &mut self,
        target: WorldObjectRef,
        attack_sequence: i32,
        stance: MotionStance,
        subsequent: bool,
    ) {
        println!(
            "  valheel missile: {} seq={attack_sequence} stance={stance:?} subsequent={subsequent}",
            describe(target)
        );
    }

    fn val_handle_action_use_item(&mut self, item_guid: u32) {
        println!("  valheel use item: {item_guid}");
    }

    fn val_attack(&mut self, target: WorldObjectRef, attack_sequence: i32, subsequent: bool) {
        println!(
            "  valheel attack: {} seq={attack_sequence} subsequent={subsequent}",
            describe(target)
        );
    }
}

pub struct SimCreature {
    pub guid: u32,
    /// Potential targets in range
    pub nearby: Vec<WorldObjectRef>,
}

impl HostCreature for SimCreature {
    fn guid(&self) -> ObjectGuid {
        ObjectGuid(self.guid)
    }

    fn val_find_next_target(&mut self) -> bool {
        match self.nearby.first() {
            Some(target) => {
                println!("  creature {} targets {}", self.guid, describe(*target));
                true
            }
            None => {
                println!("  creature {} finds no target", self.guid);
                false
            }
        }
    }
}
