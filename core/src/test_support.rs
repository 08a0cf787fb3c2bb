//! Shared fakes for unit tests

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use valheel_types::SkillAdvancementClass;

use crate::config::SettingsFile;
use crate::host::{
    CloakStatus, CreatureSkill, HostCreature, HostPlayer, ModHost, MotionStance, ObjectGuid,
    PlayScript, PlayerCombatState, Skill, Spell, WorldObjectRef,
};

// ═══════════════════════════════════════════════════════════════════════════
// Settings File
// ═══════════════════════════════════════════════════════════════════════════

/// In-memory settings file with scripted failures
pub struct MemoryFile {
    path: PathBuf,
    contents: Mutex<Option<String>>,
    failing_reads: AtomicU32,
    failing_writes: AtomicU32,
    reads: AtomicU32,
    writes: AtomicU32,
}

impl MemoryFile {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            path: PathBuf::from("mods/Valheel/Settings.json"),
            contents: Mutex::new(None),
            failing_reads: AtomicU32::new(0),
            failing_writes: AtomicU32::new(0),
            reads: AtomicU32::new(0),
            writes: AtomicU32::new(0),
        })
    }

    pub fn with_contents(text: &str) -> Arc<Self> {
        let file = Self::empty();
        *file.contents.lock().unwrap() = Some(text.to_string());
        file
    }

    /// Fail the next `n` reads
    pub fn fail_reads(&self, n: u32) {
        self.failing_reads.store(n, Ordering::SeqCst);
    }

    /// Fail the next `n` writes
    pub fn fail_writes(&self, n: u32) {
        self.failing_writes.store(n, Ordering::SeqCst);
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> u32 {
        self.writes.load(Ordering::SeqCst)
    }
}

fn locked() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "file locked")
}

/// Consume one scripted failure, if any remain
fn take_failure(counter: &AtomicU32) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

impl SettingsFile for MemoryFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.contents.lock().unwrap().is_some()
    }

    fn read(&self) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.failing_reads) {
            return Err(locked());
        }
        self.contents
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.failing_writes) {
            return Err(locked());
        }
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Host
// ═══════════════════════════════════════════════════════════════════════════

/// Host that records disable requests
#[derive(Default)]
pub struct RecordingHost {
    pub disabled: Mutex<Vec<PathBuf>>,
}

impl RecordingHost {
    pub fn disable_requests(&self) -> Vec<PathBuf> {
        self.disabled.lock().unwrap().clone()
    }
}

impl ModHost for RecordingHost {
    fn disable_mod(&self, mod_path: &Path) {
        self.disabled.lock().unwrap().push(mod_path.to_path_buf());
    }
}

/// Calls a fake entity received from the hooks
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AbilityManager(f64),
    Hot(WorldObjectRef, String),
    Sot(WorldObjectRef, String),
    Channel(WorldObjectRef, String, u32),
    UnSneak,
    Cloak(CloakStatus),
    Particle(PlayScript, ObjectGuid),
    ValMissile(WorldObjectRef, i32, MotionStance, bool),
    ValUseItem(u32),
    ValAttack(WorldObjectRef, i32, bool),
}

pub struct FakePlayer {
    pub guid: u32,
    pub state: PlayerCombatState,
    pub healer: bool,
    pub dps: bool,
    pub hot_ticking: bool,
    pub life_magic: Option<SkillAdvancementClass>,
    pub war_magic: Option<SkillAdvancementClass>,
    pub knows_hot_variants: bool,
    pub calls: Vec<Call>,
}

impl FakePlayer {
    pub fn new(guid: u32) -> Self {
        Self {
            guid,
            state: PlayerCombatState::default(),
            healer: false,
            dps: false,
            hot_ticking: false,
            life_magic: Some(SkillAdvancementClass::Specialized),
            war_magic: Some(SkillAdvancementClass::Specialized),
            knows_hot_variants: true,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl HostPlayer for FakePlayer {
    fn guid(&self) -> ObjectGuid {
        ObjectGuid(self.guid)
    }

    fn combat_state(&mut self) -> &mut PlayerCombatState {
        &mut self.state
    }

    fn creature_skill(&self, skill: Skill) -> Option<CreatureSkill> {
        let advancement_class = match skill {
            Skill::LifeMagic => self.life_magic?,
            Skill::WarMagic => self.war_magic?,
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
        if !self.knows_hot_variants {
            return None;
        }
        Some(Spell {
            id: 9000,
            name: format!("{spell_name} Over Time"),
            school: crate::host::MagicSchool::LifeMagic,
            is_beneficial: true,
            vital_damage_type: crate::host::DamageType::Health,
            num_projectiles: 0,
        })
    }

    fn life_magic_hot(&mut self, target: WorldObjectRef, hot: &Spell) {
        self.calls.push(Call::Hot(target, hot.name.clone()));
    }

    fn life_magic_sot(&mut self, target: WorldObjectRef, sot: &Spell) {
        self.calls.push(Call::Sot(target, sot.name.clone()));
    }

    fn war_magic_channel(&mut self, target: WorldObjectRef, spell: &Spell, num_casts: u32) {
        self.calls
            .push(Call::Channel(target, spell.name.clone(), num_casts));
    }

    fn un_sneak(&mut self) {
        self.calls.push(Call::UnSneak);
    }

    fn set_cloak_status(&mut self, status: CloakStatus) {
        self.calls.push(Call::Cloak(status));
    }

    fn play_particle_effect(&mut self, script: PlayScript, target: ObjectGuid) {
        self.calls.push(Call::Particle(script, target));
    }

    fn run_ability_manager(&mut self, current_unix_time: f64) {
        self.calls.push(Call::AbilityManager(current_unix_time));
    }

    fn val_launch_missile(
        &mut self,
        target: WorldObjectRef,
        attack_sequence: i32,
        stance: MotionStance,
        subsequent: bool,
    ) {
        self.calls
            .push(Call::ValMissile(target, attack_sequence, stance, subsequent));
    }

    fn val_handle_action_use_item(&mut self, item_guid: u32) {
        self.calls.push(Call::ValUseItem(item_guid));
    }

    fn val_attack(&mut self, target: WorldObjectRef, attack_sequence: i32, subsequent: bool) {
        self.calls
            .push(Call::ValAttack(target, attack_sequence, subsequent));
    }
}

pub struct FakeCreature {
    pub guid: u32,
    pub finds_target: bool,
    pub val_calls: u32,
}

impl HostCreature for FakeCreature {
    fn guid(&self) -> ObjectGuid {
        ObjectGuid(self.guid)
    }

    fn val_find_next_target(&mut self) -> bool {
        self.val_calls += 1;
        self.finds_target
    }
}
