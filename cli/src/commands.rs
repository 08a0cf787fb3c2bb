use std::io::Write;

use clap::ValueEnum;
use valheel_core::config::encode;
use valheel_core::hooks::{
    Attack, AttackArgs, CastArgs, DamageHistoryArgs, DamageHistoryCtor, DoCastSpellInner,
    FindNextTarget, HandleActionUseItem, HookKind, LaunchMissile, MissileArgs, PlayerTick,
    TickArgs, UseItemArgs,
};
use valheel_core::host::{
    CastingPreCheckStatus, DamageHistoryInfo, DamageType, MagicSchool, MotionStance, ObjectKind,
    Spell, WorldObjectRef,
};
use valheel_types::SkillAdvancementClass;

use crate::context::CliContext;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchoolArg {
    War,
    Life,
    Item,
    Creature,
    Void,
}

impl From<SchoolArg> for MagicSchool {
    fn from(arg: SchoolArg) -> Self {
        match arg {
            SchoolArg::War => MagicSchool::WarMagic,
            SchoolArg::Life => MagicSchool::LifeMagic,
            SchoolArg::Item => MagicSchool::ItemEnchantment,
            SchoolArg::Creature => MagicSchool::CreatureEnchantment,
            SchoolArg::Void => MagicSchool::VoidMagic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VitalArg {
    Health,
    Stamina,
    Mana,
    Fire,
    Cold,
}

impl From<VitalArg> for DamageType {
    fn from(arg: VitalArg) -> Self {
        match arg {
            VitalArg::Health => DamageType::Health,
            VitalArg::Stamina => DamageType::Stamina,
            VitalArg::Mana => DamageType::Mana,
            VitalArg::Fire => DamageType::Fire,
            VitalArg::Cold => DamageType::Cold,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Player,
    Creature,
    Item,
}

impl From<KindArg> for ObjectKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Player => ObjectKind::Player,
            KindArg::Creature => ObjectKind::Creature,
            KindArg::Item => ObjectKind::Item,
        }
    }
}

/// Spell description for the `cast` command
pub struct CastSpec {
    pub name: String,
    pub school: SchoolArg,
    pub vital: VitalArg,
    pub projectiles: u32,
    pub harmful: bool,
}

/// Fields changed by the `save` command; `None` keeps the active value
#[derive(Default)]
pub struct SettingsUpdate {
    pub chance: Option<f64>,
    pub timer_secs: Option<u64>,
    pub casts: Option<u32>,
    pub min_skill: Option<SkillAdvancementClass>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle & Settings
// ─────────────────────────────────────────────────────────────────────────────

pub fn start(ctx: &mut CliContext) {
    ctx.module.start();
    show_state(ctx);
}

pub fn shutdown(ctx: &mut CliContext) {
    ctx.module.shutdown();
    show_state(ctx);
}

pub fn show_state(ctx: &CliContext) {
    println!("state: {}", ctx.module.state());
    if ctx.host.is_disabled() {
        println!("host has disabled this module");
    }
}

pub fn show_settings(ctx: &CliContext) {
    let settings = ctx.module.settings();
    println!("file: {}", ctx.module.settings_path().display());
    println!(
        "procs need skill above: {}",
        settings.min_skill_advancement.label()
    );
    match encode(&settings) {
        Ok(text) => println!("{text}"),
        Err(e) => println!("Failed to encode settings: {e}"),
    }
}

pub fn save_settings(ctx: &mut CliContext, update: SettingsUpdate) {
    let mut settings = (*ctx.module.settings()).clone();
    if let Some(chance) = update.chance {
        settings.war_channel_chance = chance;
    }
    if let Some(timer_secs) = update.timer_secs {
        settings.war_channel_timer_secs = timer_secs;
    }
    if let Some(casts) = update.casts {
        settings.channel_casts = casts;
    }
    if let Some(min_skill) = update.min_skill {
        settings.min_skill_advancement = min_skill;
    }

    match ctx.module.save_settings(settings) {
        Ok(()) => println!("Settings saved"),
        Err(e) => println!("Save failed: {e}"),
    }
}

pub fn list_hooks(ctx: &CliContext) {
    let hooks = ctx.module.hooks();
    println!("{:<8} Operation", "Kind");
    println!("{}", "-".repeat(80));
    for reg in hooks.registrations() {
        let kind = match reg.kind {
            HookKind::Before => "before",
            HookKind::After => "after",
        };
        println!("{:<8} {}", kind, reg.operation);
    }
    println!("\nsealed: {}", hooks.is_sealed());
}

// ─────────────────────────────────────────────────────────────────────────────
// Player Actions
// ─────────────────────────────────────────────────────────────────────────────

pub fn set_target(ctx: &mut CliContext, guid: Option<u32>, kind: KindArg) {
    ctx.target = guid.map(|guid| WorldObjectRef::new(guid, kind.into()));
    match ctx.target {
        Some(target) => println!("target: {:?} {}", target.kind, target.guid.0),
        None => println!("target cleared"),
    }
}

pub fn set_role(ctx: &mut CliContext, healer: bool, dps: bool) {
    ctx.player.healer = healer;
    ctx.player.dps = dps;
    println!("healer: {healer}, dps: {dps}");
}

pub fn tick(ctx: &mut CliContext, time: Option<f64>) {
    let current_unix_time =
        time.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as f64 / 1000.0);
    ctx.module.hooks().call::<PlayerTick>(
        &mut ctx.player,
        &TickArgs { current_unix_time },
        |_, _| println!("host: player tick"),
    );
}

pub fn cast(ctx: &mut CliContext, spec: CastSpec) {
    let args = CastArgs {
        spell: Spell {
            id: 0,
            name: spec.name,
            school: spec.school.into(),
            is_beneficial: !spec.harmful,
            vital_damage_type: spec.vital.into(),
            num_projectiles: spec.projectiles,
        },
        caster_item: None,
        mana_used: 0,
        target: ctx.target,
        pre_check: CastingPreCheckStatus::Success,
        finish_cast: true,
    };
    ctx.module
        .hooks()
        .call::<DoCastSpellInner>(&mut ctx.player, &args, |_, args| {
            println!("host: cast {}", args.spell.name)
        });
}

pub fn sneak(ctx: &mut CliContext) {
    ctx.player.state.is_sneaking = true;
    println!("sneaking");
}

pub fn attack(ctx: &mut CliContext, sequence: i32) {
    let Some(target) = ctx.target else {
        println!("No target");
        return;
    };
    let args = AttackArgs {
        target,
        attack_sequence: sequence,
        subsequent: false,
    };
    ctx.module
        .hooks()
        .call::<Attack>(&mut ctx.player, &args, |_, _| println!("host: attack"));
}

pub fn missile(ctx: &mut CliContext, sequence: i32) {
    let Some(target) = ctx.target else {
        println!("No target");
        return;
    };
    let args = MissileArgs {
        target,
        attack_sequence: sequence,
        stance: MotionStance::MissileCombat,
        subsequent: false,
    };
    ctx.module
        .hooks()
        .call::<LaunchMissile>(&mut ctx.player, &args, |_, _| {
            println!("host: launch missile")
        });
}

pub fn use_item(ctx: &mut CliContext, item_guid: u32) {
    ctx.module.hooks().call::<HandleActionUseItem>(
        &mut ctx.player,
        &UseItemArgs { item_guid },
        |_, _| println!("host: use item"),
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Creature & Records
// ─────────────────────────────────────────────────────────────────────────────

pub fn find_target(ctx: &mut CliContext) {
    let found = ctx
        .module
        .hooks()
        .call::<FindNextTarget>(&mut ctx.creature, &(), |_, _| {
            println!("host: find next target");
            false
        });
    println!("found: {found}");
}

pub fn damage(ctx: &mut CliContext, amount: f32) {
    let args = DamageHistoryArgs {
        attacker: ctx.creature_ref(),
        total_damage: amount,
    };
    let record = ctx
        .module
        .hooks()
        .call::<DamageHistoryCtor>(&mut (), &args, |_, args| {
            DamageHistoryInfo::new(args.attacker, args.total_damage)
        });
    println!(
        "damage record: attacker {} details={} total={}",
        record.attacker.guid.0, record.attacker_details, record.total_damage
    );
}

pub fn exit(ctx: &mut CliContext) -> Result<(), String> {
    ctx.module.shutdown();
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
