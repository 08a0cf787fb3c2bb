//! Combat and casting hook bodies
//!
//! Every hook checks the module state first. Outside `Running` the after-hooks
//! do nothing and the before-hooks let the host's original run.

use std::sync::Arc;

use valheel_types::Settings;

use super::sources::{Clock, ProcRoll, SystemClock, ThreadRoll};
use crate::hooks::{
    Attack, AttackArgs, CastArgs, DamageHistoryArgs, DamageHistoryCtor, DoCastSpellInner,
    FindNextTarget, HandleActionUseItem, HookError, HookRegistry, HookResult, LaunchMissile,
    MissileArgs, PlayerTick, TickArgs, UseItemArgs,
};
use crate::host::{
    CloakStatus, DamageHistoryInfo, DamageType, HostCreature, HostPlayer, PlayScript, Skill,
    WorldObjectRef,
};
use crate::lifecycle::ModuleContext;

pub struct GameplayHookSet {
    ctx: Arc<ModuleContext>,
    clock: Arc<dyn Clock>,
    roll: Arc<dyn ProcRoll>,
}

impl GameplayHookSet {
    pub fn new(ctx: Arc<ModuleContext>) -> Self {
        Self {
            ctx,
            clock: Arc::new(SystemClock),
            roll: Arc::new(ThreadRoll),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_roll(mut self, roll: Arc<dyn ProcRoll>) -> Self {
        self.roll = roll;
        self
    }

    /// Bind every hook to its host operation.
    pub fn install(self: &Arc<Self>, registry: &mut HookRegistry) -> Result<(), HookError> {
        let hooks = Arc::clone(self);
        registry.register_after::<PlayerTick>(move |player, args, _| {
            hooks.post_player_tick(player, args)
        })?;

        let hooks = Arc::clone(self);
        registry.register_after::<DoCastSpellInner>(move |player, args, _| {
            hooks.post_cast_spell(player, args)
        })?;

        let hooks = Arc::clone(self);
        registry.register_before::<LaunchMissile>(move |player, args| {
            hooks.pre_launch_missile(player, args)
        })?;

        let hooks = Arc::clone(self);
        registry.register_before::<HandleActionUseItem>(move |player, args| {
            hooks.pre_use_item(player, args)
        })?;

        let hooks = Arc::clone(self);
        registry.register_before::<Attack>(move |player, args| hooks.pre_attack(player, args))?;

        let hooks = Arc::clone(self);
        registry.register_before::<FindNextTarget>(move |creature, _| {
            hooks.pre_find_next_target(creature)
        })?;

        let hooks = Arc::clone(self);
        registry.register_before::<DamageHistoryCtor>(move |_, args| {
            hooks.pre_damage_history(args)
        })?;

        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // After-hooks
    // ═══════════════════════════════════════════════════════════════════════

    /// Run the ability manager once per tick.
    pub fn post_player_tick(&self, player: &mut dyn HostPlayer, args: &TickArgs) {
        if !self.ctx.is_running() {
            return;
        }

        let state = player.combat_state();
        if state.last_ability_tick == Some(args.current_unix_time) {
            tracing::trace!(tick = args.current_unix_time, "Tick already processed");
            return;
        }
        state.last_ability_tick = Some(args.current_unix_time);

        player.run_ability_manager(args.current_unix_time);
    }

    /// Healer over-time procs, war channeling, and stealth break after a cast.
    pub fn post_cast_spell(&self, player: &mut dyn HostPlayer, args: &CastArgs) {
        if !self.ctx.is_running() {
            return;
        }

        let settings = self.ctx.settings();
        let now = self.clock.now_unix();

        if player.is_healer() {
            self.apply_over_time(player, args, &settings);
        }

        if player.is_dps() {
            self.war_channel(player, args, &settings, now);
        }

        break_stealth(player);
    }

    fn apply_over_time(&self, player: &mut dyn HostPlayer, args: &CastArgs, settings: &Settings) {
        let spell = &args.spell;
        let vital = if spell.is_life_restore(DamageType::Health) {
            DamageType::Health
        } else if spell.is_life_restore(DamageType::Stamina) {
            DamageType::Stamina
        } else {
            return;
        };

        if player.is_hot_ticking() {
            return;
        }

        let Some(life_magic) = player.creature_skill(Skill::LifeMagic) else {
            tracing::debug!(guid = player.guid().0, "No life magic skill; skipping over-time proc");
            return;
        };
        if !life_magic
            .advancement_class
            .exceeds(settings.min_skill_advancement)
        {
            return;
        }

        let Some(target) = args.target.filter(WorldObjectRef::is_player) else {
            return;
        };
        let Some(over_time) = player.hot_spell_for(&spell.name) else {
            tracing::debug!(spell = %spell.name, "No over-time variant");
            return;
        };

        match vital {
            DamageType::Health => player.life_magic_hot(target, &over_time),
            _ => player.life_magic_sot(target, &over_time),
        }
    }

    fn war_channel(
        &self,
        player: &mut dyn HostPlayer,
        args: &CastArgs,
        settings: &Settings,
        now: u64,
    ) {
        let state = player.combat_state();
        if state.last_war_channel_timestamp == 0 {
            state.last_war_channel_timestamp = now.saturating_sub(settings.war_channel_timer_secs);
        }

        let spell = &args.spell;
        if !spell.is_war_projectile() {
            return;
        }

        // Channel timer is tracked but not enforced.
        let elapsed = now.saturating_sub(state.last_war_channel_timestamp);
        tracing::debug!(
            elapsed,
            ready = elapsed >= settings.war_channel_timer_secs,
            "War channel timer"
        );

        let roll = self.roll.roll();
        if settings.war_channel_chance < roll {
            return;
        }

        let Some(war_magic) = player.creature_skill(Skill::WarMagic) else {
            tracing::debug!(guid = player.guid().0, "No war magic skill; skipping channel");
            return;
        };
        if !war_magic
            .advancement_class
            .exceeds(settings.min_skill_advancement)
        {
            return;
        }

        let Some(target) = args.target.filter(WorldObjectRef::is_creature) else {
            return;
        };

        tracing::debug!(guid = player.guid().0, spell = %spell.name, roll, "War channel proc");
        player.war_magic_channel(target, spell, settings.channel_casts);
        player.combat_state().last_war_channel_timestamp = now;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Replacement before-hooks
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pre_launch_missile(
        &self,
        player: &mut dyn HostPlayer,
        args: &MissileArgs,
    ) -> HookResult<()> {
        if !self.ctx.is_running() {
            return HookResult::Continue;
        }
        player.val_launch_missile(args.target, args.attack_sequence, args.stance, args.subsequent);
        HookResult::Skip(())
    }

    pub fn pre_use_item(&self, player: &mut dyn HostPlayer, args: &UseItemArgs) -> HookResult<()> {
        if !self.ctx.is_running() {
            return HookResult::Continue;
        }
        player.val_handle_action_use_item(args.item_guid);
        HookResult::Skip(())
    }

    pub fn pre_attack(&self, player: &mut dyn HostPlayer, args: &AttackArgs) -> HookResult<()> {
        if !self.ctx.is_running() {
            return HookResult::Continue;
        }
        player.val_attack(args.target, args.attack_sequence, args.subsequent);
        HookResult::Skip(())
    }

    /// Targeting tactics; the module's result replaces the host's.
    pub fn pre_find_next_target(&self, creature: &mut dyn HostCreature) -> HookResult<bool> {
        if !self.ctx.is_running() {
            return HookResult::Continue;
        }
        HookResult::Skip(creature.val_find_next_target())
    }

    /// Build damage history records with attacker details the two-argument
    /// host constructor leaves out.
    pub fn pre_damage_history(&self, args: &DamageHistoryArgs) -> HookResult<DamageHistoryInfo> {
        if !self.ctx.is_running() {
            return HookResult::Continue;
        }
        HookResult::Skip(DamageHistoryInfo::with_details(
            args.attacker,
            true,
            args.total_damage,
        ))
    }
}

/// Any cast breaks stealth, whatever the school.
fn break_stealth(player: &mut dyn HostPlayer) {
    let state = player.combat_state();
    if !state.is_sneaking {
        return;
    }
    state.is_sneaking = false;

    player.un_sneak();
    player.set_cloak_status(CloakStatus::Off);
    let guid = player.guid();
    player.play_particle_effect(PlayScript::EnchantUpGreen, guid);
}
