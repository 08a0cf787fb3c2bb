//! Spell data as the host hands it to cast hooks

/// Magic school a spell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicSchool {
    None,
    WarMagic,
    LifeMagic,
    ItemEnchantment,
    CreatureEnchantment,
    VoidMagic,
}

/// Vital (or damage element) a spell acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageType {
    Undef,
    Slash,
    Pierce,
    Bludgeon,
    Cold,
    Fire,
    Acid,
    Electric,
    Health,
    Stamina,
    Mana,
    Nether,
}

/// A castable spell
#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub id: u32,
    pub name: String,
    pub school: MagicSchool,
    pub is_beneficial: bool,
    pub vital_damage_type: DamageType,
    /// Projectile count for war spells; zero for everything else
    pub num_projectiles: u32,
}

impl Spell {
    /// Beneficial life-magic restoring `vital`
    pub fn is_life_restore(&self, vital: DamageType) -> bool {
        self.school == MagicSchool::LifeMagic && self.is_beneficial && self.vital_damage_type == vital
    }

    /// War-magic spell that launches at least one projectile
    pub fn is_war_projectile(&self) -> bool {
        self.school == MagicSchool::WarMagic && self.num_projectiles > 0
    }
}

/// Result of the host's pre-cast checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastingPreCheckStatus {
    #[default]
    Success,
    CastFailed,
    InvalidPkStatus,
}
