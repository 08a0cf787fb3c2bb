//! Shared settings types for Valheel
//!
//! This crate contains the serializable settings record that is shared between
//! the module runtime (valheel-core) and the operator CLI (valheel-cli).
//!
//! The on-disk format keeps PascalCase field names and camelCase enum values so
//! that existing `Settings.json` files written by earlier module builds still load.

use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Skill Types
// ─────────────────────────────────────────────────────────────────────────────

/// How far a creature has advanced a skill.
///
/// Ordering follows advancement: `Inactive < Untrained < Trained < Specialized`.
/// Written camelCase; read in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillAdvancementClass {
    Inactive,
    Untrained,
    #[default]
    Trained,
    Specialized,
}

impl SkillAdvancementClass {
    /// Returns true if `self` is strictly beyond `minimum`
    pub fn exceeds(self, minimum: SkillAdvancementClass) -> bool {
        self > minimum
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillAdvancementClass::Inactive => "inactive",
            SkillAdvancementClass::Untrained => "untrained",
            SkillAdvancementClass::Trained => "trained",
            SkillAdvancementClass::Specialized => "specialized",
        }
    }
}

impl std::str::FromStr for SkillAdvancementClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inactive" => Ok(SkillAdvancementClass::Inactive),
            "untrained" => Ok(SkillAdvancementClass::Untrained),
            "trained" => Ok(SkillAdvancementClass::Trained),
            "specialized" => Ok(SkillAdvancementClass::Specialized),
            other => Err(format!("unknown skill advancement class: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for SkillAdvancementClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

fn default_war_channel_chance() -> f64 {
    0.25
}

fn default_war_channel_timer_secs() -> u64 {
    10
}

fn default_channel_casts() -> u32 {
    1
}

/// User-tunable options for the gameplay hooks.
///
/// Missing fields fall back to their defaults on load, so a decoded record is
/// always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Chance in `[0, 1]` that a qualifying war cast channels a bonus cast
    #[serde(default = "default_war_channel_chance")]
    pub war_channel_chance: f64,

    /// Channel timer duration, used to seed a caster's first channel timestamp
    #[serde(default = "default_war_channel_timer_secs")]
    pub war_channel_timer_secs: u64,

    /// Number of bonus casts handed to the host's channel routine per proc
    #[serde(default = "default_channel_casts")]
    pub channel_casts: u32,

    /// Skill advancement a caster must exceed for over-time and channel procs
    #[serde(default)]
    pub min_skill_advancement: SkillAdvancementClass,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            war_channel_chance: default_war_channel_chance(),
            war_channel_timer_secs: default_war_channel_timer_secs(),
            channel_casts: default_channel_casts(),
            min_skill_advancement: SkillAdvancementClass::default(),
        }
    }
}
