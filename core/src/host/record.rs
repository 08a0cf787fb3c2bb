//! Damage history records

use super::entity::WorldObjectRef;

/// One attacker's contribution to the damage a creature has taken
#[derive(Debug, Clone, PartialEq)]
pub struct DamageHistoryInfo {
    pub attacker: WorldObjectRef,
    /// Whether the attacker's extended details (owner, pet, etc.) are captured
    pub attacker_details: bool,
    pub total_damage: f32,
}

impl DamageHistoryInfo {
    /// Host's two-argument form. Leaves attacker details out.
    pub fn new(attacker: WorldObjectRef, total_damage: f32) -> Self {
        Self::with_details(attacker, false, total_damage)
    }

    pub fn with_details(attacker: WorldObjectRef, attacker_details: bool, total_damage: f32) -> Self {
        Self {
            attacker,
            attacker_details,
            total_damage,
        }
    }
}
