use std::path::PathBuf;
use std::sync::Arc;

use valheel_core::ValheelMod;
use valheel_core::hooks::HookError;
use valheel_core::host::{ModHost, WorldObjectRef};

use crate::sim::{SimCreature, SimHost, SimPlayer};

const PLAYER_GUID: u32 = 0x5000_0001;
const CREATURE_GUID: u32 = 0x8000_0001;

/// Holds the module under test and the simulated world around it.
pub struct CliContext {
    pub module: ValheelMod,
    pub host: Arc<SimHost>,
    pub player: SimPlayer,
    pub creature: SimCreature,
    /// Current target for casts and attacks
    pub target: Option<WorldObjectRef>,
}

impl CliContext {
    pub fn new(mod_path: impl Into<PathBuf>) -> Result<Self, HookError> {
        let host = Arc::new(SimHost::default());
        let module = ValheelMod::new(mod_path, Arc::clone(&host) as Arc<dyn ModHost>)?;
        let player = SimPlayer::new(PLAYER_GUID);
        let creature = SimCreature {
            guid: CREATURE_GUID,
            nearby: vec![player.target_ref()],
        };

        Ok(Self {
            module,
            host,
            player,
            creature,
            target: Some(WorldObjectRef::creature(CREATURE_GUID)),
        })
    }

    pub fn creature_ref(&self) -> WorldObjectRef {
        WorldObjectRef::creature(self.creature.guid)
    }
}
