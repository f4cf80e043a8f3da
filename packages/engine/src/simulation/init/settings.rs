use crate::domain::PhysicsSettings;

use super::perf_stats::PerfStats;
use super::IconWorldCore;

pub(super) fn set_settings(world: &mut IconWorldCore, settings: PhysicsSettings) {
    world.settings = settings;
}

pub(super) fn load_settings_json(world: &mut IconWorldCore, json: &str) -> Result<(), String> {
    let settings = PhysicsSettings::from_json(json)?;
    set_settings(world, settings);
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut IconWorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &IconWorldCore) -> PerfStats {
    world.perf_stats.clone()
}
