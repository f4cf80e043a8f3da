use crate::systems::icon_physics::{collide_bounds, contain, integrate, resolve_contacts, update_sleep};

use super::{render_sync, IconWorldCore, PerfTimer};

pub(super) fn frame_at(world: &mut IconWorldCore, now_ms: f64) -> bool {
    let dt = world.clock.tick(now_ms);
    if !world.is_active() {
        return false;
    }
    step(world, dt);
    true
}

pub(super) fn step(world: &mut IconWorldCore, dt: f32) {
    if !world.is_active() || !dt.is_finite() || dt <= 0.0 {
        return;
    }
    // Tab stalls come back as one huge delta.
    let dt = dt.min(world.settings.max_dt);

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.dt = dt;
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let mut timer = perf_on.then(PerfTimer::start);

    // === 1. INTEGRATION ===
    integrate(&mut world.bodies, &world.settings, dt);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.integrate_ms = t.lap();
    }

    // === 2. WALLS / CEILING / FLOOR ===
    let wall_hits = collide_bounds(&mut world.bodies, &world.surface, &world.settings);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.bounds_ms = t.lap();
        world.perf_stats.wall_hits = wall_hits;
    }

    // === 3. BODY / BODY ===
    let contacts = resolve_contacts(&mut world.bodies, &world.settings);
    // Separation can push an icon through a wall.
    contain(&mut world.bodies, &world.surface, &world.settings);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.contacts_ms = t.lap();
        world.perf_stats.pairs_tested = contacts.pairs_tested;
        world.perf_stats.contacts = contacts.contacts;
    }

    // === 4. SLEEP ===
    let sleeping = update_sleep(&mut world.bodies, &world.settings);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.sleep_ms = t.lap();
        world.perf_stats.sleeping_bodies = sleeping;
    }

    // === 5. RENDER SYNC ===
    render_sync::sync_free_bodies(world);

    if let Some(t) = timer {
        world.perf_stats.held_bodies = world.bodies.iter().filter(|b| b.dragging).count() as u32;
        world.perf_stats.step_ms = t.total();
    }

    world.frame += 1;
}
