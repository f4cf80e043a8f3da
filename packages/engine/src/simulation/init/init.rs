use crate::core::Rng;
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;
use crate::systems::icon_physics::{PointerTracker, Surface};

use super::clock::FrameClock;
use super::perf_stats::PerfStats;
use super::render_sync;
use super::IconWorldCore;

pub(super) fn create_world_core(width: f32, height: f32, settings: PhysicsSettings) -> IconWorldCore {
    IconWorldCore {
        bodies: Vec::new(),
        settings,
        surface: Surface::new(width, height),
        pointer: PointerTracker::new(),
        clock: FrameClock::default(),
        in_viewport: true,
        page_visible: true,
        torn_down: false,
        transforms: Vec::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn spawn_icons(world: &mut IconWorldCore, widths: &[f32], seed: u32) -> usize {
    let mut rng = Rng::new(seed);
    let surface = world.surface;
    let settings = &world.settings;
    let floor_y = surface.floor_y(settings.floor_offset);
    let min_y = surface.height * settings.spawn_band;
    let first = world.bodies.len();

    world.bodies.reserve(widths.len());
    for &width in widths {
        let r = IconBody::radius_for_width(Some(width));
        let max_y = (floor_y - r).max(min_y + 1.0);

        let x = rng.range(r, surface.width - r);
        let y = rng.range(min_y, max_y);
        let angle = rng.range(-12.0, 12.0);
        let spin = rng.range(-20.0, 20.0);

        let mut body = IconBody::new(x, y, r).with_angle(angle, spin);
        body.pivot = (rng.range(30.0, 70.0), rng.range(30.0, 70.0));
        // The band can reach below the floor on short surfaces.
        body.pos = surface.clamp_center(body.pos, body.radius, settings.floor_offset);
        world.bodies.push(body);
    }

    render_sync::sync_all(world);
    first
}

pub(super) fn add_body(world: &mut IconWorldCore, mut body: IconBody) -> usize {
    body.pos = world
        .surface
        .clamp_center(body.pos, body.radius, world.settings.floor_offset);
    world.bodies.push(body);
    render_sync::sync_all(world);
    world.bodies.len() - 1
}
