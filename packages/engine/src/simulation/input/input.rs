use crate::core::Vec2;
use crate::systems::icon_body::DragTracker;
use crate::systems::icon_physics::{apply_resize, drag_end, drag_move, drag_start, SurfaceProvider};

use super::render_sync;
use super::IconWorldCore;

pub(super) fn on_pointer_move(world: &mut IconWorldCore, x: f32, y: f32, now_ms: f64) -> u32 {
    if world.torn_down {
        return 0;
    }
    world
        .pointer
        .on_move(&mut world.bodies, Vec2::new(x, y), now_ms, &world.settings)
}

pub(super) fn on_pointer_leave(world: &mut IconWorldCore) {
    if world.torn_down {
        return;
    }
    world.pointer.reset();
}

pub(super) fn on_drag_start(world: &mut IconWorldCore, index: usize, x: f32, y: f32, now_ms: f64) -> bool {
    if world.torn_down {
        return false;
    }
    match world.bodies.get_mut(index) {
        Some(body) => {
            drag_start(body, Vec2::new(x, y), now_ms);
            true
        }
        None => false,
    }
}

pub(super) fn on_drag_move(world: &mut IconWorldCore, index: usize, x: f32, y: f32, now_ms: f64) {
    if world.torn_down {
        return;
    }
    let surface = world.surface;
    if let Some(body) = world.bodies.get_mut(index) {
        drag_move(body, Vec2::new(x, y), now_ms, &surface, &world.settings);
    }
}

pub(super) fn on_drag_end(world: &mut IconWorldCore, index: usize) {
    if world.torn_down {
        return;
    }
    if let Some(body) = world.bodies.get_mut(index) {
        drag_end(body, &world.settings);
    }
}

pub(super) fn on_resize<P: SurfaceProvider + ?Sized>(world: &mut IconWorldCore, provider: &P) {
    if world.torn_down {
        return;
    }
    world.surface = apply_resize(&mut world.bodies, provider, &world.settings);
    render_sync::sync_all(world);
}

pub(super) fn set_in_viewport(world: &mut IconWorldCore, visible: bool) {
    world.in_viewport = visible;
}

pub(super) fn set_page_visible(world: &mut IconWorldCore, visible: bool) {
    world.page_visible = visible;
}

pub(super) fn teardown(world: &mut IconWorldCore) {
    if world.torn_down {
        return;
    }
    world.torn_down = true;
    world.pointer.reset();
    for body in world.bodies.iter_mut() {
        body.dragging = false;
        body.drag = DragTracker::default();
    }
}
