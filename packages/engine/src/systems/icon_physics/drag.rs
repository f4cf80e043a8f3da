use crate::core::{sign_or_pos, Vec2};
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::{DragTracker, IconBody};

use super::surface::Surface;

/// Pointer grabbed the body at `pointer` (surface-local).
pub fn drag_start(body: &mut IconBody, pointer: Vec2, now_ms: f64) {
    body.dragging = true;
    body.wake();
    body.velocity = Vec2::zero();
    body.angular_vel *= 0.5;
    body.drag = DragTracker {
        last_pointer: pointer,
        last_time_ms: now_ms,
        velocity: Vec2::zero(),
    };
}

/// Follow the pointer by its delta since the previous sample, so a grab
/// off-center does not make the icon jump.
pub fn drag_move(
    body: &mut IconBody,
    pointer: Vec2,
    now_ms: f64,
    surface: &Surface,
    settings: &PhysicsSettings,
) {
    if !body.dragging {
        return;
    }

    let elapsed = ((now_ms - body.drag.last_time_ms) / 1000.0) as f32;
    let dt = elapsed.max(settings.min_drag_dt);
    let delta = pointer - body.drag.last_pointer;

    body.drag.velocity = delta * (1.0 / dt);
    body.drag.last_pointer = pointer;
    body.drag.last_time_ms = now_ms;

    body.pos = surface.clamp_center(body.pos + delta, body.radius, settings.floor_offset);
    // Keeps neighbours reacting to the held icon.
    body.velocity = body.drag.velocity * settings.drag_push;
}

/// Pointer let go: throw the body if the last drag sample was fast enough.
pub fn drag_end(body: &mut IconBody, settings: &PhysicsSettings) {
    if !body.dragging {
        return;
    }
    body.dragging = false;

    let drag_velocity = body.drag.velocity;
    let speed = drag_velocity.length();

    if speed > settings.min_release_speed {
        let norm = speed / settings.release_norm_speed;
        let boost = (settings.release_boost_base + norm * settings.release_boost_gain)
            .clamp(settings.release_boost_min, settings.release_boost_max);

        body.velocity = drag_velocity * boost;
        body.angular_vel += sign_or_pos(drag_velocity.x) * speed * settings.spin_factor;
    } else {
        body.velocity = Vec2::zero();
    }

    body.drag = DragTracker::default();
}
