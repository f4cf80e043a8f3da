use crate::core::sign_or_pos;
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

use super::surface::Surface;

/// Bounce free bodies off the walls, the ceiling and the floor.
///
/// Returns how many bodies touched a boundary this frame.
pub fn collide_bounds(bodies: &mut [IconBody], surface: &Surface, settings: &PhysicsSettings) -> u32 {
    let floor_y = surface.floor_y(settings.floor_offset);
    let bounce = settings.wall_bounce;
    let mut hits = 0u32;

    for body in bodies.iter_mut() {
        if body.dragging {
            continue;
        }

        let r = body.radius;
        let mut hit_wall = false;

        if body.pos.x - r < 0.0 {
            body.pos.x = r;
            body.velocity.x *= -bounce;
            hit_wall = true;
        } else if body.pos.x + r > surface.width {
            body.pos.x = (surface.width - r).max(r);
            body.velocity.x *= -bounce;
            hit_wall = true;
        }

        if body.pos.y - r < 0.0 {
            body.pos.y = r;
            body.velocity.y *= -bounce;
            hit_wall = true;
        }

        if body.pos.y + r > floor_y {
            body.pos.y = (floor_y - r).max(r);
            body.velocity.y *= -bounce;
            hit_wall = true;
        }

        if hit_wall {
            let spin = (body.velocity.x.abs() + body.velocity.y.abs()) * settings.bounce_spin;
            body.angular_vel += sign_or_pos(body.velocity.x) * spin;
            hits += 1;
        }
    }

    hits
}

/// Pull every body (held ones included) back inside the surface without
/// touching velocities. Contact separation can push a body past a wall.
pub fn contain(bodies: &mut [IconBody], surface: &Surface, settings: &PhysicsSettings) {
    for body in bodies.iter_mut() {
        body.pos = surface.clamp_center(body.pos, body.radius, settings.floor_offset);
    }
}
