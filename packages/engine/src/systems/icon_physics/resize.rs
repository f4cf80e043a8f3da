use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

use super::surface::{Surface, SurfaceProvider};

/// Re-measure the surface and every icon, then settle bodies into the new
/// bounds. Returns the new surface.
///
/// Positions and radii are a pure function of the measurements, so repeating
/// the call with unchanged layout does not drift.
pub fn apply_resize<P: SurfaceProvider + ?Sized>(
    bodies: &mut [IconBody],
    provider: &P,
    settings: &PhysicsSettings,
) -> Surface {
    let (width, height) = provider.surface_size();
    let surface = Surface::new(width, height);

    for (index, body) in bodies.iter_mut().enumerate() {
        body.set_radius(IconBody::radius_for_width(provider.rendered_width(index)));

        let before = body.pos;
        body.pos = surface.clamp_center(body.pos, body.radius, settings.floor_offset);

        body.wake();
        body.velocity *= 0.5;
        body.angular_vel *= 0.5;

        if body.pos.y < before.y {
            body.velocity.y += settings.resize_nudge;
        }
    }

    surface
}
