use crate::systems::icon_body::IconBody;

use super::IconWorldCore;

/// Floats per body in the transform buffer: left, top, rotation (deg)
pub const TRANSFORM_STRIDE: usize = 3;

/// Refresh transforms of bodies the host is not currently dragging.
pub(super) fn sync_free_bodies(world: &mut IconWorldCore) {
    ensure_len(world);
    for (body, out) in world
        .bodies
        .iter()
        .zip(world.transforms.chunks_exact_mut(TRANSFORM_STRIDE))
    {
        if !body.dragging {
            write(body, out);
        }
    }
}

/// Refresh every transform (after spawn or resize).
pub(super) fn sync_all(world: &mut IconWorldCore) {
    ensure_len(world);
    for (body, out) in world
        .bodies
        .iter()
        .zip(world.transforms.chunks_exact_mut(TRANSFORM_STRIDE))
    {
        write(body, out);
    }
}

fn ensure_len(world: &mut IconWorldCore) {
    let len = world.bodies.len() * TRANSFORM_STRIDE;
    if world.transforms.len() != len {
        world.transforms.resize(len, 0.0);
    }
}

#[inline]
fn write(body: &IconBody, out: &mut [f32]) {
    let top_left = body.top_left();
    out[0] = top_left.x;
    out[1] = top_left.y;
    out[2] = body.angle;
}
