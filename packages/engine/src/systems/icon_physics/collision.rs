use crate::core::sign_or_pos;
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub pairs_tested: u32,
    pub contacts: u32,
}

/// Pairwise circle contacts over all bodies.
///
/// Held bodies take part: they are never moved or slowed here, but still
/// push the bodies they touch.
pub fn resolve_contacts(bodies: &mut [IconBody], settings: &PhysicsSettings) -> ContactStats {
    let mut stats = ContactStats::default();
    let len = bodies.len();

    for i in 0..len {
        for j in (i + 1)..len {
            let (head, tail) = bodies.split_at_mut(j);
            stats.pairs_tested += 1;
            if resolve_pair(&mut head[i], &mut tail[0], settings) {
                stats.contacts += 1;
            }
        }
    }

    stats
}

fn resolve_pair(a: &mut IconBody, b: &mut IconBody, settings: &PhysicsSettings) -> bool {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let radii = a.radius + b.radius;

    // Coincident centers have no usable normal.
    if dist <= 0.0 || dist >= radii + settings.collision_padding {
        return false;
    }

    let normal = delta * (1.0 / dist);
    let overlap = (radii - dist).max(0.0);

    // Each side takes half; a pinned side keeps its half and later frames
    // settle whatever is left.
    if overlap > 0.0 {
        let half = normal * (overlap * 0.5);
        if !a.is_pinned() {
            a.pos -= half;
        }
        if !b.is_pinned() {
            b.pos += half;
        }
    }

    let approach = (b.velocity - a.velocity).dot(normal);
    if approach < 0.0 {
        let j = -(1.0 + settings.restitution) * approach * 0.5;
        let impulse = normal * j;
        let spin = settings.collision_spin * sign_or_pos(normal.y);

        if !a.dragging {
            a.velocity -= impulse;
            a.angular_vel -= spin;
        }
        if !b.dragging {
            b.velocity += impulse;
            b.angular_vel += spin;
        }

        if j.abs() >= settings.wake_impulse {
            a.wake();
            b.wake();
        }
    }

    true
}
