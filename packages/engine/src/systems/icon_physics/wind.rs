use crate::core::Vec2;
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

/// Tracks pointer samples between move events to derive pointer speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    last: Option<(Vec2, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last sample (pointer left the surface).
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record a pointer sample and, if the pointer moved fast enough, blow
    /// nearby free bodies away from it.
    ///
    /// Returns the number of bodies that received an impulse.
    pub fn on_move(
        &mut self,
        bodies: &mut [IconBody],
        pointer: Vec2,
        now_ms: f64,
        settings: &PhysicsSettings,
    ) -> u32 {
        let previous = self.last.replace((pointer, now_ms));
        let Some((last_pos, last_ms)) = previous else {
            return 0;
        };

        let dt = ((now_ms - last_ms) / 1000.0) as f32;
        if dt <= 0.0 {
            return 0;
        }

        let speed = last_pos.distance(pointer) / dt;
        if speed <= settings.wind_speed {
            return 0;
        }

        apply_wind(bodies, pointer, speed, settings)
    }
}

fn apply_wind(bodies: &mut [IconBody], pointer: Vec2, speed: f32, settings: &PhysicsSettings) -> u32 {
    let radius = settings.wind_radius;
    let mut pushed = 0u32;

    for body in bodies.iter_mut() {
        if body.dragging {
            continue;
        }

        let away = body.pos - pointer;
        let dist = away.length();
        if dist <= 0.0 || dist >= radius {
            continue;
        }

        let influence = (radius - dist) / radius;
        let force = influence * (speed / 1000.0) * settings.wind_strength;
        let normal = away * (1.0 / dist);

        body.velocity += normal * force;
        body.angular_vel += (normal.x + normal.y) * settings.wind_spin * influence;
        body.wake();
        pushed += 1;
    }

    pushed
}
