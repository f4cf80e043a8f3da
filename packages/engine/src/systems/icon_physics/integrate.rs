use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;
use crate::core::Vec2;

/// Gravity, damping and motion for every free body.
///
/// Sleeping axes are held at exactly zero velocity; held bodies are left to
/// the drag handlers.
pub fn integrate(bodies: &mut [IconBody], settings: &PhysicsSettings, dt: f32) {
    for body in bodies.iter_mut() {
        if body.dragging {
            continue;
        }

        if body.sleep.linear {
            body.velocity = Vec2::zero();
        } else {
            body.velocity.y += settings.gravity * dt;
            body.velocity *= settings.air_friction;
            body.pos += body.velocity * dt;
        }

        if body.sleep.angular {
            body.angular_vel = 0.0;
        } else {
            body.angular_vel *= settings.angular_friction;
            body.angle += body.angular_vel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_accelerates_free_body() {
        let settings = PhysicsSettings::default();
        let mut bodies = vec![IconBody::new(100.0, 100.0, 20.0)];
        integrate(&mut bodies, &settings, 0.01);
        let expected_vy = 2000.0 * 0.01 * 0.992;
        assert!((bodies[0].velocity.y - expected_vy).abs() < 1e-4);
        assert!(bodies[0].pos.y > 100.0);
    }

    #[test]
    fn dragging_body_ignores_gravity() {
        let settings = PhysicsSettings::default();
        let mut body = IconBody::new(100.0, 100.0, 20.0);
        body.dragging = true;
        let mut bodies = vec![body];
        integrate(&mut bodies, &settings, 0.02);
        assert_eq!(bodies[0].velocity, Vec2::zero());
        assert_eq!(bodies[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn sleeping_axes_are_zeroed_independently() {
        let settings = PhysicsSettings::default();
        let mut body = IconBody::new(100.0, 100.0, 20.0)
            .with_velocity(Vec2::new(3.0, 3.0))
            .with_angle(0.0, 10.0);
        body.sleep.linear = true;
        let mut bodies = vec![body];
        integrate(&mut bodies, &settings, 0.02);
        assert_eq!(bodies[0].velocity, Vec2::zero());
        assert_eq!(bodies[0].pos, Vec2::new(100.0, 100.0));
        assert!((bodies[0].angular_vel - 8.0).abs() < 1e-5);
    }
}
