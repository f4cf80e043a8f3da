use crate::core::Vec2;
use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

/// Idle-frame counting with enter/exit hysteresis.
///
/// Returns the number of bodies that are fully asleep afterwards.
pub fn update_sleep(bodies: &mut [IconBody], settings: &PhysicsSettings) -> u32 {
    let mut asleep = 0u32;

    for body in bodies.iter_mut() {
        if body.dragging {
            continue;
        }

        let linear_speed = body.velocity.length();
        let angular_speed = body.angular_vel.abs();

        if linear_speed > settings.linear_wake_speed || angular_speed > settings.angular_wake_speed {
            body.wake();
            continue;
        }

        let sleep = &mut body.sleep;

        if !sleep.linear {
            if linear_speed < settings.linear_sleep_speed {
                sleep.linear_frames = sleep.linear_frames.saturating_add(1);
                if sleep.linear_frames >= settings.sleep_frames {
                    sleep.linear = true;
                }
            } else {
                sleep.linear_frames = 0;
            }
        }

        if !sleep.angular {
            if angular_speed < settings.angular_sleep_speed {
                sleep.angular_frames = sleep.angular_frames.saturating_add(1);
                if sleep.angular_frames >= settings.sleep_frames {
                    sleep.angular = true;
                    body.angle = body.angle.round();
                }
            } else {
                sleep.angular_frames = 0;
            }
        }

        if body.sleep.linear {
            body.velocity = Vec2::zero();
        }
        if body.sleep.angular {
            body.angular_vel = 0.0;
        }
        if body.sleep.is_fully_asleep() {
            asleep += 1;
        }
    }

    asleep
}
