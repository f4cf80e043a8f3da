use crate::core::Vec2;

use super::sleep::SleepState;

/// Width assumed for icons that report no rendered size.
pub const DEFAULT_ICON_WIDTH: f32 = 80.0;

/// Last pointer sample while a body is held. The body follows pointer
/// deltas, so this is the pointer position, not the body center.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    pub last_pointer: Vec2,
    pub last_time_ms: f64,
    /// Instantaneous drag velocity (px/s) from the latest sample
    pub velocity: Vec2,
}

/// Icon body - a circle that floats, bounces and sleeps
#[derive(Clone, Debug)]
pub struct IconBody {
    // === Physics State ===
    /// Center position (surface-local)
    pub pos: Vec2,
    /// Velocity (px/s)
    pub velocity: Vec2,
    /// Collision radius, half the rendered width
    pub radius: f32,
    /// Rotation (degrees)
    pub angle: f32,
    /// Angular velocity (degrees/s)
    pub angular_vel: f32,

    // === Rendering ===
    /// Transform origin in percent of the icon box
    pub pivot: (f32, f32),

    // === Interaction ===
    pub dragging: bool,
    pub drag: DragTracker,
    pub sleep: SleepState,
}

impl IconBody {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            radius: sanitize_radius(radius),
            angle: 0.0,
            angular_vel: 0.0,
            pivot: (50.0, 50.0),
            dragging: false,
            drag: DragTracker::default(),
            sleep: SleepState::default(),
        }
    }

    /// Radius for an icon of the given rendered width.
    pub fn radius_for_width(width: Option<f32>) -> f32 {
        match width {
            Some(w) if w.is_finite() && w > 0.0 => w * 0.5,
            _ => DEFAULT_ICON_WIDTH * 0.5,
        }
    }

    pub fn with_angle(mut self, angle: f32, angular_vel: f32) -> Self {
        self.angle = angle;
        self.angular_vel = angular_vel;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Dragging or linearly asleep bodies keep their place during separation.
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.dragging || self.sleep.linear
    }

    pub fn wake(&mut self) {
        self.sleep.wake();
    }

    /// Top-left corner for the renderer
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.pos.x - self.radius, self.pos.y - self.radius)
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = sanitize_radius(radius);
    }
}

fn sanitize_radius(radius: f32) -> f32 {
    if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        DEFAULT_ICON_WIDTH * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_falls_back_to_default_icon() {
        assert_eq!(IconBody::radius_for_width(Some(0.0)), 40.0);
        assert_eq!(IconBody::radius_for_width(None), 40.0);
        assert_eq!(IconBody::radius_for_width(Some(64.0)), 32.0);
    }

    #[test]
    fn invalid_radius_is_replaced() {
        assert_eq!(IconBody::new(0.0, 0.0, -3.0).radius, 40.0);
        assert_eq!(IconBody::new(0.0, 0.0, f32::NAN).radius, 40.0);
    }

    #[test]
    fn top_left_is_center_minus_radius() {
        let b = IconBody::new(100.0, 50.0, 20.0);
        assert_eq!(b.top_left(), Vec2::new(80.0, 30.0));
    }
}
