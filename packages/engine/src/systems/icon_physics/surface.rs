use crate::core::{clamp_span, Vec2};

/// Size of the area the icons live in (surface-local pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Negative or NaN sizes collapse to zero; bodies are then clamped to
    /// their radius instead of failing.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn floor_y(&self, floor_offset: f32) -> f32 {
        (self.height - floor_offset).max(0.0)
    }

    /// Nearest center position that keeps a circle of `radius` inside the
    /// walls, ceiling and floor.
    pub fn clamp_center(&self, pos: Vec2, radius: f32, floor_offset: f32) -> Vec2 {
        Vec2::new(
            clamp_span(pos.x, radius, self.width - radius),
            clamp_span(pos.y, radius, self.floor_y(floor_offset) - radius),
        )
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Source of layout measurements, queried only when the host reports a resize.
pub trait SurfaceProvider {
    /// Current (width, height) of the icon area
    fn surface_size(&self) -> (f32, f32);

    /// Rendered width of icon `index`, `None` if it has no layout yet
    fn rendered_width(&self, index: usize) -> Option<f32>;
}

impl SurfaceProvider for (f32, f32, Vec<f32>) {
    fn surface_size(&self) -> (f32, f32) {
        (self.0, self.1)
    }

    fn rendered_width(&self, index: usize) -> Option<f32> {
        self.2.get(index).copied()
    }
}
