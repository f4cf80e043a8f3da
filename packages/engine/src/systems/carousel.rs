//! Carousel - snap math for the horizontal project carousel
//!
//! The host measures card centers once (relative to the wrapper) and feeds
//! the carousel's current x offset back in; everything here is pure.

/// Drag distance (px) above which a release moves to the neighbouring card
pub const RELEASE_THRESHOLD: f32 = 3.0;
/// Distance (px) under which a snap needs no animation
pub const SNAP_EPSILON: f32 = 5.0;

const SCALE_MIN: f32 = 0.9;
const SCALE_MAX: f32 = 1.06;
const DRAG_SHRINK: f32 = 0.96;

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    /// x offset that centers card i in the wrapper
    targets: Vec<f32>,
}

impl Carousel {
    pub fn new(wrapper_width: f32, card_centers: &[f32]) -> Self {
        let half = wrapper_width * 0.5;
        Self {
            targets: card_centers.iter().map(|c| half - c).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Drag bounds (min_x, max_x): last card centered .. first card centered
    pub fn bounds(&self) -> (f32, f32) {
        match (self.targets.last(), self.targets.first()) {
            (Some(&last), Some(&first)) => (last, first),
            _ => (0.0, 0.0),
        }
    }

    /// Card whose snap target is nearest to `x`; ties go to the lower index.
    pub fn closest_index(&self, x: f32) -> usize {
        let mut closest = 0;
        let mut closest_dist = f32::INFINITY;
        for (index, &tx) in self.targets.iter().enumerate() {
            let dist = (x - tx).abs();
            if dist < closest_dist {
                closest_dist = dist;
                closest = index;
            }
        }
        closest
    }

    /// Clamp `index` into range and return it with its snap target.
    pub fn snap_target(&self, index: isize) -> Option<(usize, f32)> {
        if self.targets.is_empty() {
            return None;
        }
        let clamped = index.clamp(0, self.targets.len() as isize - 1) as usize;
        Some((clamped, self.targets[clamped]))
    }

    /// Where to go after a drag from `start_x` ended at `final_x`.
    ///
    /// Any pull beyond the small threshold advances one card in the pull
    /// direction (pulled left -> next card); otherwise snap to the nearest.
    pub fn release(&self, start_x: f32, final_x: f32) -> Option<(usize, f32)> {
        let delta = final_x - start_x;
        let current = self.closest_index(final_x) as isize;
        if delta.abs() > RELEASE_THRESHOLD {
            let direction = if delta < 0.0 { 1 } else { -1 };
            self.snap_target(current + direction)
        } else {
            self.snap_target(current)
        }
    }

    /// Arrow/keyboard navigation from the current offset.
    pub fn step_relative(&self, x: f32, step: isize) -> Option<(usize, f32)> {
        self.snap_target(self.closest_index(x) as isize + step)
    }

    /// False when `x` already sits within a few px of card `index`.
    pub fn needs_animation(&self, x: f32, index: usize) -> bool {
        match self.targets.get(index) {
            Some(&tx) => (x - tx).abs() >= SNAP_EPSILON,
            None => false,
        }
    }
}

/// Card scale from its distance to the wrapper center: 1.06 centered,
/// 0.9 at the edge, shrunk slightly while the carousel is held.
pub fn card_scale(distance: f32, half_width: f32, dragging: bool) -> f32 {
    let ratio = if half_width > 0.0 {
        (distance.abs() / half_width).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let base = SCALE_MIN + (SCALE_MAX - SCALE_MIN) * (1.0 - ratio);
    if dragging {
        base * DRAG_SHRINK
    } else {
        base
    }
}
