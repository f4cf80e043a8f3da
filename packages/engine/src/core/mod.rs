//! Core math shared by the physics and carousel systems

pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;

/// Clamp that tolerates an inverted range (surface smaller than the body):
/// the lower bound wins.
#[inline]
pub fn clamp_span(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// +1 for zero and positive values, matching how spin direction is picked.
#[inline]
pub fn sign_or_pos(v: f32) -> f32 {
    if v >= 0.0 { 1.0 } else { -1.0 }
}
