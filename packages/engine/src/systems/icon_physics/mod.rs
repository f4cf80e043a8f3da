//! Icon physics - gravity, walls, circle contacts and sleep for floating icons
//!
//! The per-frame pipeline is driven by `simulation::step`:
//! 1. integrate (gravity, damping, motion)
//! 2. collide with walls/ceiling/floor
//! 3. resolve body/body contacts (O(n²), icon counts are small)
//! 4. contain (separation may push a body past a wall)
//! 5. sleep bookkeeping
//!
//! Pointer input (drag, wind) and resize run between frames.

mod bounds;
mod collision;
mod drag;
mod integrate;
mod resize;
mod sleep;
mod surface;
mod wind;

pub use bounds::{collide_bounds, contain};
pub use collision::{resolve_contacts, ContactStats};
pub use drag::{drag_end, drag_move, drag_start};
pub use integrate::integrate;
pub use resize::apply_resize;
pub use sleep::update_sleep;
pub use surface::{Surface, SurfaceProvider};
pub use wind::PointerTracker;
