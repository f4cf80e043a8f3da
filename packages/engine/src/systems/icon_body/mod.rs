//! IconBody - one floating icon, simulated as a circle
//!
//! Position is the circle center in surface-local pixels. The renderer
//! receives the top-left corner (center - radius) and the rotation.

mod body;
mod sleep;

pub use body::{DragTracker, IconBody, DEFAULT_ICON_WIDTH};
pub use sleep::SleepState;
