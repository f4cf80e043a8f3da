//! Folio Engine - floating tech icons and carousel snapping, in WASM
//!
//! Architecture:
//! - core/        - Vec2, seeded RNG, clamping helpers
//! - domain/      - PhysicsSettings (serde JSON overrides)
//! - systems/     - icon bodies, icon physics passes, carousel math
//! - simulation/  - IconWorld orchestration, perf stats
//! - api/         - JS-facing wrappers

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use systems::icon_body;
pub use systems::icon_physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"folio engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{CarouselSnap, IconWorld};
pub use domain::PhysicsSettings;
pub use simulation::{IconWorldCore, PerfStats, TRANSFORM_STRIDE};
