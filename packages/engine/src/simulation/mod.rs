//! IconWorld - the floating-icons simulation instance
//!
//! One world per mounted icon area. It owns the bodies, the settings and the
//! surface size; the host drives it with frame timestamps, pointer events,
//! resize measurements and visibility changes, then reads back a packed
//! transform buffer.
//!
//! Physics lives in systems/icon_physics; this module only orchestrates.

use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;
use crate::systems::icon_physics::{PointerTracker, Surface};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/clock.rs"]
mod clock;
#[path = "step/step.rs"]
mod step;
#[path = "step/render_sync.rs"]
mod render_sync;
#[path = "input/input.rs"]
mod input;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::IconWorld;
pub use perf_stats::PerfStats;
pub use render_sync::TRANSFORM_STRIDE;

use clock::FrameClock;
use perf_timer::PerfTimer;

/// The simulation world
pub struct IconWorldCore {
    bodies: Vec<IconBody>,
    settings: PhysicsSettings,
    surface: Surface,

    // Input
    pointer: PointerTracker,
    clock: FrameClock,

    // Activity gate (both must hold for frames to run)
    in_viewport: bool,
    page_visible: bool,
    torn_down: bool,

    // Output: [left, top, rotation] per body
    transforms: Vec<f32>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl IconWorldCore {
    /// Create an empty world for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height, PhysicsSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, settings: PhysicsSettings) -> Self {
        init::create_world_core(width, height, settings)
    }

    pub fn surface(&self) -> Surface { self.surface }

    pub fn settings(&self) -> &PhysicsSettings { &self.settings }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn body(&self, index: usize) -> Option<&IconBody> { self.bodies.get(index) }

    pub fn bodies(&self) -> &[IconBody] { &self.bodies }

    pub fn sleeping_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.sleep.is_fully_asleep()).count()
    }

    pub fn set_settings(&mut self, settings: PhysicsSettings) {
        settings::set_settings(self, settings);
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODIES ===

    /// Spawn one icon per rendered width at random spots in the lower band.
    /// Returns the index of the first new body.
    pub fn spawn_icons(&mut self, widths: &[f32], seed: u32) -> usize {
        init::spawn_icons(self, widths, seed)
    }

    /// Place a body explicitly; it is clamped into the surface.
    /// Returns its index.
    pub fn add_body(&mut self, body: IconBody) -> usize {
        init::add_body(self, body)
    }

    // === FRAME ===

    /// Advance by `dt` seconds (clamped to `max_dt`).
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Per-frame entry point: advances the clock, then steps unless the
    /// world is paused. Returns whether a step ran.
    pub fn frame_at(&mut self, now_ms: f64) -> bool {
        step::frame_at(self, now_ms)
    }

    // === INPUT ===

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> u32 {
        input::on_pointer_move(self, x, y, now_ms)
    }

    pub fn on_pointer_leave(&mut self) {
        input::on_pointer_leave(self);
    }

    pub fn on_drag_start(&mut self, index: usize, x: f32, y: f32, now_ms: f64) -> bool {
        input::on_drag_start(self, index, x, y, now_ms)
    }

    pub fn on_drag_move(&mut self, index: usize, x: f32, y: f32, now_ms: f64) {
        input::on_drag_move(self, index, x, y, now_ms);
    }

    pub fn on_drag_end(&mut self, index: usize) {
        input::on_drag_end(self, index);
    }

    /// Re-measure surface and icons through `provider`.
    pub fn on_resize<P: crate::systems::icon_physics::SurfaceProvider + ?Sized>(&mut self, provider: &P) {
        input::on_resize(self, provider);
    }

    // === ACTIVITY ===

    pub fn set_in_viewport(&mut self, visible: bool) {
        input::set_in_viewport(self, visible);
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        input::set_page_visible(self, visible);
    }

    /// Set both visibility conditions at once.
    pub fn set_active(&mut self, active: bool) {
        input::set_in_viewport(self, active);
        input::set_page_visible(self, active);
    }

    pub fn is_active(&self) -> bool {
        !self.torn_down && self.in_viewport && self.page_visible
    }

    /// Stop reacting to frames and input. Safe to call more than once.
    pub fn teardown(&mut self) {
        input::teardown(self);
    }

    pub fn is_torn_down(&self) -> bool { self.torn_down }

    // === OUTPUT ===

    /// Packed [left, top, rotation] per body, refreshed each step for
    /// bodies that are not held.
    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
