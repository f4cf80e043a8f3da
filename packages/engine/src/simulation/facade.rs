use wasm_bindgen::prelude::*;

use crate::domain::PhysicsSettings;
use crate::systems::icon_body::IconBody;

use super::perf_stats::PerfStats;
use super::IconWorldCore;

#[wasm_bindgen]
pub struct IconWorld {
    core: IconWorldCore,
}

#[wasm_bindgen]
impl IconWorld {
    /// Create a world for an icon area of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: IconWorldCore::new(width, height),
        }
    }

    /// Create a world with a (partial) camelCase settings JSON override
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: f32, height: f32, settings_json: &str) -> Result<IconWorld, String> {
        let settings = PhysicsSettings::from_json(settings_json)?;
        Ok(Self {
            core: IconWorldCore::with_settings(width, height, settings),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.surface().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.surface().height }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn sleeping_count(&self) -> usize { self.core.sleeping_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool { self.core.is_active() }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        self.core.load_settings_json(json)
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === BODIES ===

    /// Spawn one icon per rendered width (px). Same seed, same layout.
    pub fn spawn_icons(&mut self, widths: &[f32], seed: u32) -> usize {
        self.core.spawn_icons(widths, seed)
    }

    pub fn add_body(&mut self, x: f32, y: f32, radius: f32) -> usize {
        self.core.add_body(IconBody::new(x, y, radius))
    }

    // === FRAME ===

    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    /// Call once per animation frame with `performance.now()`
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.frame_at(now_ms)
    }

    // === INPUT ===

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> u32 {
        self.core.on_pointer_move(x, y, now_ms)
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    pub fn on_drag_start(&mut self, index: usize, x: f32, y: f32, now_ms: f64) -> bool {
        self.core.on_drag_start(index, x, y, now_ms)
    }

    pub fn on_drag_move(&mut self, index: usize, x: f32, y: f32, now_ms: f64) {
        self.core.on_drag_move(index, x, y, now_ms);
    }

    pub fn on_drag_end(&mut self, index: usize) {
        self.core.on_drag_end(index);
    }

    /// New area size plus the rendered width of every icon, in body order
    pub fn resize(&mut self, width: f32, height: f32, widths: Vec<f32>) {
        self.core.on_resize(&(width, height, widths));
    }

    // === ACTIVITY ===

    pub fn set_in_viewport(&mut self, visible: bool) {
        self.core.set_in_viewport(visible);
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        self.core.set_page_visible(visible);
    }

    pub fn set_active(&mut self, active: bool) {
        self.core.set_active(active);
    }

    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    // === OUTPUT ===

    /// Copy of the packed [left, top, rotation] buffer
    pub fn transforms(&self) -> Vec<f32> {
        self.core.transforms().to_vec()
    }

    /// Pointer to the transform buffer in WASM memory (zero-copy reads)
    pub fn transforms_ptr(&self) -> u32 {
        self.core.transforms_ptr() as usize as u32
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    /// Transform origins in percent, [x, y] per body
    pub fn pivots(&self) -> Vec<f32> {
        self.core
            .bodies()
            .iter()
            .flat_map(|b| [b.pivot.0, b.pivot.1])
            .collect()
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.core.body(index).map(|b| b.dragging).unwrap_or(false)
    }
}
