use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) bounds_ms: f64,
    pub(super) contacts_ms: f64,
    pub(super) sleep_ms: f64,
    pub(super) dt: f32,
    pub(super) body_count: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) wall_hits: u32,
    pub(super) sleeping_bodies: u32,
    pub(super) held_bodies: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn contacts_ms(&self) -> f64 { self.contacts_ms }
    #[wasm_bindgen(getter)]
    pub fn sleep_ms(&self) -> f64 { self.sleep_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn sleeping_bodies(&self) -> u32 { self.sleeping_bodies }
    #[wasm_bindgen(getter)]
    pub fn held_bodies(&self) -> u32 { self.held_bodies }
}
