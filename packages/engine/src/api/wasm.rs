//! JS-facing wrappers

use wasm_bindgen::prelude::*;

use crate::systems::carousel::{self, Carousel};

pub use crate::simulation::IconWorld;

/// Snap helper for the project carousel.
///
/// Snap results are returned as `[index, x]`, or an empty array when the
/// carousel has no cards.
#[wasm_bindgen(js_name = Carousel)]
pub struct CarouselSnap {
    inner: Carousel,
}

#[wasm_bindgen(js_class = Carousel)]
impl CarouselSnap {
    #[wasm_bindgen(constructor)]
    pub fn new(wrapper_width: f32, card_centers: &[f32]) -> Self {
        Self {
            inner: Carousel::new(wrapper_width, card_centers),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize { self.inner.len() }

    #[wasm_bindgen(getter)]
    pub fn min_x(&self) -> f32 { self.inner.bounds().0 }

    #[wasm_bindgen(getter)]
    pub fn max_x(&self) -> f32 { self.inner.bounds().1 }

    pub fn targets(&self) -> Vec<f32> {
        self.inner.targets().to_vec()
    }

    pub fn closest_index(&self, x: f32) -> usize {
        self.inner.closest_index(x)
    }

    pub fn snap_to(&self, index: i32) -> Vec<f32> {
        pack(self.inner.snap_target(index as isize))
    }

    pub fn release(&self, start_x: f32, final_x: f32) -> Vec<f32> {
        pack(self.inner.release(start_x, final_x))
    }

    pub fn step_relative(&self, x: f32, step: i32) -> Vec<f32> {
        pack(self.inner.step_relative(x, step as isize))
    }

    pub fn needs_animation(&self, x: f32, index: usize) -> bool {
        self.inner.needs_animation(x, index)
    }

    pub fn card_scale(distance: f32, half_width: f32, dragging: bool) -> f32 {
        carousel::card_scale(distance, half_width, dragging)
    }
}

fn pack(target: Option<(usize, f32)>) -> Vec<f32> {
    match target {
        Some((index, x)) => vec![index as f32, x],
        None => Vec::new(),
    }
}
