/// Converts host frame timestamps (ms) into step deltas (s).
///
/// Ticks while the world is paused too, so the first frame after resuming
/// does not see the whole pause as one delta.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub(crate) fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
