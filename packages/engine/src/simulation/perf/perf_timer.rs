/// Milliseconds from a monotonic-enough source: `Date.now()` in the browser,
/// `Instant` everywhere else.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for the phases of one step. `lap` reports the time since the
/// previous lap, `total` the time since `start`.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    origin_ms: f64,
    lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { origin_ms: now, lap_ms: now }
    }

    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let elapsed = now - self.lap_ms;
        self.lap_ms = now;
        elapsed.max(0.0)
    }

    pub(crate) fn total(&self) -> f64 {
        (now_ms() - self.origin_ms).max(0.0)
    }
}
