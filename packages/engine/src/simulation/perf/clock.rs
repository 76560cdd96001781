//! Millisecond clock for the perf counters.
//!
//! In the browser this reads `performance.now()`, which has sub-millisecond
//! resolution; `Date.now()` only ticks in whole milliseconds and a small world
//! steps in microseconds. Workers without a `window` fall back to `Date.now()`.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Started when a perf-measured pass begins
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stopwatch {
    started_at: f64,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self { started_at: now_ms() }
    }

    /// Milliseconds since `start`, never negative
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at).max(0.0)
    }
}
