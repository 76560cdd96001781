/// Fallback seed; xorshift never leaves the all-zero state
const DEFAULT_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seed taken from the host when running in the browser, fixed otherwise
pub fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        if seed == 0 { DEFAULT_SEED } else { seed }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_SEED
    }
}

/// Seedable generator owned by the world so runs are reproducible
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform integer in [min, max], both ends inclusive
    pub fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min + 1) as f64 + min as f64).floor() as i64
    }

    /// Uniform in [-half_width, half_width)
    pub fn symmetric(&mut self, half_width: f64) -> f64 {
        self.next_f64() * 2.0 * half_width - half_width
    }
}
