/// Seeded pseudo-random source shared by every draw of a run.
///
/// The generator is SplitMix64 and the only primitive the terrain code relies on is
/// [`Rng64::next_f64_01`]. Every other draw is derived from it, so two runs with the same seed
/// consume the stream identically and produce identical canvases.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a fresh generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform float in `[0, max)`.
    pub fn uniform(&mut self, max: f64) -> f64 {
        self.next_f64_01() * max
    }

    /// Uniform float in `[-k, k)`.
    pub fn uniform_signed(&mut self, k: f64) -> f64 {
        (self.next_f64_01() * k) * 2.0 - k
    }

    /// Uniform float in `[-span, 0)`.
    pub fn uniform_negative(&mut self, span: f64) -> f64 {
        self.next_f64_01() * span - span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
