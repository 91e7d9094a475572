//! Uniform random sources for accuracy and damage rolls.
//!
//! Every roll in the resolver consumes exactly one draw in `[0, 1)`. Production
//! hosts use [`SystemSource`]; tests and replays use [`PcgSource`] with a fixed
//! seed, or [`ScriptedSource`] to force specific outcomes.
//!
//! # Determinism
//!
//! Seeded sources must produce the same sequence of draws for the same seed. A
//! fight driven by a seeded source and the same sequence of `advance` timestamps
//! always resolves identically.

/// Source of uniform random values in `[0, 1)`.
pub trait UniformSource {
    /// Returns the next draw. Values outside `[0, 1)` are clamped by the caller.
    fn next_unit(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Largest `f64` strictly below one.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Draws one value from `source`, clamped into `[0, 1)`.
///
/// NaN is treated as `0.0`.
pub fn draw_unit(source: &mut (impl UniformSource + ?Sized)) -> f64 {
    let value = source.next_unit();
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value >= 1.0 {
        BELOW_ONE
    } else {
        value
    }
}

/// Seeded PCG random source (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output. Each
/// output is scaled to `[0, 1)` by dividing by 2^32.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a source whose sequence is fully determined by `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Advances the generator and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl UniformSource for PcgSource {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Replays a fixed list of draws, cycling back to the start when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// A source that returns `value` forever.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

/// Adapts a closure returning values in `[0, 1)`.
pub struct FnSource<F>(pub F);

impl<F> UniformSource for FnSource<F>
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

impl<F> core::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// Adapter over any `rand` generator.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct RandSource<R> {
    rng: R,
}

#[cfg(feature = "std")]
impl<R: rand::RngCore> RandSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "std")]
impl<R: rand::RngCore> UniformSource for RandSource<R> {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        self.rng.r#gen::<f64>()
    }
}

/// Production source seeded from operating-system entropy.
#[cfg(feature = "std")]
pub type SystemSource = RandSource<rand::rngs::StdRng>;

#[cfg(feature = "std")]
impl RandSource<rand::rngs::StdRng> {
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }
}

#[cfg(feature = "std")]
impl Default for RandSource<rand::rngs::StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgSource::new(42);
        let mut b = PcgSource::new(42);
        let mut c = PcgSource::new(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn pcg_draws_stay_in_unit_interval() {
        let mut source = PcgSource::new(7);
        for _ in 0..10_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value), "draw {value} out of range");
        }
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.consumed(), 3);

        let mut empty = ScriptedSource::default();
        assert_eq!(empty.next_unit(), 0.0);
    }

    #[test]
    fn draw_unit_clamps_misbehaving_sources() {
        let mut high = FnSource(|| 1.5);
        let mut low = FnSource(|| -0.25);
        let mut nan = FnSource(|| f64::NAN);

        assert!(draw_unit(&mut high) < 1.0);
        assert_eq!(draw_unit(&mut low), 0.0);
        assert_eq!(draw_unit(&mut nan), 0.0);
    }

    #[test]
    fn oversized_draws_map_to_the_last_value_below_one() {
        let mut high = FnSource(|| 2.0);
        let value = draw_unit(&mut high);

        assert!(value < 1.0);
        assert_eq!(f64::from_bits(value.to_bits() + 1), 1.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn rand_source_stays_in_unit_interval() {
        use rand::SeedableRng;

        let mut source = RandSource::new(rand::rngs::StdRng::seed_from_u64(9));
        for _ in 0..1_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
