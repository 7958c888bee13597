//! Random sources for maze generation. The generator only sees [`RandomSource`],
//! so tests can script every draw.

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Uniform integer draws in `[0, bound)`.
pub trait RandomSource {
    fn next_in_range(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, bound: usize) -> usize {
        (**self).next_in_range(bound)
    }
}

/// Seeded sequential RNG. Same seed, same maze.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    pub fn range_usize(&mut self, max: usize) -> usize {
        (self.next_u64() % max as u64) as usize
    }
}

impl RandomSource for Rng {
    #[inline]
    fn next_in_range(&mut self, bound: usize) -> usize {
        self.range_usize(bound)
    }
}

/// Unseeded draws from the thread-local `rand` generator.
pub struct ThreadSource(rand::rngs::ThreadRng);

impl ThreadSource {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadSource {
    fn next_in_range(&mut self, bound: usize) -> usize {
        use rand::Rng as _;
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
/// Each draw is reduced modulo the requested bound.
#[derive(Clone, Debug)]
pub struct Scripted {
    draws: Vec<usize>,
    pos: usize,
}

impl Scripted {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "scripted source needs at least one draw");
        Self { draws, pos: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Scripted {
    fn next_in_range(&mut self, bound: usize) -> usize {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v % bound
    }
}
