/// Base constant every stream seed is derived from.
pub const SEED_BASE: u64 = 0x0123_4567_89ab_cdef;

/// xorshift64 (13, 7, 17) for control-flow and index selection (tiny, portable, reproducible).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XorShift64 { state: u64 }

impl XorShift64 {
    pub fn new(seed: u64) -> Self { Self { state: seed } }

    /// Seed a stream from the run's intensity parameters so that distinct
    /// (iterations, array size) pairs start at distinct points.
    pub fn for_run(iterations: u64, array_len: u64) -> Self {
        Self::new(SEED_BASE ^ (iterations << 32) ^ array_len)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        self.state = s;
        s
    }

    pub fn state(&self) -> u64 { self.state }
}
