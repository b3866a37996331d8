//! Scalar building blocks of the mixed kernel.
//!
//! `mix` and `poly_approx` are `#[inline(never)]` so each call stays a real call
//! in the measured instruction stream.

/// Multiplier of the avalanche mixer.
pub const MIX_MUL: u64 = 0x2127_599b_f432_5c37;

/// 64-bit avalanche mixer (shift-xor, multiply, shift-xor). Branch free.
#[inline(never)]
pub fn mix(v: u64) -> u64 {
    let mut v = v;
    v ^= v >> 23;
    v = v.wrapping_mul(MIX_MUL);
    v ^= v >> 47;
    v
}

/// `z + 0.5 z^2 - 0.1 z^3 + 0.01 z^4`, grouped exactly as below. The grouping
/// fixes both the operation count and the rounding sequence.
#[inline(never)]
pub fn poly_approx(z: f64) -> f64 {
    let z2 = z * z;
    z + 0.5 * z2 + (-0.1) * z2 * z + 0.01 * z2 * z2
}

/// Sum of the eight bytes of `v * 0x0101010101010101`, extracted one at a time.
#[inline]
pub fn byte_sum(v: u64) -> u64 {
    let t = v.wrapping_mul(0x0101_0101_0101_0101);
    (t >> 56)
        + ((t >> 48) & 0xFF)
        + ((t >> 40) & 0xFF)
        + ((t >> 32) & 0xFF)
        + ((t >> 24) & 0xFF)
        + ((t >> 16) & 0xFF)
        + ((t >> 8) & 0xFF)
        + (t & 0xFF)
}

/// Float to u64 truncation. Out-of-range values saturate, NaN maps to 0.
#[inline]
pub fn trunc_u64(f: f64) -> u64 { f as u64 }
