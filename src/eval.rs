use crate::config::KernelConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::ops::mix;
use crate::seed::XorShift64;

/// Mean number of output bits of `mix` that flip when one input bit flips.
/// Inputs come from a xorshift stream seeded with `seed`; every one of the 64
/// input bits is flipped for each sample. An ideal mixer scores 32; this one
/// sits near 31 because the multiply only carries upward. Zero samples score 0.
pub fn avalanche_mean(samples: usize, seed: u64) -> f64 {
    if samples == 0 { return 0.0; }
    let mut rng = XorShift64::new(seed | 1);
    let mut flips = 0u64;
    for _ in 0..samples {
        let v = rng.next_u64();
        let base = mix(v);
        for bit in 0..64 {
            flips += (base ^ mix(v ^ (1u64 << bit))).count_ones() as u64;
        }
    }
    flips as f64 / (samples as f64 * 64.0)
}

/// Reruns the mixed kernel `runs` times from scratch and compares the sinks bit for bit.
pub fn is_deterministic(cfg: KernelConfig, runs: usize) -> Result<bool> {
    let first = Engine::new(cfg)?.run_unmarked();
    for _ in 1..runs {
        if !Engine::new(cfg)?.run_unmarked().same_bits(&first) { return Ok(false); }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn mixer_flips_about_half_the_bits() {
        let m = avalanche_mean(4000, 42);
        assert!(m > 28.0 && m < 36.0, "mean flipped bits {:.3}", m);
    }

    #[test]
    fn no_samples_scores_zero() {
        assert_eq!(avalanche_mean(0, 1), 0.0);
        assert_eq!(avalanche_mean(0, 0), 0.0);
    }

    #[test]
    fn mixer_avalanche_on_independent_inputs() {
        let mut rng = StdRng::seed_from_u64(999);
        let mut total = 0u64;
        let n = 20_000usize;
        for _ in 0..n {
            let v: u64 = rng.gen();
            let bit: u32 = rng.gen_range(0..64);
            total += (mix(v) ^ mix(v ^ (1u64 << bit))).count_ones() as u64;
        }
        let mean = total as f64 / n as f64;
        assert!(mean > 28.0 && mean < 36.0, "mean flipped bits {:.3}", mean);
    }

    #[test]
    fn kernel_is_deterministic() {
        assert!(is_deterministic(KernelConfig::new(2048, 1 << 10), 3).unwrap());
        assert!(is_deterministic(KernelConfig::default(), 2).unwrap());
    }

    #[test]
    fn determinism_check_propagates_bad_config() {
        assert!(matches!(is_deterministic(KernelConfig::new(8, 12), 2), Err(KernelError::InvalidConfiguration { len: 12 })));
    }
}
