use serde::{Serialize, Deserialize};
use crate::error::{KernelError, Result};

pub const DEFAULT_ITERATIONS: u64 = 1024;
pub const DEFAULT_ARRAY_LEN: u64 = 1 << 16;

/// Intensity parameters of the mixed kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig { pub iterations: u64, pub array_len: u64 }

impl Default for KernelConfig {
    fn default() -> Self { Self { iterations: DEFAULT_ITERATIONS, array_len: DEFAULT_ARRAY_LEN } }
}

impl KernelConfig {
    pub fn new(iterations: u64, array_len: u64) -> Self { Self { iterations, array_len } }

    /// Checked once before anything is allocated or any marker is emitted.
    pub fn validate(&self) -> Result<usize> {
        validate_array_len(self.array_len)
    }
}

/// Returns the length as `usize` when it can be used for `& (len - 1)` masking.
pub fn validate_array_len(len: u64) -> Result<usize> {
    if !len.is_power_of_two() {
        return Err(KernelError::InvalidConfiguration { len });
    }
    usize::try_from(len).map_err(|_| KernelError::InvalidConfiguration { len })
}

/// clap value parser for unsigned positional counts.
pub fn parse_count(s: &str) -> Result<u64> {
    s.parse::<u64>().map_err(|source| KernelError::ArgumentParse { value: s.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = KernelConfig::default();
        assert_eq!((c.iterations, c.array_len), (1024, 65536));
        assert_eq!(c.validate().unwrap(), 65536);
    }

    #[test]
    fn rejects_zero_and_non_powers_of_two() {
        for len in [0u64, 3, 6, 65535, 65537, u64::MAX] {
            match validate_array_len(len) {
                Err(KernelError::InvalidConfiguration { len: l }) => assert_eq!(l, len),
                other => panic!("len {} accepted: {:?}", len, other),
            }
        }
    }

    #[test]
    fn accepts_powers_of_two() {
        for shift in 0..20 { assert_eq!(validate_array_len(1 << shift).unwrap(), 1usize << shift); }
    }

    #[test]
    fn parse_count_rejects_non_numeric() {
        assert_eq!(parse_count("4096").unwrap(), 4096);
        for bad in ["", "abc", "12abc", "-1", "1.5"] {
            assert!(matches!(parse_count(bad), Err(KernelError::ArgumentParse { .. })), "{:?}", bad);
        }
    }
}
