// src/region.rs
//! Power-of-two u64 arrays addressed through `& (len - 1)`.

use crate::config::validate_array_len;
use crate::error::Result;

/// Prefill of region A.
pub const SENTINEL_A: u64 = 0xdead_beef;
/// Prefill of region B.
pub const SENTINEL_B: u64 = 0xcafe_f00d;

#[derive(Clone, Debug)]
pub struct MemoryRegion {
    words: Vec<u64>,
    mask: u64,
}

impl MemoryRegion {
    /// Fails with `InvalidConfiguration` before allocating if `len` cannot be masked.
    pub fn filled(len: u64, sentinel: u64) -> Result<Self> {
        let n = validate_array_len(len)?;
        Ok(Self { words: vec![sentinel; n], mask: len - 1 })
    }

    #[inline]
    pub fn len(&self) -> usize { self.words.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    #[inline]
    pub fn mask(&self) -> u64 { self.mask }

    /// Wraps any u64 onto a slot; never out of bounds.
    #[inline]
    pub fn slot(&self, raw: u64) -> usize { (raw & self.mask) as usize }

    #[inline]
    pub fn load(&self, raw: u64) -> u64 { self.words[self.slot(raw)] }

    #[inline]
    pub fn word_mut(&mut self, raw: u64) -> &mut u64 {
        let i = self.slot(raw);
        &mut self.words[i]
    }

    pub fn as_slice(&self) -> &[u64] { &self.words }
}
