// src/ring.rs
//! Fixed pointer-chasing ring stored as an arena with integer links.
//!
//! Node `i` links to `(i * 73 + 19) mod size`. For a power-of-two size this
//! affine map has full period (odd increment, multiplier = 1 mod 4), so the
//! links form one cycle through every node. `PointerRing::new` walks the cycle
//! once to confirm it.

use crate::error::{KernelError, Result};

pub const RING_SIZE: usize = 1 << 12;
pub const RING_START: usize = 123;
const LINK_MUL: usize = 73;
const LINK_ADD: usize = 19;
const PAYLOAD_MUL: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingNode { pub next: u32, pub val: u64 }

/// Position in a ring. Only meaningful for the ring that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor(u32);

impl Cursor {
    pub fn index(self) -> usize { self.0 as usize }
}

#[derive(Clone, Debug)]
pub struct PointerRing { nodes: Vec<RingNode> }

#[inline]
pub fn link(i: usize, size: usize) -> usize { (i * LINK_MUL + LINK_ADD) % size }

#[inline]
pub fn payload(i: usize) -> u64 { (i as u64).wrapping_mul(PAYLOAD_MUL) ^ ((i as u64) << 7) }

impl PointerRing {
    pub fn new(size: usize) -> Result<Self> {
        if !size.is_power_of_two() || size > u32::MAX as usize {
            return Err(KernelError::InvalidConfiguration { len: size as u64 });
        }
        let nodes = (0..size)
            .map(|i| RingNode { next: link(i, size) as u32, val: payload(i) })
            .collect();
        let ring = Self { nodes };
        ring.check_single_cycle()?;
        Ok(ring)
    }

    /// Walk from node 0 until it comes back; every node must be seen exactly once.
    fn check_single_cycle(&self) -> Result<()> {
        let size = self.nodes.len();
        let mut seen = vec![false; size];
        let mut at = 0usize;
        for hops in 0..size {
            if seen[at] {
                return Err(KernelError::BrokenRing { size, visited: hops });
            }
            seen[at] = true;
            at = self.nodes[at].next as usize;
        }
        if at != 0 {
            return Err(KernelError::BrokenRing { size, visited: size });
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn cursor_at(&self, i: usize) -> Cursor { Cursor((i % self.nodes.len()) as u32) }

    #[inline]
    pub fn node(&self, c: Cursor) -> &RingNode { &self.nodes[c.index()] }

    /// Follows `hops` links; each hop is a load dependent on the previous one.
    #[inline]
    pub fn advance(&self, c: Cursor, hops: usize) -> Cursor {
        let mut at = c.0;
        for _ in 0..hops { at = self.nodes[at as usize].next; }
        Cursor(at)
    }

    #[inline]
    pub fn payload(&self, c: Cursor) -> u64 { self.node(c).val }
}
