// src/engine.rs
//! The mixed kernel: integer chains, FP recurrence, PRNG-driven branches,
//! two masked memory regions and a pointer ring, all in one serial tick.

use std::io::Write;
use std::path::Path;

use tracing::{debug, error, info};

use crate::config::KernelConfig;
use crate::error::Result;
use crate::harness::{bracket, Harness};
use crate::header::{Roi, RunHeader};
use crate::ops::{byte_sum, mix, poly_approx, trunc_u64};
use crate::region::{MemoryRegion, SENTINEL_A, SENTINEL_B};
use crate::ring::{Cursor, PointerRing, RING_SIZE, RING_START};
use crate::seed::XorShift64;
use crate::types::{ComputeState, Sinks};

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;
const PCG_MUL: u64 = 0x5851_f42d_4c95_7f2d;

pub struct Engine {
    cfg: KernelConfig,
    state: ComputeState,
    rng: XorShift64,
    mem_a: MemoryRegion,
    mem_b: MemoryRegion,
    ring: PointerRing,
    cursor: Cursor,
    sinks: Sinks,
}

impl Engine {
    /// Validates the config, then allocates regions and builds the ring.
    pub fn new(cfg: KernelConfig) -> Result<Self> {
        cfg.validate()?;
        let mem_a = MemoryRegion::filled(cfg.array_len, SENTINEL_A)?;
        let mem_b = MemoryRegion::filled(cfg.array_len, SENTINEL_B)?;
        let ring = PointerRing::new(RING_SIZE)?;
        let cursor = ring.cursor_at(RING_START);
        debug!(array_len = cfg.array_len, ring = ring.len(), "engine ready");
        Ok(Self {
            cfg,
            state: ComputeState::default(),
            rng: XorShift64::for_run(cfg.iterations, cfg.array_len),
            mem_a, mem_b, ring, cursor,
            sinks: Sinks::default(),
        })
    }

    pub fn config(&self) -> KernelConfig { self.cfg }
    pub fn state(&self) -> &ComputeState { &self.state }
    pub fn sinks(&self) -> Sinks { self.sinks }
    pub fn cursor(&self) -> Cursor { self.cursor }
    pub fn region_a(&self) -> &MemoryRegion { &self.mem_a }
    pub fn region_b(&self) -> &MemoryRegion { &self.mem_b }

    /// One tick. The step order is part of the workload and must not change.
    #[inline]
    pub fn tick(&mut self) {
        let s = &mut self.state;

        // 1) serial integer chain
        s.a = s.a.wrapping_add(s.b);
        s.b = s.b.wrapping_add(s.c);
        s.c = s.c.wrapping_add(s.d);
        s.d = s.d.wrapping_add(s.a);
        s.a = s.a.wrapping_add(s.a.wrapping_add(s.b));
        s.b = s.b.wrapping_add(s.b.wrapping_add(s.c));
        s.c = s.c.wrapping_add(s.c.wrapping_add(s.d));
        s.d = s.d.wrapping_add(s.d.wrapping_add(s.a));

        // 2) FP recurrence
        s.x = s.x * 1.0000001 + 0.1;
        s.y = s.y * 0.9999999 + 0.2;
        s.z = poly_approx((s.x - s.y) * 0.0001 + s.z);

        // 3) PRNG + mix folded into the integer state
        let r = self.rng.next_u64();
        let p = mix(r ^ trunc_u64(s.x) ^ trunc_u64(s.y));
        s.a ^= p.rotate_left((r & 63) as u32);
        s.b = s.b.wrapping_add(p ^ s.a.rotate_left(17));
        s.c = s.c.wrapping_mul(GOLDEN).wrapping_add(s.d ^ (p >> 13));
        s.d ^= s.a.wrapping_add(s.b).wrapping_add(s.c) | (p << 3);

        // 4) 50/50 branch on the low PRNG bit
        if r & 1 != 0 {
            let idx = r ^ s.a ^ (s.a >> 7);
            let w = self.mem_a.word_mut(idx);
            *w = mix(w.wrapping_add(s.a).wrapping_add(r << 5));
            s.x += (*w & 0xFFFF) as f64 * 1e-6;
            self.cursor = self.ring.advance(self.cursor, 2);
            s.a ^= self.ring.payload(self.cursor);
        } else {
            let idx = r.wrapping_add(s.b).wrapping_add(s.b << 9);
            let w = self.mem_b.word_mut(idx);
            *w ^= r.wrapping_mul(PCG_MUL) ^ s.b;
            s.y += ((*w >> 8) & 0xFFFF) as f64 * 1e-6;
            self.cursor = self.ring.advance(self.cursor, 3);
            s.b = s.b.wrapping_add(self.ring.payload(self.cursor));
        }

        // 5) four-way dispatch
        match (r >> 1) & 3 {
            0 => {
                s.c ^= (s.c << 7) ^ (s.c >> 9);
                s.x += s.x * 1.0000001 + 0.1;
            }
            1 => {
                s.d = s.d.wrapping_add((s.d << 5) | (s.d >> 11));
                s.y += s.y * 0.9999999 + 0.2;
            }
            2 => {
                s.a = s.a.wrapping_add((s.a ^ s.b).wrapping_add(mix(s.c)));
                s.z = poly_approx(s.z + 1e-4);
            }
            _ => {
                s.b ^= s.a.wrapping_add(s.c).wrapping_add(s.d);
                s.x += s.y * 1e-7;
            }
        }

        // 6) memory feedback couples this tick to earlier ones
        let feed = self.mem_a.load(s.a ^ r) ^ self.mem_b.load(s.b.wrapping_add(r));
        s.a = s.a.wrapping_add(feed);
        s.d ^= feed.rotate_left(29);

        // 7) byte-sum digest
        s.c = s.c.wrapping_add(byte_sum(s.a ^ s.b ^ s.c ^ s.d));

        // 8) sinks
        self.sinks.checksum ^= s.a
            .wrapping_add(s.b << 1)
            .wrapping_add(s.c << 2)
            .wrapping_add(s.d << 3);
        self.sinks.fsum += s.x + s.y + s.z * 1e-3;
    }

    /// Runs exactly `iterations` ticks with no markers.
    pub fn run_unmarked(&mut self) -> Sinks {
        for _ in 0..self.cfg.iterations { self.tick(); }
        self.sinks
    }

    /// Runs exactly `iterations` ticks between one pair of ROI markers.
    pub fn run<H: Harness + ?Sized>(&mut self, harness: &mut H, id: u64, flag: u64) -> Sinks {
        info!(iterations = self.cfg.iterations, array_len = self.cfg.array_len, harness = harness.name(), "running mixed kernel");
        let sinks = bracket(harness, id, flag, || self.run_unmarked());
        debug!(?sinks, cursor = self.cursor.index(), "mixed kernel done");
        sinks
    }
}

/// Build, run and return the sinks of one bracketed run.
pub fn run_kernel<H: Harness + ?Sized>(cfg: KernelConfig, harness: &mut H, id: u64, flag: u64) -> Result<Sinks> {
    let mut engine = Engine::new(cfg)?;
    Ok(engine.run(harness, id, flag))
}

/// Runs the mixed kernel, writes the result line to `out`, then optionally
/// saves a manifest and compares against an expected one. The expected
/// manifest is loaded before the first marker call so an unreadable file
/// never opens a region. Returns `Ok(false)` on a mismatch.
pub fn run_with_manifest<H: Harness + ?Sized, W: Write>(
    cfg: KernelConfig,
    roi: Roi,
    harness: &mut H,
    out: &mut W,
    manifest: Option<&Path>,
    expect: Option<&Path>,
) -> Result<bool> {
    cfg.validate()?;
    let expected = expect.map(RunHeader::load).transpose()?;

    let mut engine = Engine::new(cfg)?;
    let sinks = engine.run(harness, roi.id, roi.flag);
    writeln!(out, "{}", sinks)?;

    let header = RunHeader::new(cfg, roi, harness.name(), &sinks);
    if let Some(path) = manifest { header.save(path)?; }
    match expected {
        Some(exp) if !exp.matches(&header) => {
            error!(expected_checksum = %exp.checksum, expected_fsum = %exp.fsum,
                   checksum = %header.checksum, fsum = %header.fsum, "run does not match manifest");
            Ok(false)
        }
        _ => Ok(true),
    }
}
