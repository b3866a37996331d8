// src/harness.rs
//! Region-of-interest markers for an external measurement harness.
//!
//! `bracket` is the only way the kernels reach a harness: it issues
//! `region_begin`, runs the measured closure, issues `region_end`, and puts a
//! SeqCst compiler fence on each side of both calls so no work in the closure
//! is scheduled outside the markers.

use std::sync::atomic::{compiler_fence, Ordering};
use tracing::debug;

/// Marker arguments used by every kernel unless overridden.
pub const DEFAULT_ROI_ID: u64 = 0;
pub const DEFAULT_ROI_FLAG: u64 = 0;

pub trait Harness {
    fn name(&self) -> &'static str;
    fn region_begin(&mut self, id: u64, flag: u64);
    fn region_end(&mut self, id: u64, flag: u64);
}

/// Runs `work` strictly between one begin and one end marker.
pub fn bracket<H, T, F>(harness: &mut H, id: u64, flag: u64, work: F) -> T
where
    H: Harness + ?Sized,
    F: FnOnce() -> T,
{
    compiler_fence(Ordering::SeqCst);
    harness.region_begin(id, flag);
    compiler_fence(Ordering::SeqCst);
    let out = work();
    compiler_fence(Ordering::SeqCst);
    harness.region_end(id, flag);
    compiler_fence(Ordering::SeqCst);
    out
}

/// Default harness: markers only show up in the debug log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceHarness;

impl Harness for TraceHarness {
    fn name(&self) -> &'static str { "trace" }
    fn region_begin(&mut self, id: u64, flag: u64) { debug!(id, flag, "ROI begin"); }
    fn region_end(&mut self, id: u64, flag: u64) { debug!(id, flag, "ROI end"); }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker { Begin, End }

/// Keeps every marker call in order; used to check bracketing.
#[derive(Clone, Debug, Default)]
pub struct RecordingHarness { pub calls: Vec<(Marker, u64, u64)> }

impl Harness for RecordingHarness {
    fn name(&self) -> &'static str { "recording" }
    fn region_begin(&mut self, id: u64, flag: u64) { self.calls.push((Marker::Begin, id, flag)); }
    fn region_end(&mut self, id: u64, flag: u64) { self.calls.push((Marker::End, id, flag)); }
}

#[cfg(feature = "m5")]
mod m5 {
    extern "C" {
        pub fn m5_work_begin(workid: u64, threadid: u64);
        pub fn m5_work_end(workid: u64, threadid: u64);
    }
}

/// gem5 pseudo-instructions; the simulator resets stats on begin and dumps them on end.
#[cfg(feature = "m5")]
#[derive(Clone, Copy, Debug, Default)]
pub struct M5Harness;

#[cfg(feature = "m5")]
impl Harness for M5Harness {
    fn name(&self) -> &'static str { "m5" }
    fn region_begin(&mut self, id: u64, flag: u64) {
        // SAFETY: plain C call into libm5, no pointers exchanged.
        unsafe { m5::m5_work_begin(id, flag) }
    }
    fn region_end(&mut self, id: u64, flag: u64) {
        // SAFETY: as above.
        unsafe { m5::m5_work_end(id, flag) }
    }
}

/// Harness the binaries use: gem5 markers when built with `m5`, log markers otherwise.
#[cfg(feature = "m5")]
pub fn default_harness() -> Box<dyn Harness> { Box::new(M5Harness) }

#[cfg(not(feature = "m5"))]
pub fn default_harness() -> Box<dyn Harness> { Box::new(TraceHarness) }
