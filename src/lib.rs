//! roi_kernels — deterministic CPU/memory pressure kernels for simulator and
//! hardware profiling, each bracketed by region-of-interest markers.
//!
//! Modules:
//! - `seed`: xorshift64 stream and run seeding.
//! - `ops`: avalanche mixer, quartic polynomial, byte-sum digest.
//! - `region`: power-of-two masked u64 arrays.
//! - `ring`: 4096-node pointer-chasing ring (arena + indices).
//! - `engine`: the mixed kernel tick and bracketed run.
//! - `harness`: ROI marker trait, trace/recording/gem5 harnesses.
//! - `header` / `persist`: JSON run manifest for regression replay.
//! - `eval`: determinism and avalanche checks.
//! - `stream`, `chase`, `compute`, `probe`: single-purpose sibling kernels.

pub mod error;
pub mod config;
pub mod seed;
pub mod ops;
pub mod region;
pub mod ring;
pub mod types;
pub mod harness;
pub mod engine;
pub mod header;
pub mod persist;
pub mod eval;
pub mod stream;
pub mod chase;
pub mod compute;
pub mod probe;
pub mod cli;

pub use error::{KernelError, Result};
pub use config::{KernelConfig, parse_count};
pub use types::{ComputeState, Sinks};
pub use engine::{Engine, run_kernel, run_with_manifest};
pub use harness::{bracket, default_harness, Harness, RecordingHarness, TraceHarness};
pub use header::{Roi, RunHeader};
