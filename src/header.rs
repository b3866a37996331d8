use serde::{Serialize, Deserialize};
use crate::config::KernelConfig;
use crate::types::Sinks;

pub const MANIFEST_VERSION: u32 = 1;

/// Marker arguments a run was bracketed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi { pub id: u64, pub flag: u64 }

/// Everything needed to compare one run of the mixed kernel against another
/// build, machine or implementation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunHeader {
    pub version: u32,
    pub kernel: String,
    pub config: KernelConfig,
    pub roi: Roi,
    pub harness: String,
    pub checksum: String,
    pub fsum: String,
    pub fsum_bits: u64,
    pub cpu_features: String,
    pub crate_version: String,
    pub build_flags: String,
}

impl RunHeader {
    pub fn new(config: KernelConfig, roi: Roi, harness: &str, sinks: &Sinks) -> Self {
        let cpu = format!("sse2:{} avx2:{} avx512f:{} neon:{}",
                          cfg!(target_feature = "sse2"),
                          cfg!(target_feature = "avx2"),
                          cfg!(target_feature = "avx512f"),
                          cfg!(target_feature = "neon"));
        Self {
            version: MANIFEST_VERSION,
            kernel: "mixed".to_string(),
            config,
            roi,
            harness: harness.to_string(),
            checksum: format!("{:x}", sinks.checksum),
            fsum: format!("{:.6}", sinks.fsum),
            fsum_bits: sinks.fsum.to_bits(),
            cpu_features: cpu,
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            build_flags: std::env::var("RUSTFLAGS").unwrap_or_default(),
        }
    }

    /// Same configuration and bit-identical sinks. Build metadata is ignored.
    pub fn matches(&self, other: &RunHeader) -> bool {
        self.kernel == other.kernel
            && self.config == other.config
            && self.checksum == other.checksum
            && self.fsum_bits == other.fsum_bits
    }
}
