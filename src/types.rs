use std::fmt;

/// Register-like state mutated every tick and read only once the loop is done.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputeState {
    pub a: u64, pub b: u64, pub c: u64, pub d: u64,
    pub x: f64, pub y: f64, pub z: f64,
}

impl Default for ComputeState {
    fn default() -> Self {
        Self { a: 1, b: 2, c: 3, d: 4, x: 1.0, y: 2.0, z: 0.5 }
    }
}

/// Write-mostly accumulators that keep every tick's results observable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sinks { pub checksum: u64, pub fsum: f64 }

impl Sinks {
    /// Bitwise equality, so NaN sums compare equal to themselves.
    pub fn same_bits(&self, other: &Sinks) -> bool {
        self.checksum == other.checksum && self.fsum.to_bits() == other.fsum.to_bits()
    }
}

/// `checksum=<hex> fsum=<6 fractional digits>`, the kernel's only stdout line.
impl fmt::Display for Sinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "checksum={:x} fsum={:.6}", self.checksum, self.fsum)
    }
}
