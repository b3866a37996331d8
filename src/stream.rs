// src/stream.rs
//! Streaming triad over three f64 arrays: `A[i] = B[i] + s * C[i]`.

use tracing::warn;
use crate::harness::{bracket, Harness, DEFAULT_ROI_FLAG, DEFAULT_ROI_ID};

pub const DEFAULT_LENGTH: u64 = 1024;
pub const DEFAULT_STRIDE: u64 = 1;

#[derive(Clone, Debug)]
pub struct StreamArrays { pub a: Vec<f64>, pub b: Vec<f64>, pub c: Vec<f64> }

impl StreamArrays {
    pub fn new(len: usize) -> Self {
        Self { a: vec![0.0; len], b: vec![1.0; len], c: vec![2.0; len] }
    }

    /// One strided pass; returns the running sum of every written element.
    pub fn triad(&mut self, stride: usize, s: f64) -> f64 {
        let mut checksum = 0.0f64;
        for i in (0..self.a.len()).step_by(stride) {
            self.a[i] = self.b[i] + s * self.c[i];
            checksum += self.a[i];
        }
        checksum
    }
}

/// A zero stride is treated as 1.
pub fn effective_stride(stride: u64) -> usize {
    if stride == 0 {
        warn!("stride should be at least 1, using 1");
        1
    } else {
        stride as usize
    }
}

/// Allocation outside the markers, one bracketed pass.
pub fn run_stream<H: Harness + ?Sized>(harness: &mut H, length: u64, stride: u64) -> f64 {
    let stride = effective_stride(stride);
    let mut arrays = StreamArrays::new(length as usize);
    bracket(harness, DEFAULT_ROI_ID, DEFAULT_ROI_FLAG, || arrays.triad(stride, 1.0))
}

pub fn stream_line(checksum: f64) -> String { format!("stream_checksum {:.6}", checksum) }
