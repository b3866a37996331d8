// src/compute.rs
//! Minimal compute loop: one integer add chain and two FP recurrences.

use crate::harness::{bracket, Harness, DEFAULT_ROI_FLAG, DEFAULT_ROI_ID};

pub const DEFAULT_ITERATIONS: u64 = 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleState { pub a: u64, pub b: u64, pub c: u64, pub d: u64, pub x: f64, pub y: f64 }

impl Default for SimpleState {
    fn default() -> Self { Self { a: 1, b: 2, c: 3, d: 4, x: 1.0, y: 2.0 } }
}

impl SimpleState {
    #[inline]
    pub fn step(&mut self) {
        self.a = self.a.wrapping_add(self.b);
        self.b = self.b.wrapping_add(self.c);
        self.c = self.c.wrapping_add(self.d);
        self.d = self.d.wrapping_add(self.a);
        self.x = self.x * 1.0000001 + 0.1;
        self.y = self.y * 0.9999999 + 0.2;
    }
}

pub fn run_compute<H: Harness + ?Sized>(harness: &mut H, iterations: u64) -> SimpleState {
    let mut st = SimpleState::default();
    bracket(harness, DEFAULT_ROI_ID, DEFAULT_ROI_FLAG, || {
        for _ in 0..iterations { st.step(); }
    });
    st
}
