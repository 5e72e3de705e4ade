//! Presentation effect contracts
//!
//! The math behind the pointer parallax and the one-shot latch behind the
//! reveal-on-scroll animation, kept free of any DOM types so both are
//! testable without a browser.

use std::collections::HashSet;

/// Pixel multipliers for the two decorative layers
const LAYER_A_FACTOR: f64 = -30.0;
const LAYER_B_FACTOR: f64 = 20.0;

/// Map a pointer position to translation offsets for the two orb layers.
///
/// Offsets are derived from the pointer's normalized distance to the
/// viewport center; the viewport dimensions are taken per call, never
/// cached. Returns `((ax, ay), (bx, by))` in pixels.
pub fn parallax_offsets(x: f64, y: f64, width: f64, height: f64) -> ((f64, f64), (f64, f64)) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let dx = (x - center_x) / center_x;
    let dy = (y - center_y) / center_y;

    (
        (dx * LAYER_A_FACTOR, dy * LAYER_A_FACTOR),
        (dx * LAYER_B_FACTOR, dy * LAYER_B_FACTOR),
    )
}

/// One-shot visibility latch for reveal-on-scroll elements
///
/// An element is marked the first time it crosses the visibility threshold
/// and the mark is never removed, so repeated intersection callbacks are
/// idempotent.
#[derive(Clone, Debug, Default)]
pub struct RevealLatch {
    revealed: HashSet<usize>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an element as revealed. Returns true only on the first mark.
    pub fn mark(&mut self, key: usize) -> bool {
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
