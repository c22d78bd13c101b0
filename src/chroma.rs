//! Chroma Code
//!
//! 12-bit, tonic-relative interval masks used as dictionary keys.

use std::fmt::{self, Display};

use crate::pitch_class::SEMITONES;

const MASK: u16 = (1 << SEMITONES) - 1;

/// Set of intervals above a tonic, one bit per semitone.
///
/// Bit `k` is set iff the pitch class `k` semitones above the tonic is
/// present. Codes produced from a rotation always have bit 0 set.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChromaCode(u16);

impl ChromaCode {
    /// The code with no intervals.
    pub const EMPTY: ChromaCode = ChromaCode(0);

    /// Build a code from semitone intervals, each taken modulo 12.
    pub const fn from_intervals(intervals: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < intervals.len() {
            bits |= 1 << (intervals[i] % SEMITONES);
            i += 1;
        }
        ChromaCode(bits)
    }

    /// Build a code from raw bits; anything above bit 11 is dropped.
    pub const fn from_bits(bits: u16) -> Self {
        ChromaCode(bits & MASK)
    }

    /// Raw 12-bit value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether `interval` (mod 12) is present.
    pub const fn contains(self, interval: u8) -> bool {
        self.0 & (1 << (interval % SEMITONES)) != 0
    }

    /// Number of intervals present.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True when no interval is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Present intervals, ascending.
    pub fn intervals(self) -> impl Iterator<Item = u8> {
        (0..SEMITONES).filter(move |&k| self.contains(k))
    }

    /// Re-express the code relative to a tonic `semitones` above the
    /// current one.
    pub const fn rotate(self, semitones: u8) -> Self {
        let n = (semitones % SEMITONES) as u32;
        if n == 0 {
            return self;
        }
        let bits = (self.0 >> n) | (self.0 << (SEMITONES as u32 - n));
        ChromaCode(bits & MASK)
    }
}

impl Display for ChromaCode {
    /// Twelve `0`/`1` characters, tonic first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in 0..SEMITONES {
            f.write_str(if self.contains(k) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
