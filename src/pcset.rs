//! Pitch-Class Sets
//!
//! Sorted, deduplicated pitch-class sets and their rotations (modes).

use crate::chroma::ChromaCode;
use crate::pitch_class::{PitchClass, SEMITONES};

/// Unique pitch classes, sorted ascending by chroma.
///
/// When several inputs share a chroma the first one seen is kept, so its
/// spelling is the one reported as a tonic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PitchClassSet {
    members: Vec<PitchClass>,
}

impl PitchClassSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct pitch classes (0..=12).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending chroma order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.members.iter().copied()
    }

    /// The `index`-th member in ascending chroma order.
    pub fn get(&self, index: usize) -> Option<PitchClass> {
        self.members.get(index).copied()
    }

    /// Whether a member with this chroma is present.
    pub fn contains(&self, chroma: u8) -> bool {
        self.members.iter().any(|pc| pc.chroma() == chroma)
    }

    /// Absolute code of the whole set, with C as bit 0.
    pub fn chroma(&self) -> ChromaCode {
        self.members
            .iter()
            .fold(ChromaCode::EMPTY, |code, pc| {
                ChromaCode::from_bits(code.bits() | 1 << pc.chroma())
            })
    }

    /// Every rotation of the set, one per member, in ascending tonic order.
    pub fn modes(&self) -> impl Iterator<Item = Rotation<'_>> + '_ {
        (0..self.members.len()).map(move |start| Rotation { set: self, start })
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut slots: [Option<PitchClass>; SEMITONES as usize] = [None; SEMITONES as usize];
        for pc in iter {
            let slot = &mut slots[pc.chroma() as usize];
            if slot.is_none() {
                *slot = Some(pc);
            }
        }
        PitchClassSet {
            members: slots.into_iter().flatten().collect(),
        }
    }
}

/// One mode of a [`PitchClassSet`]: the set read cyclically from a tonic.
#[derive(Debug, Copy, Clone)]
pub struct Rotation<'a> {
    set: &'a PitchClassSet,
    start: usize,
}

impl<'a> Rotation<'a> {
    /// Position of the tonic within the sorted set.
    pub fn index(&self) -> usize {
        self.start
    }

    /// The member this rotation starts from.
    pub fn tonic(&self) -> PitchClass {
        self.set.members[self.start]
    }

    /// All members, starting at the tonic and wrapping around.
    pub fn notes(&self) -> impl Iterator<Item = PitchClass> + 'a {
        let (head, tail) = self.set.members.split_at(self.start);
        tail.iter().chain(head).copied()
    }

    /// Tonic-relative code: bit `(p - tonic) mod 12` for every member `p`.
    pub fn chroma(&self) -> ChromaCode {
        let tonic = self.tonic();
        let bits = self
            .notes()
            .fold(0u16, |bits, pc| bits | 1 << pc.interval_from(tonic));
        ChromaCode::from_bits(bits)
    }
}
