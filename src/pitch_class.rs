//! Pitch Class
//!
//! Note-name normalization: turns identifiers such as `"C#4"`, `"eb"` or
//! `"Bb-1"` into octave-free pitch classes that keep their spelling.

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// Errors when normalizing note identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The identifier is not a recognized note or pitch-class name.
    #[error("invalid note `{input}`")]
    InvalidNote {
        /// The rejected identifier.
        input: String,
    },

    /// A chroma outside `0..12` was supplied.
    #[error("chroma {0} is out of range 0..12")]
    ChromaOutOfRange(u8),
}

/// The seven natural note letters
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// A
    A,
    /// B
    B,
}

impl Letter {
    const fn chroma(self) -> i8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

/// A note with its octave discarded.
///
/// Two pitch classes with the same chroma but different spellings
/// (`C#` and `Db`) are distinct values; compare [`PitchClass::chroma`] to
/// test enharmonic equivalence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PitchClass {
    letter: Letter,
    accidentals: i8,
}

impl PitchClass {
    /// Build a pitch class from a letter and a signed accidental count
    /// (positive for sharps, negative for flats).
    pub const fn new(letter: Letter, accidentals: i8) -> Self {
        PitchClass {
            letter,
            accidentals,
        }
    }

    /// The sharp spelling of `chroma` (0 = C ... 11 = B).
    pub fn from_chroma(chroma: u8) -> Result<Self, NoteError> {
        let (letter, accidentals) = match chroma {
            0 => (Letter::C, 0),
            1 => (Letter::C, 1),
            2 => (Letter::D, 0),
            3 => (Letter::D, 1),
            4 => (Letter::E, 0),
            5 => (Letter::F, 0),
            6 => (Letter::F, 1),
            7 => (Letter::G, 0),
            8 => (Letter::G, 1),
            9 => (Letter::A, 0),
            10 => (Letter::A, 1),
            11 => (Letter::B, 0),
            _ => return Err(NoteError::ChromaOutOfRange(chroma)),
        };
        Ok(PitchClass::new(letter, accidentals))
    }

    /// Integer chroma in `0..12`.
    pub const fn chroma(self) -> u8 {
        (self.letter.chroma() as i16 + self.accidentals as i16).rem_euclid(SEMITONES as i16) as u8
    }

    /// The natural letter this pitch class is spelled with.
    pub const fn letter(self) -> Letter {
        self.letter
    }

    /// Signed accidental count: `1` for `#`, `-2` for `bb`.
    pub const fn accidentals(self) -> i8 {
        self.accidentals
    }

    /// Semitones from `tonic` up to `self`, in `0..12`.
    pub const fn interval_from(self, tonic: PitchClass) -> u8 {
        (self.chroma() + SEMITONES - tonic.chroma()) % SEMITONES
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let symbol = if self.accidentals < 0 { 'b' } else { '#' };
        for _ in 0..self.accidentals.unsigned_abs() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for PitchClass {
    type Err = NoteError;

    /// Parse `<letter><accidentals><octave>`: a letter in either case,
    /// any run of `#` or of `b`, then an optional (possibly negative)
    /// octave which is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NoteError::InvalidNote {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;
        let rest = chars.as_str();

        let accidental_len = match rest.chars().next() {
            Some(symbol @ ('#' | 'b')) => rest.chars().take_while(|&c| c == symbol).count(),
            _ => 0,
        };
        let (accidental_str, octave) = rest.split_at(accidental_len);

        let count = i8::try_from(accidental_len).map_err(|_| invalid())?;
        let accidentals = if accidental_str.starts_with('b') {
            -count
        } else {
            count
        };

        if !is_octave(octave) {
            return Err(invalid());
        }

        Ok(PitchClass::new(letter, accidentals))
    }
}

/// Empty, or an optional `-` followed by at least one ASCII digit.
fn is_octave(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Anything that can be normalized into a [`PitchClass`].
///
/// This is the seam between the detector and note-name parsing: the
/// detector only ever sees the `Result` of this conversion.
pub trait ToPitchClass {
    /// Normalize `self`, discarding octave information.
    fn to_pitch_class(&self) -> Result<PitchClass, NoteError>;
}

impl ToPitchClass for str {
    fn to_pitch_class(&self) -> Result<PitchClass, NoteError> {
        self.parse()
    }
}

impl ToPitchClass for String {
    fn to_pitch_class(&self) -> Result<PitchClass, NoteError> {
        self.parse()
    }
}

impl ToPitchClass for PitchClass {
    fn to_pitch_class(&self) -> Result<PitchClass, NoteError> {
        Ok(*self)
    }
}

impl<T: ToPitchClass + ?Sized> ToPitchClass for &T {
    fn to_pitch_class(&self) -> Result<PitchClass, NoteError> {
        (**self).to_pitch_class()
    }
}
