//! Built-in interval patterns.
//!
//! Each row is `(semitones above the tonic, names)`. The first name is the
//! one the default builders report.

/// (intervals, names)
pub(crate) type PatternRow = (&'static [u8], &'static [&'static str]);

pub(crate) const CHORD_TABLE: &[PatternRow] = &[
    // dyads and triads
    (&[0, 7], &["5"]),
    (&[0, 4, 7], &["M", "Major"]),
    (&[0, 3, 7], &["m", "min", "-"]),
    (&[0, 3, 6], &["dim", "°", "o"]),
    (&[0, 4, 8], &["M#5", "augmented", "maj#5", "+", "aug"]),
    (&[0, 3, 8], &["m#5", "m+", "mb6"]),
    (&[0, 4, 6], &["Mb5"]),
    (&[0, 2, 7], &["Msus2", "sus2"]),
    (&[0, 5, 7], &["Msus4", "sus4", "sus"]),
    // sevenths and sixths
    (&[0, 4, 7, 10], &["7", "dom"]),
    (&[0, 4, 7, 11], &["Maj7", "maj7", "M7"]),
    (&[0, 3, 7, 10], &["m7", "min7", "mi7", "-7"]),
    (&[0, 3, 7, 11], &["mMaj7", "mM7", "mmaj7"]),
    (&[0, 3, 6, 10], &["m7b5", "ø", "half-diminished"]),
    (&[0, 3, 6, 9], &["dim7", "°7", "o7"]),
    (&[0, 4, 8, 10], &["7#5", "+7", "7aug"]),
    (&[0, 4, 8, 11], &["M7#5", "maj7#5"]),
    (&[0, 4, 6, 10], &["7b5"]),
    (&[0, 5, 7, 10], &["7sus4", "7sus"]),
    (&[0, 4, 7, 9], &["M6", "6", "add6"]),
    (&[0, 3, 7, 9], &["m6"]),
    (&[0, 2, 4, 7], &["Madd9", "add9", "add2"]),
    (&[0, 2, 3, 7], &["madd9", "madd2"]),
    // extended
    (&[0, 2, 4, 7, 11], &["M9", "maj9"]),
    (&[0, 2, 4, 7, 10], &["9"]),
    (&[0, 2, 3, 7, 10], &["m9"]),
    (&[0, 2, 4, 7, 9], &["69", "M69", "6/9"]),
    (&[0, 1, 4, 7, 10], &["7b9"]),
    (&[0, 3, 4, 7, 10], &["7#9"]),
    (&[0, 2, 5, 7, 10], &["11"]),
    (&[0, 2, 3, 5, 7, 10], &["m11"]),
    (&[0, 2, 4, 7, 9, 10], &["13"]),
];

pub(crate) const SCALE_TABLE: &[PatternRow] = &[
    // diatonic modes
    (&[0, 2, 4, 5, 7, 9, 11], &["major", "ionian"]),
    (&[0, 2, 3, 5, 7, 9, 10], &["dorian"]),
    (&[0, 1, 3, 5, 7, 8, 10], &["phrygian"]),
    (&[0, 2, 4, 6, 7, 9, 11], &["lydian"]),
    (&[0, 2, 4, 5, 7, 9, 10], &["mixolydian", "dominant"]),
    (&[0, 2, 3, 5, 7, 8, 10], &["aeolian", "minor"]),
    (&[0, 1, 3, 5, 6, 8, 10], &["locrian"]),
    // other heptatonic
    (&[0, 2, 3, 5, 7, 8, 11], &["harmonic minor"]),
    (&[0, 2, 3, 5, 7, 9, 11], &["melodic minor"]),
    (&[0, 2, 4, 5, 7, 8, 11], &["harmonic major"]),
    (&[0, 2, 4, 6, 7, 9, 10], &["lydian dominant"]),
    (&[0, 1, 3, 4, 6, 8, 10], &["altered", "super locrian"]),
    (&[0, 1, 4, 5, 7, 8, 10], &["phrygian dominant"]),
    // pentatonic and hexatonic
    (&[0, 2, 4, 7, 9], &["major pentatonic", "pentatonic"]),
    (&[0, 3, 5, 7, 10], &["minor pentatonic"]),
    (&[0, 3, 5, 6, 7, 10], &["blues"]),
    (&[0, 2, 4, 6, 8, 10], &["whole tone"]),
    (&[0, 3, 4, 7, 8, 11], &["augmented"]),
    // octatonic and beyond
    (&[0, 2, 3, 5, 6, 8, 9, 11], &["diminished", "whole-half diminished"]),
    (&[0, 2, 4, 5, 7, 9, 10, 11], &["bebop"]),
    (&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], &["chromatic"]),
];
