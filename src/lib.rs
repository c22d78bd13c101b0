//! # pcset_detect
//!
//! Name the chords, scales and pitch-class sets formed by an unordered
//! collection of notes.
//!
//! Notes are reduced to a sorted, deduplicated pitch-class set. Each member
//! is then tried as a tonic, the resulting rotation is encoded as a 12-bit
//! tonic-relative chroma code, and the code is matched exactly against a
//! dictionary of named patterns.
//!
//! ## Example
//! ```rust
//! use pcset_detect::{detect_chord, detect_scale, Detector, DictionaryKind, InvalidNotePolicy};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) One-shot helpers
//!     assert_eq!(detect_chord(["C", "E", "G", "A"]), ["CM6", "Am7"]);
//!     assert_eq!(detect_scale(["D", "E", "F#", "G", "A", "B", "C#"])[1], "D major");
//!
//!     // 2) A configured detector that refuses bad input
//!     let detector = Detector::builder()
//!         .kind(DictionaryKind::Chord)
//!         .invalid_notes(InvalidNotePolicy::Reject)
//!         .build();
//!
//!     // 3) Receive every matched name per tonic
//!     let names = detector.detect(["G2", "B3", "D4", "F4"], |tonic, names| {
//!         format!("{tonic}: {}", names.join(", "))
//!     })?;
//!     println!("{names:?}");
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! Results always come back in ascending tonic order, and a collection that
//! matches nothing yields an empty `Vec`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Detection entry points and configuration.
pub use detector::{
    chord_name, detect, detect_chord, detect_pcset, detect_scale, name_pair, scale_name,
    Detector, DetectorBuilder, InvalidNotePolicy,
};

/// Pattern dictionaries.
pub use dictionary::{Dictionary, DictionaryKind, CHORDS, PCSETS, SCALES};

/// Chroma codes.
pub use chroma::ChromaCode;

/// Pitch-class sets and their rotations.
pub use pcset::{PitchClassSet, Rotation};

/// Note normalization.
pub use pitch_class::{Letter, NoteError, PitchClass, ToPitchClass, SEMITONES};

/// Tonic-relative chroma code module.
pub mod chroma;

/// Chord and scale detection module.
pub mod detector;

/// Pattern dictionary module.
pub mod dictionary;

/// Pitch-class set module.
pub mod pcset;

/// Note normalization module.
pub mod pitch_class;

mod tables;
