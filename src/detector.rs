//! Detector
//!
//! Names the chords, scales or pitch-class sets formed by a collection of
//! notes: every member of the set is tried as a tonic, and each rotation's
//! chroma code is matched exactly against a dictionary.

use log::{debug, trace};

use crate::dictionary::{Dictionary, DictionaryKind};
use crate::pcset::PitchClassSet;
use crate::pitch_class::{NoteError, ToPitchClass};

/// How note identifiers that cannot be normalized are handled
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum InvalidNotePolicy {
    /// Leave the note out of the set and keep going.
    #[default]
    Skip,
    /// Fail with [`NoteError::InvalidNote`] on the first bad identifier.
    Reject,
}

/// Builder for `Detector` to choose the dictionary and invalid-note policy
pub struct DetectorBuilder<'d> {
    dictionary: &'d Dictionary,
    invalid_notes: InvalidNotePolicy,
}

impl DetectorBuilder<'static> {
    /// Create a new builder matching chords and skipping invalid notes
    pub fn new() -> Self {
        DetectorBuilder {
            dictionary: DictionaryKind::Chord.dictionary(),
            invalid_notes: InvalidNotePolicy::Skip,
        }
    }
}

impl<'d> DetectorBuilder<'d> {
    /// Match against one of the bundled dictionaries
    pub fn kind(self, kind: DictionaryKind) -> DetectorBuilder<'static> {
        DetectorBuilder {
            dictionary: kind.dictionary(),
            invalid_notes: self.invalid_notes,
        }
    }

    /// Match against a caller-owned dictionary
    pub fn dictionary<'e>(self, dictionary: &'e Dictionary) -> DetectorBuilder<'e> {
        DetectorBuilder {
            dictionary,
            invalid_notes: self.invalid_notes,
        }
    }

    /// Set how unparseable note identifiers are handled
    pub fn invalid_notes(mut self, policy: InvalidNotePolicy) -> Self {
        self.invalid_notes = policy;
        self
    }

    /// Build the `Detector`
    pub fn build(self) -> Detector<'d> {
        Detector {
            dictionary: self.dictionary,
            invalid_notes: self.invalid_notes,
        }
    }
}

impl Default for DetectorBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches note collections against one dictionary
#[derive(Debug, Copy, Clone)]
pub struct Detector<'d> {
    dictionary: &'d Dictionary,
    invalid_notes: InvalidNotePolicy,
}

impl Detector<'static> {
    /// Return a builder to customize the dictionary and note policy
    pub fn builder() -> DetectorBuilder<'static> {
        DetectorBuilder::new()
    }

    /// A detector over a bundled dictionary that skips invalid notes
    pub fn new(kind: DictionaryKind) -> Self {
        DetectorBuilder::new().kind(kind).build()
    }
}

impl<'d> Detector<'d> {
    /// The dictionary this detector matches against.
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Normalize `notes` into a sorted, deduplicated set.
    ///
    /// Returns `Err(NoteError::InvalidNote)` only under
    /// [`InvalidNotePolicy::Reject`].
    pub fn pitch_classes<I>(&self, notes: I) -> Result<PitchClassSet, NoteError>
    where
        I: IntoIterator,
        I::Item: ToPitchClass,
    {
        let mut pitch_classes = Vec::new();
        for note in notes {
            match note.to_pitch_class() {
                Ok(pc) => pitch_classes.push(pc),
                Err(err) => match self.invalid_notes {
                    InvalidNotePolicy::Skip => debug!("skipping note: {err}"),
                    InvalidNotePolicy::Reject => return Err(err),
                },
            }
        }
        Ok(pitch_classes.into_iter().collect())
    }

    /// Normalize `notes` and name every rotation that matches.
    ///
    /// `builder` receives the tonic's display name and the full list of
    /// matched names; its results are returned in ascending tonic order.
    pub fn detect<I, R, F>(&self, notes: I, builder: F) -> Result<Vec<R>, NoteError>
    where
        I: IntoIterator,
        I::Item: ToPitchClass,
        F: FnMut(&str, &[String]) -> R,
    {
        let set = self.pitch_classes(notes)?;
        Ok(self.detect_set(&set, builder))
    }

    /// Name every rotation of an already-built set that matches.
    pub fn detect_set<R, F>(&self, set: &PitchClassSet, mut builder: F) -> Vec<R>
    where
        F: FnMut(&str, &[String]) -> R,
    {
        let mut results = Vec::with_capacity(set.len());
        for mode in set.modes() {
            let code = mode.chroma();
            let names = self.dictionary.names(code);
            let tonic = mode.tonic();
            trace!(
                "mode {} tonic {tonic} chroma {code}: {} names",
                mode.index(),
                names.len()
            );
            if !names.is_empty() {
                results.push(builder(&tonic.to_string(), names));
            }
        }
        results
    }
}

/// Tonic followed directly by the first name: `"C"`, `["M6"]` → `"CM6"`.
pub fn chord_name(tonic: &str, names: &[String]) -> String {
    format!("{tonic}{}", first_name(names))
}

/// Tonic and first name separated by a space: `"C major"`.
pub fn scale_name(tonic: &str, names: &[String]) -> String {
    format!("{tonic} {}", first_name(names))
}

/// The tonic and every matched name, unchanged.
pub fn name_pair(tonic: &str, names: &[String]) -> (String, Vec<String>) {
    (tonic.to_string(), names.to_vec())
}

fn first_name(names: &[String]) -> &str {
    names.first().map(String::as_str).unwrap_or_default()
}

/// Match `notes` against `dictionary`, skipping invalid notes.
///
/// ```rust
/// use pcset_detect::{detect, DictionaryKind};
///
/// let sizes = detect(["C", "E", "G", "A"], DictionaryKind::Chord, |tonic, names| {
///     (tonic.to_string(), names.len())
/// });
/// assert_eq!(sizes, [("C".to_string(), 3), ("A".to_string(), 4)]);
/// ```
pub fn detect<I, D, R, F>(notes: I, dictionary: D, builder: F) -> Vec<R>
where
    I: IntoIterator,
    I::Item: ToPitchClass,
    D: AsRef<Dictionary>,
    F: FnMut(&str, &[String]) -> R,
{
    let detector = Detector::builder().dictionary(dictionary.as_ref()).build();
    let set = match detector.pitch_classes(notes) {
        Ok(set) => set,
        // Skip policy never rejects.
        Err(_) => return Vec::new(),
    };
    detector.detect_set(&set, builder)
}

/// Chord names for `notes`, e.g. `["C", "E", "G", "A"]` → `["CM6", "Am7"]`.
pub fn detect_chord<I>(notes: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToPitchClass,
{
    detect(notes, DictionaryKind::Chord, chord_name)
}

/// Scale names for `notes`, e.g. the white keys → `["C major", "D dorian", ...]`.
pub fn detect_scale<I>(notes: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToPitchClass,
{
    detect(notes, DictionaryKind::Scale, scale_name)
}

/// Match `notes` against scales and chords together. Pass [`name_pair`]
/// for the plain `(tonic, names)` result.
pub fn detect_pcset<I, R, F>(notes: I, builder: F) -> Vec<R>
where
    I: IntoIterator,
    I::Item: ToPitchClass,
    F: FnMut(&str, &[String]) -> R,
{
    detect(notes, DictionaryKind::Pcset, builder)
}
