//! Dictionary
//!
//! Exact-match tables from tonic-relative chroma codes to pattern names,
//! and the three process-wide instances built from the bundled tables.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use log::debug;

use crate::chroma::ChromaCode;
use crate::tables::{PatternRow, CHORD_TABLE, SCALE_TABLE};

lazy_static! {
    /// Chord patterns (`"M"`, `"m7"`, `"Msus4"`, ...).
    pub static ref CHORDS: Dictionary = Dictionary::bundled("chord", CHORD_TABLE);

    /// Scale patterns (`"major"`, `"dorian"`, `"blues"`, ...).
    pub static ref SCALES: Dictionary = Dictionary::bundled("scale", SCALE_TABLE);

    /// Scale names followed by chord names for every code.
    pub static ref PCSETS: Dictionary = {
        let dict = Dictionary::combine(&*SCALES, &*CHORDS);
        debug!("built pcset dictionary with {} patterns", dict.len());
        dict
    };
}

/// Which bundled dictionary to match against
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    /// The bundled chord patterns.
    #[default]
    Chord,
    /// The bundled scale patterns.
    Scale,
    /// Scales and chords together.
    Pcset,
}

impl DictionaryKind {
    /// The shared dictionary for this kind.
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            DictionaryKind::Chord => &*CHORDS,
            DictionaryKind::Scale => &*SCALES,
            DictionaryKind::Pcset => &*PCSETS,
        }
    }
}

impl AsRef<Dictionary> for DictionaryKind {
    fn as_ref(&self) -> &Dictionary {
        self.dictionary()
    }
}

/// Map from chroma code to an ordered list of names.
///
/// Names under one code keep their insertion order. A reverse index maps
/// each name to the first code it was inserted under.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    patterns: BTreeMap<ChromaCode, Vec<String>>,
    by_name: HashMap<String, ChromaCode>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(intervals, names)` rows, in row order.
    pub fn from_table(table: &[(&[u8], &[&str])]) -> Self {
        let mut dict = Dictionary::new();
        for &(intervals, names) in table {
            let code = ChromaCode::from_intervals(intervals);
            for &name in names {
                dict.insert(code, name);
            }
        }
        dict
    }

    fn bundled(label: &str, table: &[PatternRow]) -> Self {
        let dict = Self::from_table(table);
        debug!("built {label} dictionary with {} patterns", dict.len());
        dict
    }

    /// Append `name` to the names for `code`.
    pub fn insert(&mut self, code: ChromaCode, name: impl Into<String>) {
        let name = name.into();
        self.by_name.entry(name.clone()).or_insert(code);
        self.patterns.entry(code).or_default().push(name);
    }

    /// Names registered for exactly `code`; empty when nothing matches.
    pub fn names(&self, code: ChromaCode) -> &[String] {
        self.patterns.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Code registered for `name`, if any.
    pub fn chroma(&self, name: &str) -> Option<ChromaCode> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no pattern is registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Every `(code, names)` pair in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (ChromaCode, &[String])> + '_ {
        self.patterns
            .iter()
            .map(|(&code, names)| (code, names.as_slice()))
    }

    /// A dictionary holding `first`'s names followed by `second`'s for
    /// every code either of them knows.
    pub fn combine(first: &Dictionary, second: &Dictionary) -> Dictionary {
        let mut dict = first.clone();
        for (code, names) in second.iter() {
            for name in names {
                dict.insert(code, name.as_str());
            }
        }
        dict
    }
}

impl AsRef<Dictionary> for Dictionary {
    fn as_ref(&self) -> &Dictionary {
        self
    }
}
