//! Integration tests for chord, scale and pitch-class-set detection.

use lazy_static::lazy_static;
use pcset_detect::{
    chord_name, detect, detect_chord, detect_pcset, detect_scale, name_pair, scale_name,
    ChromaCode, Detector, Dictionary, DictionaryKind, InvalidNotePolicy, NoteError, PitchClass,
    PitchClassSet,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Note collections paired with their expected chord names
struct ChordCase {
    notes: &'static [&'static str],
    expected: &'static [&'static str],
}

lazy_static! {
    static ref CHORD_CASES: Vec<ChordCase> = vec![
        ChordCase { notes: &["C", "E", "G", "A"], expected: &["CM6", "Am7"] },
        ChordCase { notes: &["C", "E", "G"], expected: &["CM", "Em#5"] },
        ChordCase { notes: &["C", "D", "G"], expected: &["CMsus2", "GMsus4"] },
        ChordCase { notes: &["G", "B", "D", "F"], expected: &["G7"] },
        ChordCase { notes: &["C", "E", "G#"], expected: &["CM#5", "EM#5", "G#M#5"] },
        ChordCase { notes: &["C", "Eb", "Gb", "A"], expected: &["Cdim7", "Ebdim7", "Gbdim7", "Adim7"] },
        ChordCase { notes: &["D", "F", "A", "C"], expected: &["Dm7", "FM6"] },
        ChordCase { notes: &["C", "G"], expected: &["C5"] },
        ChordCase { notes: &["C", "C#"], expected: &[] },
        ChordCase { notes: &["C"], expected: &[] },
    ];
}

#[test]
fn chord_literal_scenario() {
    assert_eq!(detect_chord(["C", "E", "G", "A"]), ["CM6", "Am7"]);
}

#[test]
fn scale_literal_scenario() {
    let scales = detect_scale(["F3", "A", "C5", "E2", "D", "G2", "B6"]);
    assert_eq!(
        scales,
        [
            "C major",
            "D dorian",
            "E phrygian",
            "F lydian",
            "G mixolydian",
            "A aeolian",
            "B locrian",
        ]
    );
}

#[test]
fn lowercase_scale_input() {
    let scales = detect_scale(["f3", "a", "c5", "e2", "d", "g2", "b6"]);
    assert_eq!(scales.first().map(String::as_str), Some("C major"));
    assert_eq!(scales.len(), 7);
}

#[test]
fn chord_cases() {
    for case in CHORD_CASES.iter() {
        assert_eq!(
            detect_chord(case.notes),
            case.expected,
            "notes: {:?}",
            case.notes
        );
    }
}

#[test]
fn result_order_ignores_input_order() {
    let expected = detect_chord(["C", "E", "G", "A"]);
    assert_eq!(detect_chord(["A", "G", "E", "C"]), expected);
    assert_eq!(detect_chord(["G", "C", "A", "E"]), expected);
}

#[test]
fn duplicates_collapse() {
    assert_eq!(detect_chord(["C", "C", "E", "G"]), detect_chord(["C", "E", "G"]));
    assert_eq!(detect_chord(["C", "E", "G", "C", "E"]), detect_chord(["C", "E", "G"]));
}

#[test]
fn octaves_are_ignored() {
    assert_eq!(detect_chord(["C4", "E5", "G3"]), detect_chord(["C", "E", "G"]));
    assert_eq!(detect_chord(["C-1", "E9", "G0"]), detect_chord(["C", "E", "G"]));
}

#[test]
fn empty_input_yields_empty_results() {
    let none: [&str; 0] = [];
    assert!(detect_chord(none).is_empty());
    assert!(detect_scale(none).is_empty());
    assert!(detect_pcset(none, name_pair).is_empty());
}

#[test]
fn results_bounded_by_distinct_pitch_classes() {
    let sets: &[&[&str]] = &[
        &["C", "E", "G", "A"],
        &["C", "Eb", "Gb", "A"],
        &["C", "D", "E", "F", "G", "A", "B"],
        &["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"],
        &["C", "E", "G", "Bb", "D"],
    ];
    for notes in sets {
        let distinct = notes
            .iter()
            .filter_map(|n| n.parse::<PitchClass>().ok())
            .collect::<PitchClassSet>()
            .len();
        let chords = detect_chord(*notes);
        assert!(chords.len() <= distinct, "notes: {notes:?}");
        assert!(chords.iter().all(|c| !c.is_empty()), "notes: {notes:?}");
    }
}

#[test]
fn enharmonic_duplicate_keeps_first_spelling() {
    assert_eq!(detect_chord(["C#", "Db", "F", "Ab"]), ["C#M", "Fm#5"]);
    assert_eq!(detect_chord(["Db", "C#", "F", "Ab"]), ["DbM", "Fm#5"]);
}

#[test]
fn tonic_spelling_follows_input() {
    assert_eq!(detect_chord(["Bb", "D", "F"]), ["Dm#5", "BbM"]);
    assert_eq!(detect_chord(["A#", "D", "F"]), ["Dm#5", "A#M"]);
}

#[test]
fn invalid_notes_are_skipped_by_default() {
    assert_eq!(detect_chord(["C", "X", "E", "G", ""]), ["CM", "Em#5"]);
    assert!(detect_chord(["H", "nope"]).is_empty());
}

#[test]
fn reject_policy_reports_invalid_note() {
    let detector = Detector::builder()
        .invalid_notes(InvalidNotePolicy::Reject)
        .build();
    let err = detector.detect(["C", "X", "E"], chord_name).unwrap_err();
    assert_eq!(
        err,
        NoteError::InvalidNote {
            input: "X".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid note `X`");

    let ok = detector.detect(["C", "E", "G"], chord_name).unwrap();
    assert_eq!(ok, ["CM", "Em#5"]);
}

#[test]
fn whole_tone_matches_every_rotation() {
    let scales = detect_scale(["C", "D", "E", "F#", "G#", "A#"]);
    assert_eq!(
        scales,
        [
            "C whole tone",
            "D whole tone",
            "E whole tone",
            "F# whole tone",
            "G# whole tone",
            "A# whole tone",
        ]
    );
}

#[test]
fn pcset_without_matches_is_empty() {
    let result = detect_pcset(["C", "C#"], name_pair);
    assert!(result.is_empty());
}

#[test]
fn pcset_single_match_is_verbatim_pair() {
    let result = detect_pcset(["C", "G"], name_pair);
    assert_eq!(result, [("C".to_string(), strings(&["5"]))]);
}

#[test]
fn pcset_lists_scales_before_chords() {
    let result = detect_pcset(["C", "D", "E", "G", "A"], name_pair);
    assert_eq!(
        result,
        [
            (
                "C".to_string(),
                strings(&["major pentatonic", "pentatonic", "69", "M69", "6/9"])
            ),
            ("D".to_string(), strings(&["11"])),
            ("A".to_string(), strings(&["minor pentatonic"])),
        ]
    );
}

#[test]
fn custom_builder_receives_all_names() {
    let all = detect(["C", "E", "G", "A"], DictionaryKind::Chord, |tonic, names| {
        format!("{tonic}: {}", names.join("|"))
    });
    assert_eq!(all, ["C: M6|6|add6", "A: m7|min7|mi7|-7"]);
}

#[test]
fn scale_builder_on_chord_dictionary() {
    assert_eq!(
        detect(["C", "E", "G"], DictionaryKind::Chord, scale_name),
        ["C M", "E m#5"]
    );
}

#[test]
fn custom_dictionary() {
    let mut dict = Dictionary::new();
    dict.insert(ChromaCode::from_intervals(&[0, 4, 7]), "major triad");
    dict.insert(ChromaCode::from_intervals(&[0, 4, 7]), "tonic triad");

    let detector = Detector::builder().dictionary(&dict).build();
    let names = detector
        .detect(["E", "G", "C"], |tonic, names| (tonic.to_string(), names.len()))
        .unwrap();
    assert_eq!(names, [("C".to_string(), 2)]);

    assert_eq!(detect(["C", "E", "G"], &dict, chord_name), ["Cmajor triad"]);
}

#[test]
fn detector_for_kind_matches_free_functions() {
    let notes = ["F3", "A", "C5", "E2", "D", "G2", "B6"];
    let detector = Detector::new(DictionaryKind::Scale);
    assert_eq!(
        detector.detect(notes, scale_name).unwrap(),
        detect_scale(notes)
    );
}

#[test]
fn detect_set_on_prebuilt_set() {
    let set: PitchClassSet = [0u8, 4, 7, 9]
        .into_iter()
        .map(|c| PitchClass::from_chroma(c).unwrap())
        .collect();
    let detector = Detector::new(DictionaryKind::Chord);
    assert_eq!(detector.detect_set(&set, chord_name), ["CM6", "Am7"]);
}

#[test]
fn concurrent_detection_matches_sequential() {
    let sequential: Vec<Vec<String>> = CHORD_CASES.iter().map(|c| detect_chord(c.notes)).collect();

    let parallel: Vec<Vec<String>> = CHORD_CASES
        .par_iter()
        .map(|c| detect_chord(c.notes))
        .collect();

    assert_eq!(parallel, sequential);

    let all_scales: Vec<Vec<String>> = (0..64)
        .collect::<Vec<u16>>()
        .par_iter()
        .map(|&bits| {
            let notes: Vec<PitchClass> = ChromaCode::from_bits(bits * 61)
                .intervals()
                .map(|c| PitchClass::from_chroma(c).unwrap())
                .collect();
            detect_scale(&notes)
        })
        .collect();
    assert_eq!(all_scales.len(), 64);
}
