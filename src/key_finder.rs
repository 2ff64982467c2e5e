//! Key inference and validation: narrows the twenty-four major/minor keys down to the one
//! (or more) consistent with a score, by intersecting two independent per-part filters.

use std::collections::HashSet;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::harmony::{DiatonicMode, Key, ScaleDegree};
use crate::note::Note;
use crate::pitch::{Pitch, PitchClass, Spelling};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("no key is consistent with every part of the score")]
    NoCandidates,

    #[error("key inference is ambiguous between {candidates:?}")]
    Ambiguous { candidates: Vec<Key> },

    #[error("the supplied key {key:?} is inconsistent with the score: {reason}")]
    UserKeyRejected { key: Key, reason: String },
}

const MODES: [DiatonicMode; 2] = [DiatonicMode::MAJOR, DiatonicMode::NATURAL_MINOR];

fn all_candidate_keys() -> impl Iterator<Item = Key> {
    PitchClass::iter().flat_map(|pc| {
        let tonic = pc.spell_with(Spelling::Sharps);
        MODES.into_iter().map(move |mode| Key::new(tonic, mode))
    })
}

fn triad_pitch_classes(key: Key) -> HashSet<PitchClass> {
    [ScaleDegree::I, ScaleDegree::III, ScaleDegree::V]
        .into_iter()
        .map(|d| key.relative_pitch(d).as_pitch_class())
        .collect()
}

/// The triad, plus the fourth degree, plus the bare fifth above the tonic — the "incomplete
/// triads, perfect fifth/fourth, or unison" covering set from the hanging-note filter.
fn tonic_framing_pitch_classes(key: Key) -> HashSet<PitchClass> {
    let mut pcs = triad_pitch_classes(key);
    pcs.insert(key.relative_pitch(ScaleDegree::IV).as_pitch_class());
    pcs
}

fn bidirectional_scale_pitch_classes(key: Key) -> HashSet<PitchClass> {
    let mut pcs: HashSet<PitchClass> = key
        .diatonic_pitches()
        .into_iter()
        .map(|p| p.as_pitch_class())
        .collect();

    if key.mode == DiatonicMode::NATURAL_MINOR {
        pcs.insert(
            key.tonic
                .transpose(crate::interval::Interval::MAJOR_SIXTH)
                .as_pitch_class(),
        );
        pcs.insert(
            key.tonic
                .transpose(crate::interval::Interval::MAJOR_SEVENTH)
                .as_pitch_class(),
        );
    }

    pcs
}

/// Rough leap/step/same classification by raw semitone distance, used only here — before a
/// key is known, consecutions cannot yet be computed diatonically.
fn is_leap(a: Note, b: Note) -> bool {
    a.pitch.semitones_to(b.pitch).0.unsigned_abs() > 2
}

fn passes_scale_terminal_filter(notes: &[Note], key: Key) -> bool {
    let Some(&first) = notes.first() else { return false };
    let Some(&last) = notes.last() else { return false };

    let triad = triad_pitch_classes(key);
    if !triad.contains(&first.pitch.as_pitch_class()) || !triad.contains(&last.pitch.as_pitch_class()) {
        return false;
    }

    let scale = bidirectional_scale_pitch_classes(key);
    if !notes.iter().all(|n| scale.contains(&n.pitch.as_pitch_class())) {
        return false;
    }

    notes.windows(2).all(|pair| {
        let [a, b] = pair else { unreachable!() };
        !is_leap(*a, *b)
            || triad.contains(&a.pitch.as_pitch_class())
            || triad.contains(&b.pitch.as_pitch_class())
    })
}

fn scale_terminal_candidates(notes: &[Note]) -> HashSet<Key> {
    all_candidate_keys()
        .filter(|&key| passes_scale_terminal_filter(notes, key))
        .collect()
}

/// Pitches with no same-pitch or immediate stepwise successor to close them off.
fn hanging_notes(notes: &[Note]) -> Vec<Note> {
    notes
        .iter()
        .enumerate()
        .filter(|&(i, note)| match notes.get(i + 1) {
            None => true,
            Some(next) => {
                let delta = note.pitch.semitones_to(next.pitch).0.unsigned_abs();
                delta != 0 && delta > 2
            }
        })
        .map(|(_, &note)| note)
        .collect()
}

fn hanging_note_candidates(notes: &[Note]) -> HashSet<Key> {
    let hanging = hanging_notes(notes);
    if hanging.is_empty() {
        return all_candidate_keys().collect();
    }

    all_candidate_keys()
        .filter(|&key| {
            let framing = tonic_framing_pitch_classes(key);
            hanging
                .iter()
                .all(|n| framing.contains(&n.pitch.as_pitch_class()))
        })
        .collect()
}

fn part_candidates(notes: &[Note]) -> HashSet<Key> {
    scale_terminal_candidates(notes)
        .intersection(&hanging_note_candidates(notes))
        .copied()
        .collect()
}

fn intersect_all(parts: &[Vec<Note>]) -> HashSet<Key> {
    let mut iter = parts.iter().map(|notes| part_candidates(notes));
    let Some(first) = iter.next() else { return HashSet::new() };
    iter.fold(first, |acc, next| acc.intersection(&next).copied().collect())
}

/// Picks the single best key among `candidates` given how many parts land on each tonic.
fn resolve_ambiguity(candidates: HashSet<Key>, parts: &[Vec<Note>]) -> Result<Key, KeyError> {
    if candidates.len() == 1 {
        return Ok(*candidates.iter().next().unwrap());
    }

    let score = |key: &Key| -> usize {
        parts
            .iter()
            .filter(|notes| {
                notes
                    .last()
                    .is_some_and(|n| n.pitch.as_pitch_class() == key.tonic.as_pitch_class())
            })
            .count()
    };

    let max_score = candidates.iter().map(score).max().unwrap_or(0);
    let best: Vec<Key> = candidates
        .iter()
        .copied()
        .filter(|k| score(k) == max_score)
        .collect();

    if best.len() == 1 {
        return Ok(best[0]);
    }

    let tonics: HashSet<Pitch> = best.iter().map(|k| k.tonic).collect();
    if tonics.len() == 1 {
        if let Some(major) = best.iter().find(|k| k.mode == DiatonicMode::MAJOR) {
            return Ok(*major);
        }
    }

    let mut candidates: Vec<Key> = best;
    candidates.sort_by_key(|k| (k.tonic.as_fifths_from_c(), k.mode as u8));
    Err(KeyError::Ambiguous { candidates })
}

/// Infers the key of a score from its parts, each given as an ordered list of notes.
pub fn infer_key(parts: &[Vec<Note>]) -> Result<Key, KeyError> {
    let candidates = intersect_all(parts);
    if candidates.is_empty() {
        return Err(KeyError::NoCandidates);
    }
    resolve_ambiguity(candidates, parts)
}

/// Validates a user-supplied key against the same two filters used for inference.
pub fn validate_key(key: Key, parts: &[Vec<Note>]) -> Result<(), KeyError> {
    for notes in parts {
        if !passes_scale_terminal_filter(notes, key) {
            return Err(KeyError::UserKeyRejected {
                key,
                reason: "a part's pitches or terminals are inconsistent with this key's scale/triad".into(),
            });
        }
        let hanging = hanging_notes(notes);
        let framing = tonic_framing_pitch_classes(key);
        if !hanging.iter().all(|n| framing.contains(&n.pitch.as_pitch_class())) {
            return Err(KeyError::UserKeyRejected {
                key,
                reason: "a hanging note in a part is not covered by this key's tonic framing".into(),
            });
        }
    }
    Ok(())
}
