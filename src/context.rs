//! Global context: per-part events with scale degrees and consecutions, species detection,
//! and the per-measure local harmonic context used by third-species-and-up parsing.

use std::collections::HashMap;

use num_rational::Ratio;

use crate::csd::Csd;
use crate::error::{AnalysisError, InputError};
use crate::harmony::{Key, ScaleDegree};
use crate::io::RawScore;
use crate::key_finder;
use crate::note::Note;
use crate::pitch::PitchClass;

/// How an event is approached or departed from: by diatonic step, by skip, or repeated.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MotionType {
    Step,
    Skip,
    Same,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MotionDirection {
    Up,
    Down,
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Motion {
    pub kind: MotionType,
    pub direction: MotionDirection,
}

/// The manner of approach (`left`) and departure (`right`) for one event, in CSD-degree terms.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Consecutions {
    pub left: Option<Motion>,
    pub right: Option<Motion>,
}

impl Motion {
    fn between(a: Csd, b: Csd) -> Self {
        let delta = b.value - a.value;
        let direction = match delta {
            0 => MotionDirection::None,
            d if d > 0 => MotionDirection::Up,
            _ => MotionDirection::Down,
        };
        let kind = match delta.abs() {
            0 => MotionType::Same,
            1 => MotionType::Step,
            _ => MotionType::Skip,
        };
        Self { kind, direction }
    }
}

/// A single pitched event, indexed, scale-degreed, and related to its neighbors.
#[derive(Clone, Debug)]
pub struct Event {
    pub index: usize,
    pub note: Note,
    pub onset: Ratio<i64>,
    pub duration: Ratio<i64>,
    pub measure: u32,
    pub tied_to_next: bool,
    pub csd: Csd,
    pub consecutions: Consecutions,
}

/// The rhythmic species of a part, which governs which parser and checker rules apply.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Species {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Species {
    /// Detects species from the regularity of events per measure and the presence of ties.
    pub fn detect(events: &[Event]) -> Self {
        if events.iter().any(|e| e.tied_to_next) {
            return Self::Fourth;
        }

        let mut per_measure: HashMap<u32, usize> = HashMap::new();
        for e in events {
            *per_measure.entry(e.measure).or_default() += 1;
        }

        let mut counts: Vec<usize> = per_measure.values().copied().collect();
        counts.sort_unstable();
        counts.dedup();

        match counts.as_slice() {
            [1] => Self::First,
            [2] => Self::Second,
            [4] => Self::Third,
            _ => Self::Fifth,
        }
    }
}

/// The triad active on a measure's downbeat, as found by [`Self::harmonic_context_for_measure`].
#[derive(Clone, Debug)]
pub struct LocalHarmony {
    pub measure: u32,
    pub root: ScaleDegree,
    pub pitch_classes: Vec<PitchClass>,
}

#[derive(Clone, Debug)]
pub struct Part {
    pub events: Vec<Event>,
    pub species: Species,
}

#[derive(Clone, Debug)]
pub struct GlobalContext {
    pub key: Key,
    pub parts: Vec<Part>,
    local_harmony: HashMap<u32, LocalHarmony>,
    downbeat_onsets: HashMap<u32, Ratio<i64>>,
}

/// A diatonic triad built by stacking thirds from `degree`, expressed as pitch classes.
fn triad_at(key: Key, degree: ScaleDegree) -> Vec<PitchClass> {
    let third = ScaleDegree::from_num((degree.as_num() - 1 + 2) % 7 + 1).unwrap();
    let fifth = ScaleDegree::from_num((degree.as_num() - 1 + 4) % 7 + 1).unwrap();
    [degree, third, fifth]
        .into_iter()
        .map(|d| key.relative_pitch(d).as_pitch_class())
        .collect()
}

fn matches_some_triad(key: Key, pcs: &[PitchClass]) -> Option<ScaleDegree> {
    let distinct: std::collections::HashSet<PitchClass> = pcs.iter().copied().collect();
    if distinct.len() < 2 {
        return None;
    }
    (1..=7).find_map(|n| {
        let d = ScaleDegree::from_num(n)?;
        let triad: std::collections::HashSet<PitchClass> =
            triad_at(key, d).into_iter().collect();
        distinct.is_subset(&triad).then_some(d)
    })
}

impl GlobalContext {
    /// Parses a [`RawScore`] against an optional user-supplied key (validated) or infers one,
    /// builds every part's events, consecutions and species, and derives the local harmonic
    /// context for every measure.
    pub fn build(raw: &RawScore, key_override: Option<Key>) -> Result<Self, AnalysisError> {
        if raw.parts.is_empty() {
            return Err(InputError::NoParts.into());
        }

        let mut note_parts = Vec::with_capacity(raw.parts.len());
        for (i, part) in raw.parts.iter().enumerate() {
            if part.events.is_empty() {
                return Err(InputError::EmptyPart(i).into());
            }
            note_parts.push(part.notes()?);
        }

        let key = match key_override {
            Some(key) => {
                key_finder::validate_key(key, &note_parts)?;
                key
            }
            None => key_finder::infer_key(&note_parts)?,
        };

        let mut parts = Vec::with_capacity(raw.parts.len());
        for (raw_part, notes) in raw.parts.iter().zip(&note_parts) {
            let tonic_ref = Note::new(key.tonic, notes[0].octave);

            let csds: Vec<Csd> = notes
                .iter()
                .map(|&n| Csd::from_note(n, key, tonic_ref))
                .collect::<Result<_, _>>()
                .map_err(|_| InputError::MalformedPitch(
                    "a pitch in the part does not belong to the inferred or supplied key".into(),
                ))?;

            let mut events = Vec::with_capacity(raw_part.events.len());
            for (i, (raw_event, &csd)) in raw_part.events.iter().zip(&csds).enumerate() {
                events.push(Event {
                    index: i,
                    note: notes[i],
                    onset: raw_event.onset,
                    duration: raw_event.duration,
                    measure: raw_event.measure,
                    tied_to_next: raw_event.tied_to_next,
                    csd,
                    consecutions: Consecutions::default(),
                });
            }

            for i in 0..events.len().saturating_sub(1) {
                let motion = Motion::between(events[i].csd, events[i + 1].csd);
                events[i].consecutions.right = Some(motion);
                events[i + 1].consecutions.left = Some(motion);
            }

            let species = Species::detect(&events);
            parts.push(Part { events, species });
        }

        let downbeat_onsets = Self::derive_downbeat_onsets(&parts);
        let local_harmony = Self::derive_local_harmony(key, &parts, &downbeat_onsets);

        Ok(Self { key, parts, local_harmony, downbeat_onsets })
    }

    /// The earliest onset sounding in each measure, across every part — the measure's downbeat.
    fn derive_downbeat_onsets(parts: &[Part]) -> HashMap<u32, Ratio<i64>> {
        let mut onsets: HashMap<u32, Ratio<i64>> = HashMap::new();
        for part in parts {
            for event in &part.events {
                onsets
                    .entry(event.measure)
                    .and_modify(|min| *min = (*min).min(event.onset))
                    .or_insert(event.onset);
            }
        }
        onsets
    }

    fn derive_local_harmony(
        key: Key,
        parts: &[Part],
        downbeat_onsets: &HashMap<u32, Ratio<i64>>,
    ) -> HashMap<u32, LocalHarmony> {
        let mut downbeats: HashMap<u32, Vec<PitchClass>> = HashMap::new();
        for part in parts {
            for event in &part.events {
                if Some(&event.onset) == downbeat_onsets.get(&event.measure) {
                    downbeats
                        .entry(event.measure)
                        .or_default()
                        .push(event.note.pitch.as_pitch_class());
                }
            }
        }

        let mut measures: Vec<u32> = downbeats.keys().copied().collect();
        measures.sort_unstable();

        let mut harmonies = HashMap::new();
        let mut previous: Option<LocalHarmony> = None;

        for measure in measures {
            let pcs = &downbeats[&measure];
            let harmony = matches_some_triad(key, pcs)
                .map(|root| LocalHarmony { measure, root, pitch_classes: triad_at(key, root) })
                .or_else(|| previous.clone().map(|h| LocalHarmony { measure, ..h }));

            if let Some(h) = harmony {
                previous = Some(h.clone());
                harmonies.insert(measure, h);
            }
        }

        harmonies
    }

    /// The active triad on `measure`'s downbeat, if one could be determined.
    pub fn harmonic_context_for_measure(&self, measure: u32) -> Option<&LocalHarmony> {
        self.local_harmony.get(&measure)
    }

    /// Whether `event` sounds at its measure's earliest onset.
    pub fn is_downbeat(&self, event: &Event) -> bool {
        self.downbeat_onsets.get(&event.measure) == Some(&event.onset)
    }
}
