//! Species-specific rhythmic constraints: second-species downbeats must be consonant, and
//! fourth-species suspensions must resolve downward by step.

use std::collections::HashMap;

use crate::context::{Event, GlobalContext, MotionDirection, MotionType, Part, Species};
use crate::voice_leading::check::{Finding, ViolationKind};

fn is_consonant(shorthand: &str) -> bool {
    matches!(shorthand, "P1" | "m3" | "M3" | "P5" | "m6" | "M6" | "P8")
}

fn sounding_at(other: &Part, onset: num_rational::Ratio<i64>) -> Option<&Event> {
    other.events.iter().rev().find(|e| e.onset <= onset)
}

fn downbeats(part: &Part) -> Vec<&Event> {
    let mut by_measure: HashMap<u32, &Event> = HashMap::new();
    for event in &part.events {
        by_measure
            .entry(event.measure)
            .and_modify(|e| {
                if event.onset < e.onset {
                    *e = event;
                }
            })
            .or_insert(event);
    }
    by_measure.into_values().collect()
}

pub fn check(i: usize, part: &Part, ctx: &GlobalContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    if part.species == Species::Second {
        for downbeat in downbeats(part) {
            for (j, other) in ctx.parts.iter().enumerate() {
                if j == i {
                    continue;
                }
                let Some(other_event) = sounding_at(other, downbeat.onset) else { continue };
                let interval = downbeat.note.distance_to(other_event.note).as_simple();
                if !is_consonant(&interval.shorthand()) {
                    findings.push(Finding {
                        kind: ViolationKind::SpeciesRhythm,
                        measures: vec![downbeat.measure],
                        parts: vec![i, j],
                        message: format!(
                            "dissonant downbeat in second-species part {i} against part {j} at measure {}",
                            downbeat.measure
                        ),
                    });
                }
            }
        }
    }

    if part.species == Species::Fourth {
        for event in &part.events {
            if !event.tied_to_next {
                continue;
            }
            let resolves = event
                .consecutions
                .right
                .is_some_and(|m| m.kind == MotionType::Step && m.direction == MotionDirection::Down);
            if !resolves {
                findings.push(Finding {
                    kind: ViolationKind::SpeciesRhythm,
                    measures: vec![event.measure],
                    parts: vec![i],
                    message: format!(
                        "suspension in fourth-species part {i} at measure {} does not resolve down by step",
                        event.measure
                    ),
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Consecutions, Motion};
    use crate::csd::{Csd, Direction};
    use crate::harmony::Key;
    use crate::io::{RawEvent, RawPart, RawScore};
    use crate::note::Note;
    use crate::pitch::Pitch;

    fn raw_event(pitch: &str, measure: u32, onset: num_rational::Ratio<i64>) -> RawEvent {
        RawEvent { pitch: pitch.to_owned(), onset, duration: num_rational::Ratio::from_integer(1), measure, tied_to_next: false }
    }

    /// A pure ascending step run, safely bracketed by triad tones, standing in for the other
    /// voice a second-species part is checked against. At onset 0 it sounds F5 (a tenth above
    /// D4, consonant); at onset 1 it sounds G5 (a ninth above F4, dissonant).
    fn other_voice() -> GlobalContext {
        let r = num_rational::Ratio::from_integer;
        let raw = RawScore {
            parts: vec![RawPart {
                events: vec![
                    raw_event("E5", 0, r(-1)),
                    raw_event("F5", 0, r(0)),
                    raw_event("G5", 1, r(1)),
                    raw_event("A5", 1, r(2)),
                    raw_event("B5", 1, r(3)),
                    raw_event("C6", 1, r(4)),
                ],
            }],
        };
        GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap()
    }

    fn ev(pitch: Pitch, octave: i16, measure: u32, onset: i64, half: bool, tied_to_next: bool) -> Event {
        let onset = if half {
            num_rational::Ratio::new(2 * onset + 1, 2)
        } else {
            num_rational::Ratio::from_integer(onset)
        };
        Event {
            index: 0,
            note: Note::new(pitch, octave),
            onset,
            duration: num_rational::Ratio::from_integer(1),
            measure,
            tied_to_next,
            csd: Csd { value: 0, direction: Direction::None },
            consecutions: Consecutions::default(),
        }
    }

    #[test]
    fn second_species_downbeat_dissonant_against_the_other_part_is_flagged() {
        let part = Part {
            events: vec![
                ev(Pitch::D, 4, 0, 0, false, false),
                ev(Pitch::E, 4, 0, 0, true, false),
                ev(Pitch::F, 4, 1, 1, false, false),
                ev(Pitch::G, 4, 1, 1, true, false),
            ],
            species: Species::Second,
        };

        let ctx = other_voice();
        let findings = check(1, &part, &ctx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::SpeciesRhythm);
        assert_eq!(findings[0].measures, vec![1]);
    }

    #[test]
    fn second_species_consonant_downbeats_are_not_flagged() {
        let part = Part {
            events: vec![ev(Pitch::D, 4, 0, 0, false, false), ev(Pitch::E, 4, 0, 0, true, false)],
            species: Species::Second,
        };

        let ctx = other_voice();
        let findings = check(1, &part, &ctx);
        assert!(findings.is_empty());
    }

    fn single_note_ctx() -> GlobalContext {
        let raw = RawScore { parts: vec![RawPart { events: vec![raw_event("C4", 0, num_rational::Ratio::from_integer(0))] }] };
        GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap()
    }

    #[test]
    fn fourth_species_suspension_resolving_down_by_step_is_not_flagged() {
        let resolves_down = Motion { kind: MotionType::Step, direction: MotionDirection::Down };
        let mut suspended = ev(Pitch::C, 4, 0, 0, false, true);
        suspended.consecutions.right = Some(resolves_down);
        let part = Part { events: vec![suspended, ev(Pitch::B, 3, 1, 1, false, false)], species: Species::Fourth };

        let findings = check(0, &part, &single_note_ctx());
        assert!(findings.is_empty());
    }

    #[test]
    fn fourth_species_suspension_not_resolving_down_is_flagged() {
        let steps_up = Motion { kind: MotionType::Step, direction: MotionDirection::Up };
        let mut suspended = ev(Pitch::C, 4, 0, 0, false, true);
        suspended.consecutions.right = Some(steps_up);
        let part = Part { events: vec![suspended, ev(Pitch::D, 4, 1, 1, false, false)], species: Species::Fourth };

        let findings = check(0, &part, &single_note_ctx());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::SpeciesRhythm);
    }
}
