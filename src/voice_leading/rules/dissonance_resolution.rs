//! Unresolved dissonances: any vertical interval outside the consonant set must resolve by
//! step in the following simultaneity.

use crate::context::{MotionType, Part};
use crate::voice_leading::check::{Finding, ViolationKind};

fn is_consonant(shorthand: &str) -> bool {
    matches!(shorthand, "P1" | "m3" | "M3" | "P5" | "m6" | "M6" | "P8")
}

pub fn check(i: usize, a: &Part, j: usize, b: &Part, pairs: &[(usize, usize)]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for w in pairs.windows(2) {
        let ((a0, b0), (a1, b1)) = (w[0], w[1]);

        let interval = a.events[a0].note.distance_to(b.events[b0].note).as_simple();
        if is_consonant(&interval.shorthand()) {
            continue;
        }

        let next_interval = a.events[a1].note.distance_to(b.events[b1].note).as_simple();
        let resolves_by_step = is_consonant(&next_interval.shorthand())
            && (a0 == a1 || a.events[a0].consecutions.right.is_some_and(|m| m.kind == MotionType::Step))
            && (b0 == b1 || b.events[b0].consecutions.right.is_some_and(|m| m.kind == MotionType::Step));

        if !resolves_by_step {
            findings.push(Finding {
                kind: ViolationKind::UnresolvedDissonance,
                measures: vec![a.events[a0].measure],
                parts: vec![i, j],
                message: format!(
                    "unresolved dissonance ({}) between parts {i} and {j} at measure {}",
                    interval.shorthand(),
                    a.events[a0].measure
                ),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Consecutions, Event, Motion, MotionDirection, Species};
    use crate::csd::{Csd, Direction};
    use crate::note::Note;
    use crate::pitch::Pitch;
    use num_rational::Ratio;

    fn ev(pitch: Pitch, octave: i16, measure: u32, onset: i64, right: Option<Motion>) -> Event {
        Event {
            index: 0,
            note: Note::new(pitch, octave),
            onset: Ratio::from_integer(onset),
            duration: Ratio::from_integer(1),
            measure,
            tied_to_next: false,
            csd: Csd { value: 0, direction: Direction::None },
            consecutions: Consecutions { left: None, right },
        }
    }

    #[test]
    fn dissonance_resolving_by_step_is_not_flagged() {
        let step_up = Motion { kind: MotionType::Step, direction: MotionDirection::Up };
        let a = Part {
            events: vec![ev(Pitch::G, 3, 0, 0, Some(step_up)), ev(Pitch::A, 3, 1, 1, None)],
            species: Species::First,
        };
        let b = Part { events: vec![ev(Pitch::C, 4, 0, 0, None)], species: Species::First };
        let pairs = vec![(0, 0), (1, 0)];
        let findings = check(0, &a, 1, &b, &pairs);
        assert!(findings.is_empty());
    }

    #[test]
    fn dissonance_left_by_leap_is_flagged() {
        let skip_up = Motion { kind: MotionType::Skip, direction: MotionDirection::Up };
        let a = Part {
            events: vec![ev(Pitch::G, 3, 0, 0, Some(skip_up)), ev(Pitch::D, 4, 1, 1, None)],
            species: Species::First,
        };
        let b = Part { events: vec![ev(Pitch::C, 4, 0, 0, None)], species: Species::First };
        let pairs = vec![(0, 0), (1, 0)];
        let findings = check(0, &a, 1, &b, &pairs);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::UnresolvedDissonance);
    }

    #[test]
    fn already_consonant_interval_is_never_flagged() {
        let step_up = Motion { kind: MotionType::Step, direction: MotionDirection::Up };
        let a = Part {
            events: vec![ev(Pitch::C, 4, 0, 0, Some(step_up)), ev(Pitch::D, 4, 1, 1, None)],
            species: Species::First,
        };
        let b = Part { events: vec![ev(Pitch::G, 4, 0, 0, None)], species: Species::First };
        let pairs = vec![(0, 0), (1, 0)];
        let findings = check(0, &a, 1, &b, &pairs);
        assert!(findings.is_empty());
    }
}
