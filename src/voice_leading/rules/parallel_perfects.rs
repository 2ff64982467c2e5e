//! Parallel perfect fifths and octaves.

use crate::context::Part;
use crate::voice_leading::check::{Finding, ViolationKind};
use crate::voice_leading::motion::{classify, is_perfect_consonance, VoiceMotion};

pub fn check(i: usize, a: &Part, j: usize, b: &Part, pairs: &[(usize, usize)]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for w in pairs.windows(2) {
        let ((a0, b0), (a1, b1)) = (w[0], w[1]);
        if (a0, b0) == (a1, b1) {
            continue;
        }

        let n_a0 = a.events[a0].note;
        let n_a1 = a.events[a1].note;
        let n_b0 = b.events[b0].note;
        let n_b1 = b.events[b1].note;

        if is_perfect_consonance(n_a0, n_b0)
            && is_perfect_consonance(n_a1, n_b1)
            && classify(n_a0, n_a1, n_b0, n_b1) == VoiceMotion::Parallel
        {
            findings.push(Finding {
                kind: ViolationKind::ParallelPerfect,
                measures: vec![a.events[a0].measure, a.events[a1].measure],
                parts: vec![i, j],
                message: format!(
                    "parallel perfect interval between parts {i} and {j} from measure {} to measure {}",
                    a.events[a0].measure, a.events[a1].measure
                ),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Consecutions, Event, Species};
    use crate::csd::{Csd, Direction};
    use crate::note::Note;
    use crate::pitch::Pitch;
    use num_rational::Ratio;

    fn ev(pitch: Pitch, octave: i16, measure: u32, onset: i64) -> Event {
        Event {
            index: 0,
            note: Note::new(pitch, octave),
            onset: Ratio::from_integer(onset),
            duration: Ratio::from_integer(1),
            measure,
            tied_to_next: false,
            csd: Csd { value: 0, direction: Direction::None },
            consecutions: Consecutions::default(),
        }
    }

    #[test]
    fn parallel_fifths_between_two_parts_are_flagged() {
        // `a` must sound below `b` here: the consonance/perfect checks compare the signed
        // interval from `a`'s note to `b`'s, which only reduces to "P5"/"P8"/"P1" ascending.
        let a = Part { events: vec![ev(Pitch::F, 3, 0, 0), ev(Pitch::G, 3, 1, 1)], species: Species::First };
        let b = Part { events: vec![ev(Pitch::C, 4, 0, 0), ev(Pitch::D, 4, 1, 1)], species: Species::First };
        let pairs = vec![(0, 0), (1, 1)];
        let findings = check(0, &a, 1, &b, &pairs);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::ParallelPerfect);
    }

    #[test]
    fn contrary_motion_into_a_fifth_is_not_flagged() {
        let a = Part { events: vec![ev(Pitch::C, 4, 0, 0), ev(Pitch::D, 4, 1, 1)], species: Species::First };
        let b = Part { events: vec![ev(Pitch::F, 3, 0, 0), ev(Pitch::E, 3, 1, 1)], species: Species::First };
        let pairs = vec![(0, 0), (1, 1)];
        let findings = check(0, &a, 1, &b, &pairs);
        assert!(findings.is_empty());
    }
}
