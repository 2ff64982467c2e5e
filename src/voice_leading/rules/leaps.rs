//! Disallowed melodic leaps within a single part: sevenths, and any augmented or diminished
//! interval.

use crate::context::Part;
use crate::interval::IntervalQuality;
use crate::voice_leading::check::{Finding, ViolationKind};

pub fn check(i: usize, part: &Part) -> Vec<Finding> {
    let mut findings = Vec::new();

    for w in part.events.windows(2) {
        let interval = w[0].note.distance_to(w[1].note);
        let simple_number = interval.as_simple().number().number().abs();

        let disallowed = matches!(interval.quality(), IntervalQuality::Augmented(_) | IntervalQuality::Diminished(_))
            || simple_number == 7;

        if disallowed {
            findings.push(Finding {
                kind: ViolationKind::DisallowedLeap,
                measures: vec![w[0].measure, w[1].measure],
                parts: vec![i],
                message: format!(
                    "disallowed leap ({}) in part {i} from measure {} to measure {}",
                    interval.shorthand(),
                    w[0].measure,
                    w[1].measure
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
    fn a_seventh_leap_is_flagged() {
        let part = Part { events: vec![ev(Pitch::C, 4, 0, 0), ev(Pitch::B, 4, 1, 1)], species: Species::First };
        let findings = check(0, &part);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::DisallowedLeap);
    }

    #[test]
    fn a_third_is_not_flagged() {
        let part = Part { events: vec![ev(Pitch::C, 4, 0, 0), ev(Pitch::E, 4, 1, 1)], species: Species::First };
        let findings = check(0, &part);
        assert!(findings.is_empty());
    }
}
