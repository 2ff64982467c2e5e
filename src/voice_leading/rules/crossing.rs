//! Voice crossing and overlap between two parts treated as upper/lower by part index.

use crate::context::Part;
use crate::voice_leading::check::{Finding, ViolationKind};

pub fn check(i: usize, a: &Part, j: usize, b: &Part, pairs: &[(usize, usize)]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let (upper, lower, upper_idx, lower_idx) = if i < j { (a, b, i, j) } else { (b, a, j, i) };
    let pairs: Vec<(usize, usize)> = if i < j {
        pairs.to_vec()
    } else {
        pairs.iter().map(|&(x, y)| (y, x)).collect()
    };

    for &(iu, il) in &pairs {
        if upper.events[iu].note < lower.events[il].note {
            findings.push(Finding {
                kind: ViolationKind::VoiceCrossing,
                measures: vec![upper.events[iu].measure],
                parts: vec![upper_idx, lower_idx],
                message: format!(
                    "part {upper_idx} crosses below part {lower_idx} at measure {}",
                    upper.events[iu].measure
                ),
            });
        }
    }

    for w in pairs.windows(2) {
        let ((iu0, il0), (iu1, il1)) = (w[0], w[1]);
        if iu0 == iu1 && il0 == il1 {
            continue;
        }
        if iu1 != iu0 && upper.events[iu1].note < lower.events[il0].note {
            findings.push(Finding {
                kind: ViolationKind::VoiceCrossing,
                measures: vec![upper.events[iu1].measure],
                parts: vec![upper_idx, lower_idx],
                message: format!(
                    "part {upper_idx} overlaps below part {lower_idx}'s previous note at measure {}",
                    upper.events[iu1].measure
                ),
            });
        }
        if il1 != il0 && lower.events[il1].note > upper.events[iu0].note {
            findings.push(Finding {
                kind: ViolationKind::VoiceCrossing,
                measures: vec![lower.events[il1].measure],
                parts: vec![upper_idx, lower_idx],
                message: format!(
                    "part {lower_idx} overlaps above part {upper_idx}'s previous note at measure {}",
                    lower.events[il1].measure
                ),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::harmony::Key;
    use crate::io::{RawEvent, RawPart, RawScore};
    use crate::pitch::Pitch;

    fn event(pitch: &str, measure: u32, onset: i64) -> RawEvent {
        RawEvent {
            pitch: pitch.to_owned(),
            onset: num_rational::Ratio::from_integer(onset),
            duration: num_rational::Ratio::from_integer(1),
            measure,
            tied_to_next: false,
        }
    }

    #[test]
    fn nominal_upper_voice_sounding_below_the_lower_voice_is_flagged() {
        let raw = RawScore {
            parts: vec![
                RawPart { events: vec![event("C4", 0, 0)] },
                RawPart { events: vec![event("E4", 0, 0)] },
            ],
        };
        let ctx = GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap();
        let pairs = crate::voice_leading::check::aligned_pairs(&ctx.parts[0], &ctx.parts[1]);
        let findings = check(0, &ctx.parts[0], 1, &ctx.parts[1], &pairs);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ViolationKind::VoiceCrossing);
    }

    #[test]
    fn normally_ordered_voices_are_not_flagged() {
        let raw = RawScore {
            parts: vec![
                RawPart { events: vec![event("E4", 0, 0)] },
                RawPart { events: vec![event("C4", 0, 0)] },
            ],
        };
        let ctx = GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap();
        let pairs = crate::voice_leading::check::aligned_pairs(&ctx.parts[0], &ctx.parts[1]);
        let findings = check(0, &ctx.parts[0], 1, &ctx.parts[1], &pairs);
        assert!(findings.is_empty());
    }
}
