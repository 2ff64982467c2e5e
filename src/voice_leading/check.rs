//! Orchestrates the voice-leading checker: walks every pair of aligned parts plus each part on
//! its own, collecting findings. Purely diagnostic — never modifies its input.

use num_rational::Ratio;

use crate::context::{GlobalContext, Part};
use crate::voice_leading::rules;

/// The kind of voice-leading violation a [`Finding`] reports.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    ParallelPerfect,
    HiddenPerfect,
    UnresolvedDissonance,
    VoiceCrossing,
    DisallowedLeap,
    SpeciesRhythm,
}

/// A single voice-leading violation: which rule, which bars, which parts, and why.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    pub kind: ViolationKind,
    pub measures: Vec<u32>,
    pub parts: Vec<usize>,
    pub message: String,
}

/// For two parts, the list of `(index_in_a, index_in_b)` pairs of events sounding together,
/// one entry per distinct onset across either part.
pub(crate) fn aligned_pairs(a: &Part, b: &Part) -> Vec<(usize, usize)> {
    let mut onsets: Vec<Ratio<i64>> = a.events.iter().chain(b.events.iter()).map(|e| e.onset).collect();
    onsets.sort();
    onsets.dedup();

    onsets
        .into_iter()
        .filter_map(|t| {
            let ia = a.events.iter().rposition(|e| e.onset <= t)?;
            let ib = b.events.iter().rposition(|e| e.onset <= t)?;
            Some((ia, ib))
        })
        .collect()
}

/// Runs every voice-leading rule over `ctx` and returns every finding, in no particular
/// priority order.
pub fn check(ctx: &GlobalContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    for i in 0..ctx.parts.len() {
        for j in (i + 1)..ctx.parts.len() {
            let a = &ctx.parts[i];
            let b = &ctx.parts[j];
            let pairs = aligned_pairs(a, b);

            findings.extend(rules::parallel_perfects::check(i, a, j, b, &pairs));
            findings.extend(rules::hidden_perfects::check(i, a, j, b, &pairs));
            findings.extend(rules::crossing::check(i, a, j, b, &pairs));
            findings.extend(rules::dissonance_resolution::check(i, a, j, b, &pairs));
        }
    }

    for (i, part) in ctx.parts.iter().enumerate() {
        findings.extend(rules::leaps::check(i, part));
        findings.extend(rules::species_rhythm::check(i, part, ctx));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::Key;
    use crate::io::{RawEvent, RawPart, RawScore};
    use crate::pitch::Pitch;

    fn event(pitch: &str, measure: u32, onset: i64) -> RawEvent {
        RawEvent {
            pitch: pitch.to_owned(),
            onset: Ratio::from_integer(onset),
            duration: Ratio::from_integer(1),
            measure,
            tied_to_next: false,
        }
    }

    #[test]
    fn aligned_pairs_tracks_the_latest_sounding_event_in_each_part_per_onset() {
        let a = RawPart { events: vec![event("C4", 0, 0), event("E4", 1, 1)] };
        let b = RawPart { events: vec![event("G3", 0, 0)] };
        let raw = RawScore { parts: vec![a, b] };
        let ctx = GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap();
        let pairs = aligned_pairs(&ctx.parts[0], &ctx.parts[1]);
        assert_eq!(pairs, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn check_surfaces_a_parallel_perfect_finding_across_parts() {
        // Both parts are bracketed by a triad tone at either end (required for key validation)
        // around the real content: `a` moves F3->G3 under `b`'s C4->D4, a pair of parallel
        // fifths.
        let raw = RawScore {
            parts: vec![
                RawPart {
                    events: vec![event("C3", 0, 0), event("F3", 1, 1), event("G3", 2, 2), event("C4", 3, 3)],
                },
                RawPart {
                    events: vec![event("G3", 0, 0), event("C4", 1, 1), event("D4", 2, 2), event("E4", 3, 3)],
                },
            ],
        };
        let ctx = GlobalContext::build(&raw, Some(Key::major(Pitch::C))).unwrap();
        let findings = check(&ctx);
        assert!(findings.iter().any(|f| f.kind == ViolationKind::ParallelPerfect));
    }
}
