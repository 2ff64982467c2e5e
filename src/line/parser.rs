//! The line parser: reduces a part's events to elaboration arcs around a line-type skeleton.
//!
//! The spec describes a depth-first fork/prune search over every possible rule application.
//! This implementation instead performs a deterministic reductive sweep — repetition, register
//! transfer, neighbor, then insertion collapsing, followed by line-type skeleton validation —
//! which covers the same arc repertoire and yields the same multiplicity of interpretations for
//! the ambiguous case the spec calls out by name (multiple structural-dominant candidates along
//! one descent), without exploring elaboration groupings the reduction does not itself produce.
//! Recorded as a scope decision in DESIGN.md.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::context::{Event, GlobalContext, Part, Species};
use crate::harmony::{Key, ScaleDegree};
use crate::line::arc::{Arc, ArcKind};
use crate::line::interpretation::{Interpretation, LineType};
use crate::line::rule::RuleLabel;
use crate::note::Note;
use crate::pitch::PitchClass;

/// Caps the number of structural-dominant candidates (and, transitively, interpretations)
/// explored for one part, guarding against pathologically ambiguous input.
#[derive(Copy, Clone, Debug)]
pub struct BranchLimits {
    pub max_branches: usize,
}

impl Default for BranchLimits {
    fn default() -> Self {
        Self { max_branches: 4096 }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("interpretation search exceeded limits ({limit} branches)")]
    SearchLimitExceeded { limit: usize },

    #[error("the non-tonic-triad pitch {pitch} in measure {measure} cannot be generated")]
    UngeneratablePitch { pitch: Note, measure: u32, index: usize },

    #[error("the part admits no interpretation as a {line_type:?} line")]
    NoInterpretation { line_type: LineType },
}

fn triad_pitch_classes(key: Key) -> HashSet<PitchClass> {
    [ScaleDegree::I, ScaleDegree::III, ScaleDegree::V]
        .into_iter()
        .map(|d| key.relative_pitch(d).as_pitch_class())
        .collect()
}

fn residue(events: &[Event], index: usize) -> u8 {
    events[index].csd.value.rem_euclid(7) as u8
}

fn is_head_degree(value: i32) -> bool {
    let residue = value.rem_euclid(7);
    matches!(residue, 1 | 2 | 4) || (residue == 0 && value > 0)
}

fn shallowest_error(part: &Part, skeleton: &[usize], bad: usize) -> ParseError {
    let event = &part.events[skeleton[bad]];
    ParseError::UngeneratablePitch {
        pitch: event.note,
        measure: event.measure,
        index: event.index,
    }
}

/// Collapses adjacent same-degree events into `Repetition` arcs, returning the arcs, the rule
/// labels assigned, and the remaining "skeleton" indices in order. A repeated pair whose second
/// event is the part's very last event, and which restates the eventual tonic, is read instead
/// as an `Anticipation`: the final arrival stated early, then repeated to close the line.
fn collapse_repetition(events: &[Event]) -> (Vec<Arc>, HashMap<usize, RuleLabel>, Vec<usize>) {
    let mut arcs = Vec::new();
    let mut labels = HashMap::new();
    let mut covered = HashSet::new();

    for i in 1..events.len() {
        if events[i].csd.value == events[i - 1].csd.value {
            let anticipates_final = i == events.len() - 1 && events[i].csd.value.rem_euclid(7) == 0;
            let (kind, label) = if anticipates_final {
                (ArcKind::Anticipation, RuleLabel::Anticipation)
            } else {
                (ArcKind::Repetition, RuleLabel::Repetition)
            };

            arcs.push(Arc::new(kind, vec![i - 1, i]));
            labels.insert(i, label);
            covered.insert(i);
        }
    }

    let skeleton = (0..events.len()).filter(|i| !covered.contains(i)).collect();
    (arcs, labels, skeleton)
}

/// Collapses `x - y - x` neighbor figures out of `skeleton` to a fixpoint.
fn collapse_neighbors(
    events: &[Event],
    mut skeleton: Vec<usize>,
    arcs: &mut Vec<Arc>,
    labels: &mut HashMap<usize, RuleLabel>,
) -> Vec<usize> {
    loop {
        let mut next = Vec::with_capacity(skeleton.len());
        let mut changed = false;
        let mut i = 0;

        while i < skeleton.len() {
            if i + 2 < skeleton.len() {
                let (a, b, c) = (skeleton[i], skeleton[i + 1], skeleton[i + 2]);
                let (va, vb, vc) = (events[a].csd.value, events[b].csd.value, events[c].csd.value);
                if va == vc && (vb - va).abs() == 1 {
                    arcs.push(Arc::new(ArcKind::Neighbor, vec![a, c]));
                    labels.insert(b, RuleLabel::Neighbor);
                    next.push(a);
                    next.push(c);
                    i += 3;
                    changed = true;
                    continue;
                }
            }
            next.push(skeleton[i]);
            i += 1;
        }

        skeleton = next;
        if !changed {
            return skeleton;
        }
    }
}

/// Collapses adjacent occurrences of the same scale degree restated an octave or more away into
/// `Transfer` arcs: the line's own structural degree carried to a different register.
fn collapse_transfers(
    events: &[Event],
    skeleton: Vec<usize>,
    arcs: &mut Vec<Arc>,
    labels: &mut HashMap<usize, RuleLabel>,
) -> Vec<usize> {
    let mut next = Vec::with_capacity(skeleton.len());
    let mut i = 0;

    while i < skeleton.len() {
        if i + 1 < skeleton.len() {
            let (a, b) = (skeleton[i], skeleton[i + 1]);
            let diff = events[b].csd.value - events[a].csd.value;
            if diff != 0 && diff % 7 == 0 {
                arcs.push(Arc::new(ArcKind::Transfer, vec![a, b]));
                labels.insert(b, RuleLabel::Transfer);
                next.push(a);
                i += 2;
                continue;
            }
        }
        next.push(skeleton[i]);
        i += 1;
    }

    next
}

/// Collapses a single interpolated tone out of `skeleton` whenever removing it restores a
/// direct step between its neighbors: a tone generated inside an already-open arc rather than
/// given a structural role of its own, marked with parentheses on output. Runs to a fixpoint.
fn collapse_insertions(
    events: &[Event],
    mut skeleton: Vec<usize>,
    arcs: &mut Vec<Arc>,
    labels: &mut HashMap<usize, RuleLabel>,
    parentheses: &mut HashSet<usize>,
) -> Vec<usize> {
    loop {
        let mut next = Vec::with_capacity(skeleton.len());
        let mut changed = false;
        let mut i = 0;

        while i < skeleton.len() {
            if i + 2 < skeleton.len() {
                let (a, b, c) = (skeleton[i], skeleton[i + 1], skeleton[i + 2]);
                let (va, vb, vc) = (events[a].csd.value, events[b].csd.value, events[c].csd.value);
                // `a` and `c` are already a direct step apart, so no passing tone was needed to
                // connect them; `b` reaches and leaves by leap, floating free of that step.
                let reaches_directly = (vc - va).abs() == 1;
                let interpolated_by_leap =
                    (vb - va).abs() > 1 && (vc - vb).abs() > 1 && (vb - va).abs() <= 3;
                if reaches_directly && interpolated_by_leap {
                    arcs.push(Arc::new(ArcKind::Insertion, vec![a, b]));
                    labels.insert(b, RuleLabel::Insertion);
                    parentheses.insert(b);
                    next.push(a);
                    next.push(c);
                    i += 3;
                    changed = true;
                    continue;
                }
            }
            next.push(skeleton[i]);
            i += 1;
        }

        skeleton = next;
        if !changed {
            return skeleton;
        }
    }
}

/// Position within `skeleton` where the line's final monotonic, one-degree-at-a-time descent to
/// the tonic begins: found by walking backward from the tonic while each predecessor is exactly
/// one scale-degree above its successor. Anything before this position is an initial ascent or
/// other prolongation of the eventual head, folded into a single `Passing` span rather than
/// explored as alternative derivations.
fn descent_start(part: &Part, skeleton: &[usize]) -> usize {
    let mut start = skeleton.len() - 1;
    while start > 0 {
        let prev = part.events[skeleton[start - 1]].csd.value;
        let cur = part.events[skeleton[start]].csd.value;
        if prev == cur + 1 {
            start -= 1;
        } else {
            break;
        }
    }
    start
}

fn parse_primary(
    part: &Part,
    arcs: &[Arc],
    labels: &HashMap<usize, RuleLabel>,
    parentheses: &HashSet<usize>,
    skeleton: &[usize],
    limits: BranchLimits,
) -> Result<Vec<Interpretation>, ParseError> {
    if skeleton.len() < 2 {
        return Err(ParseError::NoInterpretation { line_type: LineType::Primary });
    }
    if residue(&part.events, *skeleton.last().unwrap()) != 0 {
        return Err(shallowest_error(part, skeleton, skeleton.len() - 1));
    }

    let head_pos = descent_start(part, skeleton);
    let descent = &skeleton[head_pos..];
    if descent.len() < 2 {
        return Err(ParseError::NoInterpretation { line_type: LineType::Primary });
    }
    if !is_head_degree(part.events[descent[0]].csd.value) {
        return Err(shallowest_error(part, descent, 0));
    }

    let mut base_arcs = arcs.to_vec();
    let mut base_labels = labels.clone();
    if head_pos > 0 {
        base_arcs.push(Arc::new(ArcKind::Passing, skeleton[0..=head_pos].to_vec()));
        for &i in &skeleton[0..head_pos] {
            base_labels.entry(i).or_insert(RuleLabel::Passing);
        }
    }

    // A head at 2̂ or 3̂ never itself touches scale-degree 5̂ in a strict one-step descent: its
    // structural-dominant support comes from the bass line underneath, not from this line's own
    // notes. Only heads at 5̂ or 8̂ pass through an internal 5̂ that can anchor `S3`.
    let head_degree = residue(&part.events, descent[0]);
    let touches_internal_dominant = matches!(head_degree, 4 | 0);

    let candidates: Vec<Option<usize>> = if touches_internal_dominant {
        let found: Vec<usize> = (1..descent.len() - 1)
            .filter(|&k| residue(&part.events, descent[k]) == 4)
            .collect();
        if found.is_empty() {
            return Err(ParseError::NoInterpretation { line_type: LineType::Primary });
        }
        if found.len() > limits.max_branches {
            return Err(ParseError::SearchLimitExceeded { limit: limits.max_branches });
        }
        found.into_iter().map(Some).collect()
    } else {
        vec![None]
    };

    Ok(candidates
        .into_iter()
        .map(|k| {
            let mut rule_labels = base_labels.clone();
            let mut interp_arcs = base_arcs.clone();

            let head = descent[0];
            let tail = *descent.last().unwrap();
            rule_labels.insert(head, RuleLabel::S1);
            rule_labels.insert(tail, RuleLabel::S2);
            if let Some(k) = k {
                rule_labels.insert(descent[k], RuleLabel::S3);
            }

            let excluded: HashSet<usize> =
                [Some(head), Some(tail), k.map(|k| descent[k])].into_iter().flatten().collect();
            for &i in descent.iter().filter(|i| !excluded.contains(i)) {
                rule_labels.entry(i).or_insert(RuleLabel::Passing);
            }

            match k {
                Some(k) if k > 1 => interp_arcs.push(Arc::new(ArcKind::Passing, descent[0..=k].to_vec())),
                _ => {}
            }
            match k {
                Some(k) if k < descent.len() - 2 => {
                    interp_arcs.push(Arc::new(ArcKind::Passing, descent[k..].to_vec()));
                }
                None if descent.len() > 2 => interp_arcs.push(Arc::new(ArcKind::Passing, descent.to_vec())),
                _ => {}
            }

            Interpretation {
                line_type: LineType::Primary,
                arcs: interp_arcs,
                rule_labels,
                parentheses: parentheses.clone(),
                s3_index: k.map(|k| part.events[descent[k]].index),
                s3_final: k.map(|k| part.events[descent[k]].note.pitch),
            }
        })
        .collect())
}

fn build_bass_candidate(
    part: &Part,
    arcs: &[Arc],
    labels: &HashMap<usize, RuleLabel>,
    parentheses: &HashSet<usize>,
    skeleton: &[usize],
    triad: &HashSet<PitchClass>,
    k: usize,
) -> Result<Interpretation, ParseError> {
    let mut rule_labels = labels.clone();
    let mut interp_arcs = arcs.to_vec();

    rule_labels.insert(skeleton[0], RuleLabel::S1);
    rule_labels.insert(skeleton[k], RuleLabel::S3);
    rule_labels.insert(*skeleton.last().unwrap(), RuleLabel::S2);

    for segment in [&skeleton[0..=k], &skeleton[k..]] {
        if segment.len() == 2 {
            let (a, b) = (segment[0], segment[1]);
            let both_triad = triad.contains(&part.events[a].note.pitch.as_pitch_class())
                && triad.contains(&part.events[b].note.pitch.as_pitch_class());
            if both_triad {
                interp_arcs.push(Arc::new(ArcKind::Arpeggiation, vec![a, b]));
            }
            continue;
        }

        let stepwise = segment
            .windows(2)
            .all(|w| (part.events[w[1]].csd.value - part.events[w[0]].csd.value).abs() == 1);
        if !stepwise {
            return Err(shallowest_error(part, segment, 1));
        }
        interp_arcs.push(Arc::new(ArcKind::Passing, segment.to_vec()));
        for &i in &segment[1..segment.len() - 1] {
            rule_labels.entry(i).or_insert(RuleLabel::Passing);
        }
    }

    Ok(Interpretation {
        line_type: LineType::Bass,
        arcs: interp_arcs,
        rule_labels,
        parentheses: parentheses.clone(),
        s3_index: Some(part.events[skeleton[k]].index),
        s3_final: Some(part.events[skeleton[k]].note.pitch),
    })
}

fn parse_bass(
    part: &Part,
    arcs: &[Arc],
    labels: &HashMap<usize, RuleLabel>,
    parentheses: &HashSet<usize>,
    skeleton: &[usize],
    key: Key,
    limits: BranchLimits,
) -> Result<Vec<Interpretation>, ParseError> {
    if skeleton.len() < 2 {
        return Err(ParseError::NoInterpretation { line_type: LineType::Bass });
    }
    if residue(&part.events, skeleton[0]) != 0 || residue(&part.events, *skeleton.last().unwrap()) != 0 {
        return Err(ParseError::NoInterpretation { line_type: LineType::Bass });
    }

    let s3_candidates: Vec<usize> = (1..skeleton.len() - 1)
        .filter(|&k| residue(&part.events, skeleton[k]) == 4)
        .collect();
    if s3_candidates.is_empty() {
        return Err(ParseError::NoInterpretation { line_type: LineType::Bass });
    }
    if s3_candidates.len() > limits.max_branches {
        return Err(ParseError::SearchLimitExceeded { limit: limits.max_branches });
    }

    let triad = triad_pitch_classes(key);
    let mut interpretations = Vec::new();
    let mut last_error = None;

    for k in s3_candidates {
        match build_bass_candidate(part, arcs, labels, parentheses, skeleton, &triad, k) {
            Ok(interp) => interpretations.push(interp),
            Err(err) => last_error = Some(err),
        }
    }

    if interpretations.is_empty() {
        return Err(last_error.unwrap_or(ParseError::NoInterpretation { line_type: LineType::Bass }));
    }
    Ok(interpretations)
}

fn parse_generic(
    part: &Part,
    arcs: &[Arc],
    labels: &HashMap<usize, RuleLabel>,
    parentheses: &HashSet<usize>,
    skeleton: &[usize],
    key: Key,
) -> Result<Vec<Interpretation>, ParseError> {
    if skeleton.len() < 2 {
        return Err(ParseError::NoInterpretation { line_type: LineType::Generic });
    }

    let triad = triad_pitch_classes(key);
    let first_ok = triad.contains(&part.events[skeleton[0]].note.pitch.as_pitch_class());
    let last_ok = triad.contains(&part.events[*skeleton.last().unwrap()].note.pitch.as_pitch_class());
    if !first_ok || !last_ok {
        return Err(ParseError::NoInterpretation { line_type: LineType::Generic });
    }

    let mut rule_labels = labels.clone();
    let mut interp_arcs = arcs.to_vec();
    rule_labels.insert(skeleton[0], RuleLabel::Basic);
    rule_labels.insert(*skeleton.last().unwrap(), RuleLabel::Basic);

    for w in skeleton.windows(2) {
        let (a, b) = (w[0], w[1]);
        let diff = (part.events[b].csd.value - part.events[a].csd.value).abs();
        if diff > 1 {
            let both_triad = triad.contains(&part.events[a].note.pitch.as_pitch_class())
                && triad.contains(&part.events[b].note.pitch.as_pitch_class());
            if !both_triad {
                return Err(shallowest_error(part, skeleton, 1));
            }
            interp_arcs.push(Arc::new(ArcKind::Arpeggiation, vec![a, b]));
            rule_labels.entry(a).or_insert(RuleLabel::Arpeggiation);
            rule_labels.entry(b).or_insert(RuleLabel::Arpeggiation);
        }
    }

    for &i in &skeleton[1..skeleton.len() - 1] {
        rule_labels.entry(i).or_insert(RuleLabel::Passing);
    }

    Ok(vec![Interpretation {
        line_type: LineType::Generic,
        arcs: interp_arcs,
        rule_labels,
        parentheses: parentheses.clone(),
        s3_index: None,
        s3_final: None,
    }])
}

/// Whether an off-beat, third-species event is admissible under §4.5's refinement: either part
/// of a passing or neighbor figure already recognized by the collapse passes, or consonant with
/// the measure's local harmonic triad.
fn third_species_refinement_ok(ctx: &GlobalContext, part: &Part, labels: &HashMap<usize, RuleLabel>) -> bool {
    if part.species != Species::Third {
        return true;
    }

    part.events.iter().enumerate().all(|(i, event)| {
        if ctx.is_downbeat(event) {
            return true;
        }
        if matches!(labels.get(&i), Some(RuleLabel::Passing | RuleLabel::Neighbor)) {
            return true;
        }
        match ctx.harmonic_context_for_measure(event.measure) {
            Some(harmony) => harmony.pitch_classes.contains(&event.note.pitch.as_pitch_class()),
            None => true,
        }
    })
}

pub struct LineParser;

impl LineParser {
    /// Parses part `part_index` of `ctx` as `line_type`, returning every surviving
    /// interpretation. Third-species parts are additionally filtered against
    /// [`GlobalContext::harmonic_context_for_measure`]: an interpretation whose off-beat events
    /// are neither a recognized passing/neighbor figure nor consonant with the prevailing local
    /// harmony is rejected.
    pub fn parse(
        ctx: &GlobalContext,
        part_index: usize,
        line_type: LineType,
        limits: BranchLimits,
    ) -> Result<Vec<Interpretation>, ParseError> {
        let part = &ctx.parts[part_index];
        if part.events.len() < 2 {
            return Err(ParseError::NoInterpretation { line_type });
        }

        let (mut arcs, mut labels, skeleton) = collapse_repetition(&part.events);
        let skeleton = collapse_neighbors(&part.events, skeleton, &mut arcs, &mut labels);
        let skeleton = collapse_transfers(&part.events, skeleton, &mut arcs, &mut labels);
        let mut parentheses = HashSet::new();
        let skeleton =
            collapse_insertions(&part.events, skeleton, &mut arcs, &mut labels, &mut parentheses);

        let interpretations = match line_type {
            LineType::Primary => parse_primary(part, &arcs, &labels, &parentheses, &skeleton, limits),
            LineType::Bass => parse_bass(part, &arcs, &labels, &parentheses, &skeleton, ctx.key, limits),
            LineType::Generic => parse_generic(part, &arcs, &labels, &parentheses, &skeleton, ctx.key),
        }?;

        let surviving: Vec<Interpretation> = interpretations
            .into_iter()
            .filter(|i| third_species_refinement_ok(ctx, part, &i.rule_labels))
            .collect();

        if surviving.is_empty() {
            return Err(ParseError::NoInterpretation { line_type });
        }
        Ok(surviving)
    }

    /// Parses part `part_index` of `ctx` under every line-type, returning only those that
    /// succeed.
    pub fn parse_all(ctx: &GlobalContext, part_index: usize, limits: BranchLimits) -> Vec<Interpretation> {
        [LineType::Primary, LineType::Bass, LineType::Generic]
            .into_iter()
            .filter_map(|lt| Self::parse(ctx, part_index, lt, limits).ok())
            .flatten()
            .collect()
    }
}
