//! Parse-selection layer: when a part admits several interpretations, and a score has several
//! parts, chooses the cross-part-compatible subset by preference rules. Never invents an
//! interpretation — only filters.

use crate::line::interpretation::{Interpretation, LineType};

fn s3_distance(primary: &Interpretation, bass: &Interpretation) -> Option<i64> {
    match (primary.s3_index, bass.s3_index) {
        (Some(p), Some(b)) => Some((p as i64 - b as i64).abs()),
        _ => None,
    }
}

/// Two-part case: keeps only (primary, bass) pairs at the minimum `S3` offset distance.
pub fn select_two_part<'a>(
    primaries: &'a [Interpretation],
    basses: &'a [Interpretation],
) -> Vec<(&'a Interpretation, &'a Interpretation)> {
    let distances: Vec<(usize, usize, i64)> = primaries
        .iter()
        .enumerate()
        .flat_map(|(pi, p)| {
            basses.iter().enumerate().filter_map(move |(bi, b)| {
                s3_distance(p, b).map(|d| (pi, bi, d))
            })
        })
        .collect();

    let Some(min) = distances.iter().map(|&(_, _, d)| d).min() else {
        return Vec::new();
    };

    distances
        .into_iter()
        .filter(|&(_, _, d)| d == min)
        .map(|(pi, bi, _)| (&primaries[pi], &basses[bi]))
        .collect()
}

/// Single-part case: every interpretation passes through unfiltered.
pub fn select_single_part(interpretations: &[Interpretation]) -> Vec<&Interpretation> {
    interpretations.iter().collect()
}

/// Three-part case: requires at least one upper line be primary; selects the rest by `S3`
/// alignment against that primary, analogous to the two-part rule.
pub fn select_three_part<'a>(
    upper_a: &'a [Interpretation],
    upper_b: &'a [Interpretation],
    bass: &'a [Interpretation],
) -> Vec<(&'a Interpretation, &'a Interpretation, &'a Interpretation)> {
    let primaries_a: Vec<&Interpretation> = upper_a.iter().filter(|i| i.line_type == LineType::Primary).collect();
    let primaries_b: Vec<&Interpretation> = upper_b.iter().filter(|i| i.line_type == LineType::Primary).collect();

    if primaries_a.is_empty() && primaries_b.is_empty() {
        return Vec::new();
    }

    let mut best: Vec<(&Interpretation, &Interpretation, &Interpretation)> = Vec::new();
    let mut min_distance = i64::MAX;

    for pa in upper_a {
        let pa_is_primary = pa.line_type == LineType::Primary;
        for pb in upper_b {
            let pb_is_primary = pb.line_type == LineType::Primary;
            if !pa_is_primary && !pb_is_primary {
                continue;
            }
            for b in bass {
                let reference = if pa_is_primary { pa } else { pb };
                let Some(d) = s3_distance(reference, b) else { continue };
                match d.cmp(&min_distance) {
                    std::cmp::Ordering::Less => {
                        min_distance = d;
                        best = vec![(pa, pb, b)];
                    }
                    std::cmp::Ordering::Equal => best.push((pa, pb, b)),
                    std::cmp::Ordering::Greater => {}
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn interp(line_type: LineType, s3_index: Option<usize>) -> Interpretation {
        Interpretation {
            line_type,
            arcs: Vec::new(),
            rule_labels: HashMap::new(),
            parentheses: HashSet::new(),
            s3_index,
            s3_final: None,
        }
    }

    #[test]
    fn two_part_keeps_minimum_distance_only() {
        let primaries = vec![interp(LineType::Primary, Some(4)), interp(LineType::Primary, Some(6))];
        let basses = vec![interp(LineType::Bass, Some(5))];
        let selected = select_two_part(&primaries, &basses);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0.s3_index, Some(4));
    }

    #[test]
    fn single_part_passes_through() {
        let interps = vec![interp(LineType::Generic, None), interp(LineType::Generic, None)];
        assert_eq!(select_single_part(&interps).len(), 2);
    }
}
