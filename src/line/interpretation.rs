//! The result of parsing one part under one requested line-type.

use std::collections::{HashMap, HashSet};

use crate::line::arc::Arc;
use crate::line::rule::RuleLabel;
use crate::pitch::Pitch;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineType {
    Primary,
    Bass,
    Generic,
}

/// One syntactic derivation of a part: a set of arcs plus a rule label for every event.
#[derive(Clone, Debug)]
pub struct Interpretation {
    pub line_type: LineType,
    pub arcs: Vec<Arc>,
    pub rule_labels: HashMap<usize, RuleLabel>,
    /// Events generated as an interpolation inside an already-open arc, marked with
    /// parentheses on output rather than participating in the arc's own shape.
    pub parentheses: HashSet<usize>,
    /// Position of the structural-dominant onset (primary/bass lines only).
    pub s3_index: Option<usize>,
    /// The structural dominant's own pitch (primary/bass lines only).
    pub s3_final: Option<Pitch>,
}

impl Interpretation {
    /// Arcs ordered by ascending left endpoint, then ascending right endpoint, per the
    /// determinism requirement on interpretation output.
    pub fn sorted_arcs(&self) -> Vec<&Arc> {
        let mut arcs: Vec<&Arc> = self.arcs.iter().collect();
        arcs.sort_by_key(|a| (a.left(), a.right()));
        arcs
    }
}
