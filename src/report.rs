//! Report & Annotation Layer: accumulates per-part parse outcomes and voice-leading findings
//! as data during analysis, then renders them to text or JSON exactly once, at the end.
//!
//! This is the "scoped reporter object" from the design notes: `Reporter` is an owned value,
//! built once per `evaluate-lines`/`evaluate-counterpoint` run and dropped normally at the end
//! of `main`. Nothing here behaves like a process-global logger.

use serde::{Deserialize, Serialize};

use crate::context::Species;
use crate::harmony::{DiatonicMode, Key};
use crate::line::{ArcKind, Interpretation, LineType, ParseError};
use crate::voice_leading::Finding;

fn mode_name(mode: DiatonicMode) -> &'static str {
    match mode {
        DiatonicMode::Ionian => "major",
        DiatonicMode::Dorian => "dorian",
        DiatonicMode::Phrygian => "phrygian",
        DiatonicMode::Lydian => "lydian",
        DiatonicMode::Mixolydian => "mixolydian",
        DiatonicMode::Aeolian => "minor",
        DiatonicMode::Locrian => "locrian",
    }
}

fn key_name(key: Key) -> String {
    format!("{} {}", key.tonic, mode_name(key.mode))
}

/// A single parse failure for one part under one requested line-type, with the shallowest
/// diagnostic the parser could produce.
#[derive(Clone, Debug)]
pub struct ParseFailure {
    pub part: usize,
    pub line_type: LineType,
    pub error: ParseError,
}

/// One part's outcome: which line-types it admits, and why the rest failed.
#[derive(Clone, Debug)]
pub struct PartOutcome {
    pub index: usize,
    pub species: Species,
    pub accepted: Vec<Interpretation>,
    pub failures: Vec<ParseFailure>,
}

impl PartOutcome {
    fn generable_line_types(&self) -> Vec<LineType> {
        let mut kinds: Vec<LineType> = self.accepted.iter().map(|i| i.line_type).collect();
        kinds.sort_by_key(|lt| line_type_order(*lt));
        kinds.dedup();
        kinds
    }
}

fn line_type_order(lt: LineType) -> i32 {
    match lt {
        LineType::Primary => 0,
        LineType::Bass => 1,
        LineType::Generic => 2,
    }
}

fn line_type_name(lt: LineType) -> &'static str {
    match lt {
        LineType::Primary => "primary",
        LineType::Bass => "bass",
        LineType::Generic => "generic",
    }
}

/// One annotated event, suitable for external rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    pub index: usize,
    pub rule_label: Option<String>,
    /// Generated as an interpolation inside an already-open arc; render in parentheses.
    pub parenthesized: bool,
}

/// One arc, with a presentation-agnostic register-transfer flag in place of a
/// solid/dashed string: the renderer decides how to draw it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArcAnnotation {
    pub kind: String,
    pub events: Vec<usize>,
    pub register_transfer: bool,
}

/// A fully annotated interpretation of one part, ready for JSON export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub part: usize,
    pub line_type: String,
    pub events: Vec<AnnotatedEvent>,
    pub arcs: Vec<ArcAnnotation>,
}

fn annotate(part: usize, interpretation: &Interpretation, event_count: usize) -> Annotation {
    let events = (0..event_count)
        .map(|index| AnnotatedEvent {
            index,
            rule_label: interpretation.rule_labels.get(&index).map(|l| l.describe().to_owned()),
            parenthesized: interpretation.parentheses.contains(&index),
        })
        .collect();

    let arcs = interpretation
        .sorted_arcs()
        .into_iter()
        .map(|arc| {
            let kind = match arc.kind {
                ArcKind::Repetition => "repetition",
                ArcKind::Neighbor => "neighbor",
                ArcKind::Passing => "passing",
                ArcKind::Arpeggiation => "arpeggiation",
                ArcKind::Anticipation => "anticipation",
                ArcKind::Insertion => "insertion",
                ArcKind::Transfer => "transfer",
                ArcKind::Basic => "basic",
            };
            ArcAnnotation {
                kind: kind.to_owned(),
                events: arc.events().to_vec(),
                register_transfer: arc.kind == ArcKind::Transfer,
            }
        })
        .collect();

    Annotation { part, line_type: line_type_name(interpretation.line_type).to_owned(), events, arcs }
}

/// The JSON-serializable report: key, per-part summaries, annotations for every selected
/// interpretation, and every voice-leading finding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub key: String,
    pub parts: Vec<PartSummary>,
    pub annotations: Vec<Annotation>,
    pub findings: Vec<Finding>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartSummary {
    pub index: usize,
    pub species: String,
    pub generable: Vec<String>,
    pub failures: Vec<String>,
}

fn species_name(species: Species) -> &'static str {
    match species {
        Species::First => "first",
        Species::Second => "second",
        Species::Third => "third",
        Species::Fourth => "fourth",
        Species::Fifth => "fifth",
    }
}

/// Accumulates [`PartOutcome`]s and [`Finding`]s as analysis runs, then renders the whole thing
/// to text or JSON once, at the end. An owned value with no global state: dropping it releases
/// nothing special, because it holds nothing special.
pub struct Reporter {
    key: Key,
    outcomes: Vec<PartOutcome>,
    findings: Vec<Finding>,
}

impl Reporter {
    pub fn new(key: Key) -> Self {
        Self { key, outcomes: Vec::new(), findings: Vec::new() }
    }

    pub fn record_part(&mut self, outcome: PartOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn record_findings(&mut self, findings: Vec<Finding>) {
        self.findings = findings;
    }

    /// Renders the `PARSE REPORT` text block: key, per-part generable line-types, and the
    /// offending event (by measure and pitch) for every parse failure.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("PARSE REPORT\n");
        out.push_str(&format!("key: {}\n", key_name(self.key)));

        for outcome in &self.outcomes {
            out.push_str(&format!(
                "part {} ({} species):\n",
                outcome.index,
                species_name(outcome.species)
            ));

            let generable = outcome.generable_line_types();
            if generable.is_empty() {
                out.push_str("  no line-type is generable\n");
            } else {
                let names: Vec<&str> = generable.iter().map(|lt| line_type_name(*lt)).collect();
                out.push_str(&format!("  generable as: {}\n", names.join(", ")));
            }

            for failure in &outcome.failures {
                out.push_str(&format!(
                    "  {} line rejected: {}\n",
                    line_type_name(failure.line_type),
                    failure.error
                ));
            }
        }

        if self.findings.is_empty() {
            out.push_str("no voice-leading violations found\n");
        } else {
            out.push_str(&format!("{} voice-leading violation(s):\n", self.findings.len()));
            for finding in &self.findings {
                out.push_str(&format!("  {}\n", finding.message));
            }
        }

        out
    }

    /// Renders the full JSON report, including annotations for every accepted interpretation.
    pub fn render_json(&self) -> Report {
        let parts = self
            .outcomes
            .iter()
            .map(|outcome| PartSummary {
                index: outcome.index,
                species: species_name(outcome.species).to_owned(),
                generable: outcome.generable_line_types().iter().map(|lt| line_type_name(*lt).to_owned()).collect(),
                failures: outcome.failures.iter().map(|f| f.error.to_string()).collect(),
            })
            .collect();

        let annotations = self
            .outcomes
            .iter()
            .flat_map(|outcome| {
                let event_count = outcome
                    .accepted
                    .iter()
                    .flat_map(|i| i.rule_labels.keys().copied())
                    .max()
                    .map_or(0, |m| m + 1);
                outcome
                    .accepted
                    .iter()
                    .map(move |interpretation| annotate(outcome.index, interpretation, event_count))
            })
            .collect();

        Report {
            key: key_name(self.key),
            parts,
            annotations,
            findings: self.findings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Pitch;

    #[test]
    fn renders_key_and_no_findings() {
        let reporter = Reporter::new(Key::major(Pitch::C));
        let text = reporter.render_text();
        assert!(text.starts_with("PARSE REPORT\n"));
        assert!(text.contains("C major"));
        assert!(text.contains("no voice-leading violations found"));
    }
}
