//! The closed alphabet of rule labels identifying which Westergaard rule generated an event.

/// A tagged rule label. Carries no payload beyond its own variant — arcs (with their event
/// indices) are stored separately on [`crate::line::Interpretation`] and cross-referenced by
/// position, per the "dynamic dispatch on rule-kind" design note.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleLabel {
    /// The head of a primary or bass line.
    S1,
    /// The final tonic arrival.
    S2,
    /// The structural dominant.
    S3,
    Passing,
    Neighbor,
    Repetition,
    Arpeggiation,
    Anticipation,
    Insertion,
    Transfer,
    /// Either endpoint of a generic line, which has no structural dominant.
    Basic,
}

impl RuleLabel {
    pub fn describe(self) -> &'static str {
        match self {
            Self::S1 => "head of the fundamental line",
            Self::S2 => "final tonic arrival",
            Self::S3 => "structural dominant",
            Self::Passing => "passing tone",
            Self::Neighbor => "neighbor tone",
            Self::Repetition => "repeated tone",
            Self::Arpeggiation => "arpeggiation",
            Self::Anticipation => "anticipation",
            Self::Insertion => "inserted tone",
            Self::Transfer => "register transfer",
            Self::Basic => "generic-line endpoint",
        }
    }
}
