//! Arcs: prolongational spans over event indices.

/// The surface shape and generative rule of an [`Arc`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcKind {
    Repetition,
    Neighbor,
    Passing,
    Arpeggiation,
    Anticipation,
    Insertion,
    Transfer,
    Basic,
}

/// A prolongational span: an ordered, non-empty list of event indices, `n >= 2`.
///
/// Stores indices, never pitches — the same pitch can recur at different positions, and only
/// indices distinguish them (essential for register-transfer detection).
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    pub kind: ArcKind,
    events: Vec<usize>,
}

impl Arc {
    /// Builds an arc from `events`, which must be strictly increasing and at least two long.
    pub fn new(kind: ArcKind, events: Vec<usize>) -> Self {
        assert!(events.len() >= 2, "an arc must span at least two events");
        assert!(
            events.windows(2).all(|w| w[0] < w[1]),
            "arc event indices must be strictly increasing"
        );
        Self { kind, events }
    }

    pub fn events(&self) -> &[usize] {
        &self.events
    }

    pub fn left(&self) -> usize {
        self.events[0]
    }

    pub fn right(&self) -> usize {
        *self.events.last().expect("non-empty by construction")
    }

    pub fn interior(&self) -> &[usize] {
        &self.events[1..self.events.len() - 1]
    }
}
