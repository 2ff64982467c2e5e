//! Voice-leading analysis over an arbitrary number of parts, generalized from fixed SATB voicing
//! to onset-aligned pairs of parts.

pub mod check;
pub mod motion;
pub mod rules;

pub use check::{check, Finding, ViolationKind};
pub use motion::{classify, is_perfect_consonance, VoiceMotion};
