//! Line-construction and voice-leading evaluation for Westergaard-style species counterpoint.
//!
//! This crate takes a melodic line (and, for two- or three-part writing, aligned companion
//! lines) expressed as pitch/duration events, parses each line into a Westergaard-style
//! structural interpretation (a head tone, middleground elaborations, and a descent to the
//! tonic), and separately checks the harmonic surface for voice-leading violations. The two
//! analyses are independent: a line can fail to parse as a coherent structural descent while
//! its note-to-note voice leading is still flawless, and vice versa.

mod note;
pub mod enharmonic;
pub mod interval;
mod semitone;
pub mod pitch;
pub mod harmony;
pub mod voice_leading;

pub mod csd;
pub mod key_finder;
pub mod context;
pub mod line;
pub mod selection;
pub mod report;
pub mod io;
pub mod error;

pub mod prelude;

pub use crate::interval::Interval;
pub use crate::pitch::{Pitch, PitchClass, AccidentalSign, Letter};
pub use crate::note::Note;
pub use crate::enharmonic::{EnharmonicEq, EnharmonicOrd};
pub use crate::semitone::Semitones;
pub use crate::error::AnalysisError;
