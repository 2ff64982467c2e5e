//! Convenience re-export of common items.
//!
//! The contents of this prelude must be imported manually:
//!
//! ```
//! use westergaard_lines::prelude::*;
//! # let _ = Pitch::C;
//! ```

pub use crate::interval::*;
pub use crate::pitch::*;
pub use crate::note::*;
pub use crate::harmony::{Key, DiatonicMode, ScaleDegree};
pub use crate::enharmonic::{EnharmonicEq, EnharmonicOrd};
pub use crate::csd::{Csd, Direction};
pub use crate::context::{GlobalContext, Species};
pub use crate::line::interpretation::{Interpretation, LineType};
pub use crate::error::AnalysisError;
pub use crate::report::{Reporter, Report, PartOutcome, ParseFailure};
pub use crate::voice_leading::{self, Finding};
