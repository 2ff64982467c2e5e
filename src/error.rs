//! Top-level error kinds: fatal before analysis ever runs.
//!
//! Parse errors (one part failing to admit an interpretation) and voice-leading findings are
//! not part of this hierarchy — they are per-part diagnostics and aggregated findings,
//! respectively, and analysis continues around them. See [`crate::line::ParseError`] and
//! [`crate::voice_leading::Finding`].

use thiserror::Error;

use crate::key_finder::KeyError;

/// Malformed or insufficient input, caught before key inference or parsing begin.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("the score has no parts")]
    NoParts,

    #[error("part {0} has no events")]
    EmptyPart(usize),

    #[error("malformed pitch spelling {0:?}")]
    MalformedPitch(String),
}

/// Any fatal error that aborts analysis before a report can be produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Key(#[from] KeyError),
}
