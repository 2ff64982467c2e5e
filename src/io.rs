//! External score format: the JSON contract accepted from score-import tooling upstream of
//! this crate.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::note::Note;
use crate::pitch::Pitch;

/// A full score: an ordered list of parts, top voice first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawScore {
    pub parts: Vec<RawPart>,
}

/// One voice's worth of events, in onset order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPart {
    pub events: Vec<RawEvent>,
}

/// A single pitched event as handed off by score-import tooling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawEvent {
    /// Letter, optional accidental, octave: e.g. `"F#4"`, `"Bb3"`, `"C-1"`.
    pub pitch: String,
    pub onset: Ratio<i64>,
    pub duration: Ratio<i64>,
    pub measure: u32,
    pub tied_to_next: bool,
}

impl RawEvent {
    /// Parses [`Self::pitch`] into a [`Note`].
    pub fn note(&self) -> Result<Note, InputError> {
        parse_note(&self.pitch)
    }
}

impl RawPart {
    /// Parses every event's pitch spelling, failing on the first malformed one.
    pub fn notes(&self) -> Result<Vec<Note>, InputError> {
        self.events.iter().map(RawEvent::note).collect()
    }
}

/// Splits a trailing signed integer octave off a pitch-spelling string and parses the rest
/// with [`Pitch`]'s own `FromStr`.
fn parse_note(spelling: &str) -> Result<Note, InputError> {
    let malformed = || InputError::MalformedPitch(spelling.to_string());

    let split = spelling
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '-')
        .map(|(i, _)| i + 1)
        .ok_or_else(malformed)?;

    let (letter_part, octave_part) = spelling.split_at(split);
    if letter_part.is_empty() || octave_part.is_empty() {
        return Err(malformed());
    }

    let pitch: Pitch = letter_part.parse().map_err(|_| malformed())?;
    let octave: i16 = octave_part.parse().map_err(|_| malformed())?;

    Ok(Note::new(pitch, octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sharp_and_flat_spellings() {
        assert_eq!(parse_note("F#4").unwrap(), Note::new(Pitch::F_SHARP, 4));
        assert_eq!(parse_note("Bb3").unwrap(), Note::new(Pitch::B_FLAT, 3));
        assert_eq!(parse_note("C-1").unwrap(), Note::new(Pitch::C, -1));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_note("").is_err());
        assert!(parse_note("H4").is_err());
        assert!(parse_note("C").is_err());
    }
}
