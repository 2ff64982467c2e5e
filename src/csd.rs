//! Concrete scale degrees: mapping a [`Note`] onto a tonic-relative, octave-extended
//! scale-degree value.

use crate::harmony::{DiatonicMode, Key, ScaleDegree};
use crate::note::Note;
use crate::pitch::Pitch;

/// The melodic direction in which a bidirectional (minor 6̂/7̂) degree was approached.
///
/// `Ascending`/`Descending` mark the raised or lowered form of a minor scale's sixth or
/// seventh degree; `Bidirectional` and `None` are only produced by [`Csd`] itself, never
/// passed in.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Ascending,
    Descending,
    Bidirectional,
    None,
}

/// A concrete scale degree (CSD): a signed, octave-extended degree value anchored to the tonic.
///
/// `value` is zero at the tonic, positive ascending, negative descending; `value.rem_euclid(7)`
/// gives the residue scale degree (0 = tonic ... 6 = leading tone).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Csd {
    pub value: i32,
    pub direction: Direction,
}

/// Error returned when a pitch cannot be mapped onto a key's scale.
#[derive(Copy, Clone, Debug, thiserror::Error, Eq, PartialEq)]
pub enum CsdError {
    #[error("the pitch {pitch} is not in the {mode:?} scale of {tonic:?}")]
    NotInScale {
        pitch: Note,
        tonic: Pitch,
        mode: DiatonicMode,
    },
}

impl Csd {
    /// Returns the residue scale degree (0 = tonic, 6 = leading tone), ignoring octave.
    pub fn degree(self) -> ScaleDegree {
        ScaleDegree::from_num((self.value.rem_euclid(7) + 1) as u8)
            .expect("rem_euclid(7) + 1 is always in [1, 7]")
    }

    /// Maps `note` onto `key`'s scale, anchored so that `tonic_ref` (an instance of the key's
    /// tonic pitch at a concrete octave) has `value == 0`.
    ///
    /// For minor keys, the sixth and seventh degrees accept either the natural-minor (lowered)
    /// or melodic-minor-ascending (raised) spelling; `direction` records which form matched.
    /// All other degrees always resolve with `direction = None`.
    pub fn from_note(note: Note, key: Key, tonic_ref: Note) -> Result<Self, CsdError> {
        debug_assert_eq!(
            tonic_ref.pitch, key.tonic,
            "tonic_ref should carry the key's tonic pitch"
        );

        let letter_step = |n: Note| n.octave as i32 * 7 + n.pitch.letter().step() as i32;

        let value = letter_step(note) - letter_step(tonic_ref);
        let residue = value.rem_euclid(7) as u8;

        let degree = ScaleDegree::from_num(residue + 1)
            .expect("residue + 1 is always in [1, 7]");

        let is_bidirectional = key.mode == DiatonicMode::NATURAL_MINOR
            && matches!(degree, ScaleDegree::VI | ScaleDegree::VII);

        if !is_bidirectional {
            let expected = key.relative_pitch(degree);

            return if note.pitch.as_pitch_class() == expected.as_pitch_class() {
                Ok(Self { value, direction: Direction::None })
            } else {
                Err(CsdError::NotInScale { pitch: note, tonic: key.tonic, mode: key.mode })
            };
        }

        let lowered = key.relative_pitch(degree);
        let raised_interval = match degree {
            ScaleDegree::VI => crate::interval::Interval::MAJOR_SIXTH,
            ScaleDegree::VII => crate::interval::Interval::MAJOR_SEVENTH,
            _ => unreachable!("is_bidirectional only true for VI/VII"),
        };
        let raised = key.tonic.transpose(raised_interval);

        let pc = note.pitch.as_pitch_class();

        if pc == lowered.as_pitch_class() {
            Ok(Self { value, direction: Direction::Descending })
        } else if pc == raised.as_pitch_class() {
            Ok(Self { value, direction: Direction::Ascending })
        } else {
            Err(CsdError::NotInScale { pitch: note, tonic: key.tonic, mode: key.mode })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Pitch;

    fn c_major() -> (Key, Note) {
        (Key::major(Pitch::C), Note::new(Pitch::C, 4))
    }

    #[test]
    fn tonic_is_zero() {
        let (key, tonic) = c_major();
        let csd = Csd::from_note(tonic, key, tonic).unwrap();
        assert_eq!(csd.value, 0);
    }

    #[test]
    fn fifth_above_and_below() {
        let (key, tonic) = c_major();

        let fifth_above = Note::new(Pitch::G, 4);
        assert_eq!(Csd::from_note(fifth_above, key, tonic).unwrap().value, 4);

        let fifth_below = Note::new(Pitch::G, 3);
        assert_eq!(Csd::from_note(fifth_below, key, tonic).unwrap().value, -3);
    }

    #[test]
    fn leading_tone_below_is_negative_one() {
        let (key, tonic) = c_major();
        let leading_tone = Note::new(Pitch::B, 3);
        assert_eq!(Csd::from_note(leading_tone, key, tonic).unwrap().value, -1);
    }

    #[test]
    fn upper_octave_is_seven() {
        let (key, tonic) = c_major();
        let octave_up = Note::new(Pitch::C, 5);
        assert_eq!(Csd::from_note(octave_up, key, tonic).unwrap().value, 7);
    }

    #[test]
    fn non_diatonic_pitch_fails() {
        let (key, tonic) = c_major();
        let f_sharp = Note::new(Pitch::F_SHARP, 4);
        assert!(Csd::from_note(f_sharp, key, tonic).is_err());
    }

    #[test]
    fn minor_sixth_seventh_bidirectional() {
        let key = Key::minor(Pitch::A);
        let tonic = Note::new(Pitch::A, 4);

        let lowered_sixth = Note::new(Pitch::F, 4);
        let csd = Csd::from_note(lowered_sixth, key, tonic).unwrap();
        assert_eq!(csd.direction, Direction::Descending);

        let raised_sixth = Note::new(Pitch::F_SHARP, 4);
        let csd = Csd::from_note(raised_sixth, key, tonic).unwrap();
        assert_eq!(csd.direction, Direction::Ascending);

        let lowered_seventh = Note::new(Pitch::G, 4);
        let csd = Csd::from_note(lowered_seventh, key, tonic).unwrap();
        assert_eq!(csd.direction, Direction::Descending);

        let raised_seventh = Note::new(Pitch::G_SHARP, 4);
        let csd = Csd::from_note(raised_seventh, key, tonic).unwrap();
        assert_eq!(csd.direction, Direction::Ascending);
    }
}
