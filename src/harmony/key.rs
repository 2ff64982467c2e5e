use crate::interval::Interval;
use crate::pitch::{Pitch, Letter, AccidentalSign, Spelling};
use crate::harmony::mode::DiatonicMode;
use crate::harmony::ScaleDegree;

/// The ascending interval from the tonic to each scale degree, one row per [`DiatonicMode`]
/// in declaration order (Ionian first, Locrian last).
///
/// This stands in for the upstream crate's `experimental-scales` feature, which built scale
/// degrees through a general scale-construction engine this spec has no use for; the seven
/// diatonic modes are tabulated directly instead.
const MODE_STEPS: [[Interval; 7]; 7] = [
    // Ionian (major)
    [Interval::PERFECT_UNISON, Interval::MAJOR_SECOND, Interval::MAJOR_THIRD, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH, Interval::MAJOR_SEVENTH],
    // Dorian
    [Interval::PERFECT_UNISON, Interval::MAJOR_SECOND, Interval::MINOR_THIRD, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH, Interval::MINOR_SEVENTH],
    // Phrygian
    [Interval::PERFECT_UNISON, Interval::MINOR_SECOND, Interval::MINOR_THIRD, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH, Interval::MINOR_SIXTH, Interval::MINOR_SEVENTH],
    // Lydian
    [Interval::PERFECT_UNISON, Interval::MAJOR_SECOND, Interval::MAJOR_THIRD, Interval::AUGMENTED_FOURTH, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH, Interval::MAJOR_SEVENTH],
    // Mixolydian
    [Interval::PERFECT_UNISON, Interval::MAJOR_SECOND, Interval::MAJOR_THIRD, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH, Interval::MINOR_SEVENTH],
    // Aeolian (natural minor)
    [Interval::PERFECT_UNISON, Interval::MAJOR_SECOND, Interval::MINOR_THIRD, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH, Interval::MINOR_SIXTH, Interval::MINOR_SEVENTH],
    // Locrian
    [Interval::PERFECT_UNISON, Interval::MINOR_SECOND, Interval::MINOR_THIRD, Interval::PERFECT_FOURTH, Interval::DIMINISHED_FIFTH, Interval::MINOR_SIXTH, Interval::MINOR_SEVENTH],
];

/// A musical key with a tonic pitch and mode.
///
/// A `Key` is built on a [tonic](Self::tonic), and can have any of the seven [diatonic modes](DiatonicMode).
///
/// For convenience, `Key` provides constructors for major and minor keys using
/// [`Key::major`] and [`Key::minor`].
///
/// # Examples
///
/// You can create a key from a tonic and mode:
/// ```
/// # use westergaard_lines::prelude::*;
/// let d_minor = Key::new(Pitch::D, DiatonicMode::NATURAL_MINOR);
/// ```
///
/// Or use the convenience constructors:
/// ```
/// # use westergaard_lines::prelude::*;
/// let g_major = Key::major(Pitch::G);
/// let e_minor = Key::minor(Pitch::E);
/// ```
///
/// You can create keys from their key signature:
/// ```
/// # use westergaard_lines::prelude::*;
/// // D major has 2 sharps
/// let d_major = Key::from_sharps(2, DiatonicMode::MAJOR);
/// assert_eq!(d_major.tonic, Pitch::D);
/// ```
///
/// # Relative and Parallel Keys
///
/// Relative keys share the same key signature:
/// ```
/// # use westergaard_lines::prelude::*;
/// let c_major = Key::major(Pitch::C);
/// let a_minor = c_major.relative(DiatonicMode::NATURAL_MINOR);
///
/// assert_eq!(a_minor, Key::minor(Pitch::A));
/// assert_eq!(c_major.sharps(), a_minor.sharps());
/// ```
///
/// Parallel keys share the same tonic:
/// ```
/// # use westergaard_lines::prelude::*;
/// let c_major = Key::major(Pitch::C);
/// let c_minor = c_major.parallel(DiatonicMode::NATURAL_MINOR);
///
/// assert_eq!(c_minor, Key::minor(Pitch::C));
/// assert_eq!(c_major.tonic, c_minor.tonic);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    /// The tonic (root) pitch of the key.
    pub tonic: Pitch,
    /// The mode of the key (major, minor, dorian, etc.).
    pub mode: DiatonicMode,
}

impl Key {
    /// Creates a new key from a tonic pitch and mode.
    pub fn new(tonic: Pitch, mode: DiatonicMode) -> Self {
        Self { tonic, mode }
    }

    /// Creates a major key with the given tonic.
    pub fn major(tonic: Pitch) -> Self {
        Self::new(tonic, DiatonicMode::MAJOR)
    }

    /// Creates a natural minor key with the given tonic.
    pub fn minor(tonic: Pitch) -> Self {
        Self::new(tonic, DiatonicMode::NATURAL_MINOR)
    }

    /// Returns a new key with the same mode but a different tonic.
    pub fn with_tonic(self, tonic: Pitch) -> Self {
        Self { tonic, .. self }
    }

    /// Creates a key from a key signature (number of sharps or flats) and mode.
    ///
    /// Positive values represent sharps, and negative values represent flats.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// assert_eq!(
    ///     Key::from_sharps(2, DiatonicMode::MAJOR),
    ///     Key::major(Pitch::D)
    /// );
    /// ```
    pub fn from_sharps(sharps: i16, mode: DiatonicMode) -> Self {
        let offset = Letter::from_step(mode as u8 - 1)
            .expect("mode is in [1, 7], so subtracting 1 should be in range")
            .fifths_from_c();

        Self::new(Pitch::from_fifths_from_c(sharps + offset), mode)
    }

    /// Returns the key signature as the number of sharps (positive) or flats (negative).
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// assert_eq!(Key::major(Pitch::G).sharps(), 1);
    /// assert_eq!(Key::major(Pitch::F).sharps(), -1);
    /// assert_eq!(Key::major(Pitch::C).sharps(), 0);
    /// ```
    pub fn sharps(self) -> i16 {
        let offset = Letter::from_step(self.mode as u8 - 1)
            .expect("mode is in [1, 7], so subtracting 1 should be in range")
            .fifths_from_c();

        self.tonic.as_fifths_from_c() - offset
    }

    /// Returns the spelling preference (sharps or flats) for this key.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// assert_eq!(Key::major(Pitch::G).spelling(), Some(Spelling::Sharps));
    /// assert_eq!(Key::major(Pitch::F).spelling(), Some(Spelling::Flats));
    /// assert_eq!(Key::minor(Pitch::A).spelling(), None);
    /// ```
    pub fn spelling(self) -> Option<Spelling> {
        match self.sharps() {
            ..0 => Some(Spelling::Flats),
            0 => None,
            1.. => Some(Spelling::Sharps),
        }
    }

    /// Returns the parallel key in the specified mode.
    ///
    /// Parallel keys share the same tonic but have different modes.
    pub fn parallel(self, mode: DiatonicMode) -> Self {
        Self { mode, .. self }
    }

    /// Returns the relative key in the specified mode.
    ///
    /// Relative keys share the same key signature (same number of sharps or flats) but have
    /// different tonics.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// assert_eq!(
    ///     Key::major(Pitch::C).relative(DiatonicMode::NATURAL_MINOR),
    ///     Key::minor(Pitch::A),
    /// );
    /// ```
    pub fn relative(self, mode: DiatonicMode) -> Self {
        let source_ref = Letter::from_step(self.mode as u8 - 1).expect("mode enum should be same size as letter enum");
        let target_ref = Letter::from_step(mode as u8 - 1).expect("mode enum should be same size as letter enum");

        let diff_fifths = Pitch::from(target_ref).as_fifths_from_c() - Pitch::from(source_ref).as_fifths_from_c();

        let new_tonic = self.tonic.transpose_fifths(diff_fifths);

        self.with_tonic(new_tonic).parallel(mode)
    }

    /// Transposes the key by the given interval. The mode is preserved.
    pub fn transpose(&self, interval: Interval) -> Self {
        self.with_tonic(self.tonic.transpose(interval))
    }

    /// Returns the diatonic pitch at the given scale degree in this key.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// let g_major = Key::major(Pitch::G);
    /// assert_eq!(g_major.relative_pitch(ScaleDegree::I), Pitch::G);
    /// assert_eq!(g_major.relative_pitch(ScaleDegree::III), Pitch::B);
    /// assert_eq!(g_major.relative_pitch(ScaleDegree::VII), Pitch::F_SHARP);
    /// ```
    pub fn relative_pitch(self, degree: ScaleDegree) -> Pitch {
        let step = MODE_STEPS[self.mode as usize - 1][degree as usize - 1];

        self.tonic.transpose(step)
    }

    /// Returns the seven diatonic pitches of this key, tonic through the seventh degree.
    pub fn diatonic_pitches(self) -> [Pitch; 7] {
        std::array::from_fn(|i| {
            let degree = ScaleDegree::from_num(i as u8 + 1).expect("in [1, 7]");

            self.relative_pitch(degree)
        })
    }

    /// Returns the scale degree of `pitch` in this key, if `pitch` is diatonic.
    ///
    /// Only the pitch class is compared; callers dealing in octave-extended pitches should
    /// strip octave information first.
    pub fn degree_of(self, pitch: Pitch) -> Option<ScaleDegree> {
        self.diatonic_pitches()
            .into_iter()
            .position(|p| p.as_pitch_class() == pitch.as_pitch_class())
            .and_then(|i| ScaleDegree::from_num(i as u8 + 1))
    }

    /// Returns the accidental for a given letter in this key's signature.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// let g_major = Key::major(Pitch::G);
    /// assert_eq!(g_major.accidental_of(Letter::F), AccidentalSign::SHARP);
    /// assert_eq!(g_major.accidental_of(Letter::C), AccidentalSign::NATURAL);
    /// ```
    pub fn accidental_of(&self, letter: Letter) -> AccidentalSign {
        let degree = ScaleDegree::from_num(self.tonic.letter().offset_between(letter) + 1)
            .expect("offset should be in range");

        let pitch = self.relative_pitch(degree);

        assert_eq!(
            pitch.letter(), letter,
            "should have gotten the correct letter"
        );

        pitch.accidental()
    }

    /// Returns the pitches that are altered (sharped or flattened) in the key signature.
    ///
    /// The returned vector is sorted by the order sharps/flats appear in key signatures.
    ///
    /// # Examples
    /// ```
    /// # use westergaard_lines::prelude::*;
    /// assert_eq!(Key::major(Pitch::G).alterations(), [Pitch::F_SHARP]);
    /// assert_eq!(Key::major(Pitch::C).alterations(), []);
    /// ```
    pub fn alterations(&self) -> Vec<Pitch> {
        let mut accidentals = self.diatonic_pitches()
            .into_iter()
            .filter(|a| a.accidental() != AccidentalSign::NATURAL)
            .collect::<Vec<_>>();

        accidentals.sort_unstable_by_key(|p| p.as_fifths_from_c());

        assert_eq!(
            accidentals.iter().map(|p| p.accidental().offset).sum::<i16>(), self.sharps(),
            "total accidentals should equal sharps of key"
        );

        accidentals
    }
}

#[cfg(test)]
mod tests {
    use crate::harmony::{DiatonicMode, Key};
    use crate::pitch::Pitch;

    #[test]
    fn relative_parallel() {
        let modes = (1..8).map(|n|DiatonicMode::from_repr(n).expect("in range"));

        for sharps in -10..=10 {
            for mode in modes.clone() {
                let key = Key::from_sharps(sharps, mode);

                for mode in modes.clone() {
                    let relative = key.relative(mode);

                    assert_eq!(
                        relative.mode, mode,
                        "mode should match requested relative",
                    );

                    assert_eq!(
                        relative.sharps(), key.sharps(),
                        "relative mode should have same amount of sharps/flats",
                    );

                    let parallel = key.parallel(mode);

                    assert_eq!(
                        parallel.mode, mode,
                        "mode should match requested parallel",
                    );

                    assert_eq!(
                        parallel.tonic, key.tonic,
                        "parallel key should have same tonic",
                    );
                }
            }
        }
    }

    #[test]
    fn diatonic_pitches_major() {
        let c_major = Key::major(Pitch::C);

        assert_eq!(
            c_major.diatonic_pitches(),
            [Pitch::C, Pitch::D, Pitch::E, Pitch::F, Pitch::G, Pitch::A, Pitch::B],
        );
    }

    #[test]
    fn diatonic_pitches_minor() {
        let a_minor = Key::minor(Pitch::A);

        assert_eq!(
            a_minor.diatonic_pitches(),
            [Pitch::A, Pitch::B, Pitch::C, Pitch::D, Pitch::E, Pitch::F, Pitch::G],
        );
    }

    #[test]
    fn degree_of_roundtrips() {
        let g_major = Key::major(Pitch::G);

        for pitch in g_major.diatonic_pitches() {
            assert!(g_major.degree_of(pitch).is_some());
        }

        assert_eq!(g_major.degree_of(Pitch::C_SHARP), None);
    }
}
