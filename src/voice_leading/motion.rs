//! Pairwise motion classification between two aligned voices.

use crate::note::Note;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VoiceMotion {
    /// One voice holds while the other moves.
    Oblique,
    /// The voices move in opposite directions.
    Contrary,
    /// The voices move in the same direction by different intervals.
    Similar,
    /// The voices move in the same direction by the same interval.
    Parallel,
}

fn direction(a: Note, b: Note) -> i32 {
    use std::cmp::Ordering::*;
    match a.cmp(&b) {
        Less => 1,
        Greater => -1,
        Equal => 0,
    }
}

/// Classifies the motion of one voice (`first` -> `second`) against another voice
/// (`other_first` -> `other_second`) sounding at the same two onsets.
pub fn classify(first: Note, second: Note, other_first: Note, other_second: Note) -> VoiceMotion {
    let d1 = direction(first, second);
    let d2 = direction(other_first, other_second);

    if d1 == 0 || d2 == 0 {
        return VoiceMotion::Oblique;
    }
    if d1 != d2 {
        return VoiceMotion::Contrary;
    }

    let interval_before = first.distance_to(other_first);
    let interval_after = second.distance_to(other_second);
    if interval_before == interval_after {
        VoiceMotion::Parallel
    } else {
        VoiceMotion::Similar
    }
}

/// Whether the interval between two notes reduces (mod octave) to a perfect unison, fifth, or
/// octave.
pub fn is_perfect_consonance(a: Note, b: Note) -> bool {
    let simple = a.distance_to(b).as_simple().shorthand();
    matches!(simple.as_str(), "P1" | "P5" | "P8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Pitch;

    #[test]
    fn parallel_fifths_detected() {
        let m = classify(
            Note::new(Pitch::C, 4),
            Note::new(Pitch::D, 4),
            Note::new(Pitch::G, 3),
            Note::new(Pitch::A, 3),
        );
        assert_eq!(m, VoiceMotion::Parallel);
    }

    #[test]
    fn oblique_when_one_voice_holds() {
        let m = classify(
            Note::new(Pitch::C, 4),
            Note::new(Pitch::C, 4),
            Note::new(Pitch::G, 3),
            Note::new(Pitch::A, 3),
        );
        assert_eq!(m, VoiceMotion::Oblique);
    }
}
