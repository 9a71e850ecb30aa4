//! Chord construction: map the selected key and a chord button to the MIDI
//! notes of a triad plus octave.

use crate::menu::PlaybackKey;

/// Scale degree behind each of the four chord buttons. The buttons form the
/// I-V-vi-IV progression, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    Tonic,
    Dominant,
    Submediant,
    Subdominant,
}

impl Degree {
    pub const COUNT: usize = 4;

    pub fn from_index(index: usize) -> Degree {
        match index {
            0 => Degree::Tonic,
            1 => Degree::Dominant,
            2 => Degree::Submediant,
            _ => Degree::Subdominant,
        }
    }
}

/// Root notes per key (rows, C through B) and degree (columns, I V vi IV),
/// folded into the octave range around C3 so every chord stays in register.
const ROOT_NOTES: [[u8; 4]; 12] = [
    [48, 43, 45, 41],
    [49, 44, 46, 42],
    [50, 45, 47, 43],
    [51, 46, 48, 44],
    [40, 47, 49, 45],
    [41, 48, 50, 46],
    [42, 49, 51, 47],
    [43, 50, 40, 48],
    [44, 51, 41, 49],
    [45, 40, 42, 50],
    [46, 41, 43, 51],
    [47, 42, 44, 40],
];

/// Semitones from root to the third: major for I, V and IV, minor for vi.
const THIRD_OFFSET: [u8; 4] = [4, 4, 3, 4];

/// Semitones from root to the perfect fifth.
const FIFTH_OFFSET: u8 = 7;

/// Semitones from root to the octave.
const OCTAVE_OFFSET: u8 = 12;

/// Triad plus octave as MIDI note numbers. Built fresh on every chord button
/// press and forgotten once its note-offs have gone out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chord {
    pub root: u8,
    pub third: u8,
    pub fifth: u8,
    pub octave: u8,
}

impl Chord {
    /// Look up the chord for a key and degree. Pure; inputs are bounded by
    /// the menu state, so there is nothing to fail on.
    pub fn construct(key: PlaybackKey, degree: Degree) -> Chord {
        let root = ROOT_NOTES[key as usize][degree as usize];
        Chord {
            root,
            third: root + THIRD_OFFSET[degree as usize],
            fifth: root + FIFTH_OFFSET,
            octave: root + OCTAVE_OFFSET,
        }
    }

    /// All four notes, root first.
    pub fn notes(&self) -> [u8; 4] {
        [self.root, self.third, self.fifth, self.octave]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonic_in_c_should_be_c_major_triad_with_octave() {
        let chord = Chord::construct(PlaybackKey::C, Degree::Tonic);
        assert_eq!(
            Chord {
                root: 48,
                third: 52,
                fifth: 55,
                octave: 60
            },
            chord
        );
    }

    #[test]
    fn submediant_should_take_a_minor_third() {
        let chord = Chord::construct(PlaybackKey::C, Degree::Submediant);
        assert_eq!(45, chord.root);
        assert_eq!(48, chord.third);
        assert_eq!(52, chord.fifth);
        assert_eq!(57, chord.octave);
    }

    #[test]
    fn every_chord_should_keep_fixed_fifth_and_octave_offsets() {
        for key_index in 0..12 {
            let key = PlaybackKey::from_index(key_index);
            for degree_index in 0..Degree::COUNT {
                let chord = Chord::construct(key, Degree::from_index(degree_index));
                assert_eq!(chord.root + 7, chord.fifth);
                assert_eq!(chord.root + 12, chord.octave);
            }
        }
    }

    #[test]
    fn progression_in_g_should_match_the_root_table() {
        let roots: [u8; 4] = [
            Chord::construct(PlaybackKey::G, Degree::Tonic).root,
            Chord::construct(PlaybackKey::G, Degree::Dominant).root,
            Chord::construct(PlaybackKey::G, Degree::Submediant).root,
            Chord::construct(PlaybackKey::G, Degree::Subdominant).root,
        ];
        assert_eq!([43, 50, 40, 48], roots);
    }
}
