//! The three axes of the cube (U/D, L/R, F/B). Turns around the same axis commute, which is all
//! the move algebra needs to know about geometry.

use super::topology::FaceId;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Axis {
    /// Front-Back axis
    FB,
    /// Left-Right axis
    LR,
    /// Up-Down axis
    UD,
}

impl Axis {
    /// The face whose clockwise direction defines the positive direction of a whole-cube rotation
    /// around this axis: `x` follows R, `y` follows U, `z` follows F.
    pub fn leading_face(self) -> FaceId {
        match self {
            Axis::FB => FaceId::Front,
            Axis::LR => FaceId::Right,
            Axis::UD => FaceId::Up,
        }
    }

    /// Rotation letter in standard notation.
    pub fn rotation_letter(self) -> char {
        match self {
            Axis::LR => 'x',
            Axis::UD => 'y',
            Axis::FB => 'z',
        }
    }

    /// The axis rotated by a given letter, accepting upper-case aliases.
    pub fn from_rotation_letter(c: char) -> Option<Axis> {
        match c {
            'x' | 'X' => Some(Axis::LR),
            'y' | 'Y' => Some(Axis::UD),
            'z' | 'Z' => Some(Axis::FB),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_face_is_on_axis() {
        for axis in [Axis::FB, Axis::LR, Axis::UD] {
            assert_eq!(axis.leading_face().axis(), axis);
            assert_eq!(Axis::from_rotation_letter(axis.rotation_letter()), Some(axis));
        }
        assert_eq!(Axis::from_rotation_letter('Y'), Some(Axis::UD));
        assert_eq!(Axis::from_rotation_letter('w'), None);
    }
}
