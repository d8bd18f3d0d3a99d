//! Holding the cube the standard way, so that states can be compared up to whole-cube rotation.

use super::facelet::Color;
use super::topology::{quarter_turns_to_right, FaceId, Relabel};
use super::Cube;
use crate::error::Error;

impl Cube {
    /// Hold the cube in the standard way: the green center in front and the red center on the
    /// right. Two cubes that only differ by how they are held normalize to the same stickers.
    ///
    /// Fails with `CorruptedState` if the centers are not a rotation of the solved arrangement.
    pub fn normalize(&mut self) -> Result<(), Error> {
        let front = self.slot_of_color(Color::home(FaceId::Front))?;
        self.map_front_from(front)?;

        let right = self.slot_of_color(Color::home(FaceId::Right))?;
        let turns = quarter_turns_to_right(right).ok_or_else(|| {
            Error::CorruptedState(format!(
                "the right center sits in the {right} slot while the front center is in front"
            ))
        })?;
        for _ in 0..turns {
            self.relabel(Relabel::FRONT_CLOCKWISE)?;
        }
        Ok(())
    }

    /// A normalized copy of this cube.
    pub fn normalized(&self) -> Result<Cube, Error> {
        let mut cube = self.clone();
        cube.normalize()?;
        Ok(cube)
    }

    /// Whether the two cubes show the same state up to how the whole cube is held.
    pub fn similar(&self, other: &Cube) -> Result<bool, Error> {
        Ok(self.normalized()? == other.normalized()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::axis::Axis;
    use crate::cube333::moves::Move333;

    fn apply(cube: &Cube, moves: &str) -> Cube {
        cube.apply_sequence(&moves.parse().unwrap()).unwrap()
    }

    #[test]
    fn solved_is_normal() {
        let cube = Cube::solved();
        assert_eq!(cube.normalized().unwrap(), cube);
        assert!(cube.similar(&cube).unwrap());
    }

    #[test]
    fn every_orientation_normalizes_to_solved() {
        let rotations = ["", "x", "x2", "x'", "z", "z'"];
        for first in rotations {
            for y in ["", "y", "y2", "y'"] {
                let cube = apply(&Cube::solved(), &format!("{first} {y}"));
                assert_eq!(cube.normalized().unwrap(), Cube::solved(), "{first} {y}");
            }
        }
    }

    #[test]
    fn rotated_scramble_is_similar_not_equal() {
        let scramble = apply(&Cube::solved(), "R U F' D2 l");
        for axis in [Axis::FB, Axis::LR, Axis::UD] {
            let mut rotated = scramble.clone();
            rotated.rotate(1, axis).unwrap();
            assert_ne!(rotated, scramble);
            assert!(rotated.similar(&scramble).unwrap());
        }
        assert!(!scramble.similar(&Cube::solved()).unwrap());
    }

    #[test]
    fn quarter_turn_matches_rotated_equivalent() {
        // R on a cube held normally is F on the same cube turned with y
        let r = Move333::apply(&Cube::solved(), "R").unwrap();
        let yf = apply(&Cube::solved(), "y F");
        assert_ne!(r, yf);
        assert!(r.similar(&yf).unwrap());
    }

    #[test]
    fn broken_centers_are_reported() {
        let mut cube = Cube::solved();
        // swap the right and back faces wholesale, leaving a mirror image
        let r = cube.face(FaceId::Right).center().unwrap().1;
        let b = cube.face(FaceId::Back).center().unwrap().1;
        cube.set_sticker(FaceId::Right, crate::cube333::Position::center(FaceId::Right), b)
            .unwrap();
        cube.set_sticker(FaceId::Back, crate::cube333::Position::center(FaceId::Back), r)
            .unwrap();
        assert!(matches!(cube.normalize(), Err(Error::CorruptedState(_))));
    }
}
