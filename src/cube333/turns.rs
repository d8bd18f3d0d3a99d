//! Turning the cube.
//!
//! Only two turns are written out by hand, both around the front axis: the front layer and the
//! slice just behind it. Any other face is turned by relabelling the cube so that face becomes the
//! front, turning the front, and relabelling back.

use super::axis::Axis;
use super::position::Position;
use super::topology::FaceId;
use super::Cube;
use crate::error::Error;

use FaceId::{Front, Left, Right, Up};

impl Cube {
    /// Shift one ring of four stickers around the front axis. Starting on the up face at
    /// `cell(Up, offset)`, each sticker is replaced by the one a quarter turn counter-clockwise
    /// from it, and the first sticker goes into the last hole. The four cells are permuted, never
    /// duplicated or lost.
    fn cycle_ring(
        &mut self,
        offset: FaceId,
        cell: impl Fn(FaceId, FaceId) -> Position,
    ) -> Result<(), Error> {
        let mut face = Up;
        let mut at = offset;
        let saved = self.sticker(face, cell(face, at))?;
        for i in 0..4 {
            let next_face = face.rotate_front_counter_clockwise();
            let next_at = at.rotate_front_counter_clockwise();
            let value = if i == 3 {
                saved
            } else {
                self.sticker(next_face, cell(next_face, next_at))?
            };
            self.set_sticker(face, cell(face, at), value)?;
            face = next_face;
            at = next_at;
        }
        Ok(())
    }

    /// Turn the front layer a quarter turn clockwise.
    pub fn turn_front_clockwise_90(&mut self) -> Result<(), Error> {
        let front = self.face(Front).turn_clockwise_90()?;
        self.faces[Front as usize] = front;

        // The three stickers of each side face touching the front: (side, Front, Left/Front/Right)
        for offset in [Left, Front, Right] {
            self.cycle_ring(offset, |face, at| Position::new(face, Front, at))?;
        }
        Ok(())
    }

    /// Turn the slice between the front and back layers a quarter turn clockwise, as seen from the
    /// front. This carries the four side centers along.
    pub fn turn_front_middle_layer_clockwise_90(&mut self) -> Result<(), Error> {
        for offset in [Left, Up, Right] {
            self.cycle_ring(offset, |face, at| Position::new(face, face, at))?;
        }
        Ok(())
    }

    /// Run `turn` `n` times with `face` held as the front.
    fn with_front(
        &mut self,
        face: FaceId,
        n: u8,
        turn: fn(&mut Cube) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.map_front_from(face)?;
        for _ in 0..n % 4 {
            turn(self)?;
        }
        self.map_front_to(face)
    }

    /// Turn `face` clockwise by `n` quarter turns (1 = 90°, 2 = 180°, 3 = 270°).
    pub fn turn_face(&mut self, n: u8, face: FaceId) -> Result<(), Error> {
        self.with_front(face, n, Cube::turn_front_clockwise_90)
    }

    /// Turn the slice next to `face` by `n` quarter turns, clockwise as seen from `face`.
    pub fn turn_face_middle_layer(&mut self, n: u8, face: FaceId) -> Result<(), Error> {
        self.with_front(face, n, Cube::turn_front_middle_layer_clockwise_90)
    }

    /// A wide turn: `face` and the adjoining slice together, `n` quarter turns clockwise.
    pub fn turn_face_and_middle_layer(&mut self, n: u8, face: FaceId) -> Result<(), Error> {
        self.turn_face(n, face)?;
        self.turn_face_middle_layer(n, face)
    }

    /// Rotate the whole cube `n` quarter turns around `axis`, in the direction of the axis' leading
    /// face. Built as a turn of the leading face plus a wide turn of the opposite face the other
    /// way, so every layer moves together.
    pub fn rotate(&mut self, n: u8, axis: Axis) -> Result<(), Error> {
        let face = axis.leading_face();
        let n = n % 4;
        self.turn_face(n, face)?;
        self.turn_face_and_middle_layer((4 - n) % 4, face.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::facelet::Color;
    use proptest::prelude::*;
    use FaceId::*;

    fn scrambled() -> Cube {
        let mut cube = Cube::solved();
        for (n, f) in [(1, Right), (1, Up), (3, Front), (2, Left), (1, Back), (3, Down)] {
            cube.turn_face(n, f).unwrap();
        }
        cube
    }

    #[test]
    fn right_turn_lifts_front_stickers() {
        let mut cube = Cube::solved();
        cube.turn_face(1, Right).unwrap();
        let up = cube.sticker(Up, Position::new(Up, Right, Front)).unwrap();
        assert_eq!(up.color(), Color::Green);
        let front = cube.sticker(Front, Position::new(Front, Front, Right)).unwrap();
        assert_eq!(front.color(), Color::Yellow);
        // the left column is untouched
        let left = cube.sticker(Up, Position::new(Up, Left, Front)).unwrap();
        assert_eq!(left.color(), Color::White);
    }

    #[test]
    fn front_turn_cycles_side_faces() {
        let mut cube = Cube::solved();
        cube.turn_front_clockwise_90().unwrap();
        // up receives from left, right from up
        let up = cube.sticker(Up, Position::new(Up, Up, Front)).unwrap();
        assert_eq!(up.color(), Color::Purple);
        let right = cube.sticker(Right, Position::new(Right, Right, Front)).unwrap();
        assert_eq!(right.color(), Color::White);
    }

    #[test]
    fn middle_layer_moves_centers() {
        let mut cube = Cube::solved();
        cube.turn_front_middle_layer_clockwise_90().unwrap();
        assert_eq!(cube.center_color(Up).unwrap(), Color::Purple);
        assert_eq!(cube.center_color(Right).unwrap(), Color::White);
        assert_eq!(cube.center_color(Front).unwrap(), Color::Green);
        for _ in 0..3 {
            cube.turn_front_middle_layer_clockwise_90().unwrap();
        }
        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn wide_turns_follow_standard_notation() {
        // r carries the front center up, like R does the front stickers
        let mut cube = Cube::solved();
        cube.turn_face_and_middle_layer(1, Right).unwrap();
        assert_eq!(cube.center_color(Up).unwrap(), Color::Green);
        assert_eq!(cube.center_color(Front).unwrap(), Color::Yellow);

        let mut cube = Cube::solved();
        cube.turn_face_and_middle_layer(1, Up).unwrap();
        assert_eq!(cube.center_color(Front).unwrap(), Color::Red);
    }

    #[test]
    fn rotations_are_rigid() {
        for axis in [Axis::FB, Axis::LR, Axis::UD] {
            let mut cube = Cube::solved();
            cube.rotate(1, axis).unwrap();
            for slot in FaceId::ARRAY {
                let center = cube.center_color(slot).unwrap();
                assert!(cube.face(slot).iter().all(|(_, f)| f.color() == center));
            }
            assert_ne!(cube, Cube::solved());
        }

        let mut cube = Cube::solved();
        cube.rotate(1, Axis::LR).unwrap();
        assert_eq!(cube.center_color(Up).unwrap(), Color::Green);
        let mut cube = Cube::solved();
        cube.rotate(1, Axis::UD).unwrap();
        assert_eq!(cube.center_color(Front).unwrap(), Color::Red);
        let mut cube = Cube::solved();
        cube.rotate(1, Axis::FB).unwrap();
        assert_eq!(cube.center_color(Right).unwrap(), Color::White);
    }

    proptest! {
        #[test]
        fn four_quarter_turns_are_identity(face in any::<FaceId>()) {
            let start = scrambled();
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.turn_face(1, face).unwrap();
            }
            prop_assert_eq!(&cube, &start);
        }

        #[test]
        fn half_turns_agree_with_quarter_turns(face in any::<FaceId>()) {
            let start = scrambled();
            let mut halves = start.clone();
            halves.turn_face(2, face).unwrap();
            halves.turn_face(2, face).unwrap();
            prop_assert_eq!(&halves, &start);

            let mut once = start.clone();
            once.turn_face(2, face).unwrap();
            let mut quarters = start.clone();
            quarters.turn_face(1, face).unwrap();
            quarters.turn_face(1, face).unwrap();
            prop_assert_eq!(once, quarters);
        }

        #[test]
        fn prime_undoes_turn(face in any::<FaceId>(), wide in any::<bool>()) {
            let start = scrambled();
            let mut cube = start.clone();
            if wide {
                cube.turn_face_and_middle_layer(1, face).unwrap();
                cube.turn_face_and_middle_layer(3, face).unwrap();
            } else {
                cube.turn_face(1, face).unwrap();
                cube.turn_face(3, face).unwrap();
            }
            prop_assert_eq!(cube, start);
        }

        #[test]
        fn opposite_faces_commute(face in any::<FaceId>()) {
            let start = scrambled();
            let mut a = start.clone();
            a.turn_face(1, face).unwrap();
            a.turn_face(1, face.opposite()).unwrap();
            let mut b = start;
            b.turn_face(1, face.opposite()).unwrap();
            b.turn_face(1, face).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
