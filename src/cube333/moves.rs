//! Named moves of the 3x3x3 and how they act on a [`Cube`].
//!
//! Notation: `F R U L D B` turn one face clockwise, the lower-case letters turn the face together
//! with the adjoining middle slice, and `x y z` turn the whole cube (following R, U and F
//! respectively; `X Y Z` are accepted too). A suffix of `2` doubles the move and `'` reverses it.

use super::axis::Axis;
use super::topology::FaceId;
use super::Cube;
use crate::error::Error;
use crate::moves::{Cancellation, MoveSequence};

use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The kind of a move, without its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// One face.
    Face(FaceId),
    /// A face and the slice next to it.
    Wide(FaceId),
    /// The whole cube.
    Rotation(Axis),
}

impl Move333Type {
    /// The axis the move turns around.
    pub fn axis(self) -> Axis {
        match self {
            Move333Type::Face(f) | Move333Type::Wide(f) => f.axis(),
            Move333Type::Rotation(a) => a,
        }
    }

    fn letter(self) -> char {
        match self {
            Move333Type::Face(f) => f.letter(),
            Move333Type::Wide(f) => f.letter().to_ascii_lowercase(),
            Move333Type::Rotation(a) => a.rotation_letter(),
        }
    }
}

/// A move type with a number of clockwise quarter turns, 1 to 3. An anti-clockwise move has a
/// count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: (4 - self.count % 4) % 4,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            match (self.count + b.count) % 4 {
                0 => Cancellation::NoMove,
                count => Cancellation::OneMove(Move333 { ty: self.ty, count }),
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

/// Create a move from a face (or `wide` face, or `rot` axis) and a count.
///
/// ```rust
/// use facelet_cube::mv;
///
/// assert_eq!(mv!(Right, 3).to_string(), "R'");
/// assert_eq!(mv!(wide Up, 2).to_string(), "u2");
/// assert_eq!(mv!(rot LR, 1).to_string(), "x");
/// ```
#[macro_export]
macro_rules! mv {
    (wide $face:ident, $count:expr) => {
        $crate::cube333::moves::Move333 {
            ty: $crate::cube333::moves::Move333Type::Wide($crate::cube333::FaceId::$face),
            count: $count,
        }
    };
    (rot $axis:ident, $count:expr) => {
        $crate::cube333::moves::Move333 {
            ty: $crate::cube333::moves::Move333Type::Rotation(
                $crate::cube333::axis::Axis::$axis,
            ),
            count: $count,
        }
    };
    ($face:ident, $count:expr) => {
        $crate::cube333::moves::Move333 {
            ty: $crate::cube333::moves::Move333Type::Face($crate::cube333::FaceId::$face),
            count: $count,
        }
    };
}

impl Move333 {
    /// Every named move: face turns, wide turns and whole-cube rotations. Parsing a move name looks
    /// it up here.
    #[rustfmt::skip]
    pub const TABLE: [Move333; 45] = [
        mv!(Front, 1), mv!(Front, 2), mv!(Front, 3),
        mv!(Right, 1), mv!(Right, 2), mv!(Right, 3),
        mv!(Up, 1), mv!(Up, 2), mv!(Up, 3),
        mv!(Left, 1), mv!(Left, 2), mv!(Left, 3),
        mv!(Down, 1), mv!(Down, 2), mv!(Down, 3),
        mv!(Back, 1), mv!(Back, 2), mv!(Back, 3),
        mv!(wide Front, 1), mv!(wide Front, 2), mv!(wide Front, 3),
        mv!(wide Right, 1), mv!(wide Right, 2), mv!(wide Right, 3),
        mv!(wide Up, 1), mv!(wide Up, 2), mv!(wide Up, 3),
        mv!(wide Left, 1), mv!(wide Left, 2), mv!(wide Left, 3),
        mv!(wide Down, 1), mv!(wide Down, 2), mv!(wide Down, 3),
        mv!(wide Back, 1), mv!(wide Back, 2), mv!(wide Back, 3),
        mv!(rot LR, 1), mv!(rot LR, 2), mv!(rot LR, 3),
        mv!(rot UD, 1), mv!(rot UD, 2), mv!(rot UD, 3),
        mv!(rot FB, 1), mv!(rot FB, 2), mv!(rot FB, 3),
    ];

    /// Whether `name` is in the move table.
    pub fn is_valid_name(name: &str) -> bool {
        name.parse::<Move333>().is_ok()
    }

    /// Look up `name` and apply it to a copy of `cube`.
    pub fn apply(cube: &Cube, name: &str) -> Result<Cube, Error> {
        name.parse::<Move333>()?.act_on(cube)
    }

    /// Apply the move to a copy of `cube`, counting it and appending its name to the path. The
    /// cube passed in is left untouched.
    pub fn act_on(self, cube: &Cube) -> Result<Cube, Error> {
        let mut out = cube.clone();
        self.execute(&mut out)?;
        out.record(&self.to_string());
        tracing::debug!(mv = %self, step = out.step(), "applied move");
        Ok(out)
    }

    /// Perform the move in place, without bookkeeping.
    pub fn execute(self, cube: &mut Cube) -> Result<(), Error> {
        match self.ty {
            Move333Type::Face(face) => cube.turn_face(self.count, face),
            Move333Type::Wide(face) => cube.turn_face_and_middle_layer(self.count, face),
            Move333Type::Rotation(axis) => cube.rotate(self.count, axis),
        }
    }
}

impl Cube {
    /// Apply every move of `moves` in order, see [`Move333::act_on`].
    pub fn apply_sequence(&self, moves: &MoveSequence<Move333>) -> Result<Cube, Error> {
        moves
            .iter()
            .try_fold(self.clone(), |cube, mv| mv.act_on(&cube))
    }
}

impl FromStr for Move333 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // X, Y and Z are aliases of the rotations x, y and z
        let mut chars = s.chars();
        let name = match chars.next() {
            Some(c) if c.is_ascii_uppercase() && Axis::from_rotation_letter(c).is_some() => {
                format!("{}{}", c.to_ascii_lowercase(), chars.as_str())
            }
            _ => s.to_string(),
        };
        Move333::TABLE
            .iter()
            .copied()
            .find(|mv| mv.to_string() == name)
            .ok_or_else(|| Error::UnknownMove(s.to_string()))
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = self.ty.letter();
        match self.count {
            1 => write!(f, "{letter}"),
            3 => write!(f, "{letter}'"),
            _ => write!(f, "{letter}{}", self.count),
        }
    }
}

// Moves print as their notation, not as the struct.
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use std::collections::HashSet;

    fn solved_after(moves: &str) -> Cube {
        Cube::solved()
            .apply_sequence(&moves.parse().unwrap())
            .unwrap()
    }

    #[test]
    fn r_loop() {
        let mut cube = Cube::solved();
        for _ in 0..4 {
            cube = mv!(Back, 1).act_on(&cube).unwrap();
        }
        assert_eq!(cube, Cube::solved());
        assert_eq!(cube.step(), 4);
        assert_eq!(cube.path(), "BBBB");
    }

    #[test]
    fn sune_has_order_six() {
        let sune: MoveSequence<Move333> = "R U R' U R U2 R'".parse().unwrap();
        let mut cube = Cube::solved();
        for i in 1..=6 {
            cube = cube.apply_sequence(&sune).unwrap();
            assert_eq!(cube == Cube::solved(), i == 6, "after {i} repetitions");
        }
        assert_eq!(cube.step(), 42);
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let start = solved_after("F U");
        let after = Move333::apply(&start, "R'").unwrap();
        assert_eq!(start, solved_after("F U"));
        assert_eq!(start.path(), "FU");
        assert_eq!(after.path(), "FUR'");
        assert_eq!(after.step(), 3);
        assert_ne!(after, start);
    }

    #[test]
    fn unknown_moves() {
        for name in ["", "Q", "R3", "R''", "RU", "w", "x4", "F2'"] {
            assert!(!Move333::is_valid_name(name), "{name}");
            assert_eq!(
                Move333::apply(&Cube::solved(), name),
                Err(Error::UnknownMove(name.to_string()))
            );
        }
        for name in ["R", "R2", "R'", "r", "b'", "x", "Y2", "z'"] {
            assert!(Move333::is_valid_name(name), "{name}");
        }
    }

    #[test]
    fn move_table_names() {
        let names: HashSet<String> = Move333::TABLE.iter().map(|m| m.to_string()).collect();
        assert_eq!(names.len(), Move333::TABLE.len());
        for m in Move333::TABLE {
            assert_eq!(m.to_string().parse::<Move333>().unwrap(), m);
        }
        assert_eq!("X".parse::<Move333>().unwrap(), mv!(rot LR, 1));
        assert_eq!("Z'".parse::<Move333>().unwrap(), mv!(rot FB, 3));
    }

    #[test]
    fn rotations_match_compositions() {
        assert_eq!(solved_after("x"), solved_after("L' r"));
        assert_eq!(solved_after("y"), solved_after("U d'"));
        assert_eq!(solved_after("z"), solved_after("F b'"));
        assert_eq!(solved_after("x y x'"), solved_after("z"));
    }

    #[test]
    fn cancellation_examples() {
        let seq: MoveSequence<Move333> = "R L R' U U D' U2 D".parse().unwrap();
        assert_eq!(seq.cancel().to_string(), "L");
        let seq: MoveSequence<Move333> = "R r x' F".parse().unwrap();
        assert_eq!(seq.clone().cancel(), seq);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn move_then_inverse(m in any::<Move333>()) {
            let start = solved_after("R U F' D2 l");
            let there = m.act_on(&start).unwrap();
            prop_assert_eq!(m.inverse().act_on(&there).unwrap(), start);
        }

        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            prop_assert_eq!(
                Cube::solved().apply_sequence(&mvs).unwrap(),
                Cube::solved().apply_sequence(&cancelled).unwrap()
            );
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            let there = Cube::solved().apply_sequence(&mvs).unwrap();
            prop_assert_eq!(there.apply_sequence(&mvs.inverse()).unwrap(), Cube::solved());
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn names_round_trip(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let text = mvs.to_string();
            prop_assert_eq!(text.parse::<MoveSequence<Move333>>().unwrap(), mvs);
        }
    }
}
