//! Fixed geometry of the cube: the six face indices, how they relabel when another face is
//! treated as the front, and how the faces unfold into a flat net.
//!
//! ```text
//!          ___
//!         /U /|
//!        /__/ | B           U
//!       |   |R|           L F R
//!     L | F | /             D
//!       |___|/              B
//!         D
//! ```

use super::axis::Axis;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six faces of the cube, in its fixed numbering. The discriminant doubles as the index
/// into per-face arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum FaceId {
    Front = 0,
    Right = 1,
    Up = 2,
    Left = 3,
    Down = 4,
    Back = 5,
}

use FaceId::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

impl FaceId {
    /// Every face, ordered by index.
    pub const ARRAY: [FaceId; 6] = [F, R, U, L, D, B];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> FaceId {
        match self {
            F => B,
            B => F,
            R => L,
            L => R,
            U => D,
            D => U,
        }
    }

    /// The axis this face turns around.
    pub fn axis(self) -> Axis {
        match self {
            F | B => Axis::FB,
            R | L => Axis::LR,
            U | D => Axis::UD,
        }
    }

    /// Where this face ends up after turning the whole cube a quarter turn clockwise around the
    /// front axis. Front and back stay in place, the other four cycle R -> D -> L -> U -> R.
    pub fn rotate_front_clockwise(self) -> FaceId {
        Relabel::FRONT_CLOCKWISE.apply(self)
    }

    /// The inverse of [`rotate_front_clockwise`](FaceId::rotate_front_clockwise).
    pub fn rotate_front_counter_clockwise(self) -> FaceId {
        Relabel::FRONT_COUNTER_CLOCKWISE.apply(self)
    }

    /// Single letter name used in move notation and diagnostics.
    pub fn letter(self) -> char {
        match self {
            F => 'F',
            R => 'R',
            U => 'U',
            L => 'L',
            D => 'D',
            B => 'B',
        }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Row `s` lists, for each position i of the standard numbering (F, R, U, L, D, B), which face
// takes that role once `s` is held as the front. Every row is a proper rotation of the cube.
const FRONT_TO: [[FaceId; 6]; 6] = [
    [F, R, U, L, D, B],
    [R, U, F, D, B, L],
    [U, L, F, R, B, D],
    [L, D, F, U, B, R],
    [D, R, F, L, B, U],
    [B, R, D, L, U, F],
];

// Row-wise inverses of `FRONT_TO`.
const FRONT_FROM: [[FaceId; 6]; 6] = [
    [F, R, U, L, D, B],
    [U, F, R, B, L, D],
    [U, L, F, R, B, D],
    [U, B, L, F, R, D],
    [U, R, B, L, F, D],
    [B, R, D, L, U, F],
];

/// Given a face in the global numbering, return its index in the numbering where `side` is the
/// front.
pub fn map_front_from(side: FaceId, face: FaceId) -> FaceId {
    FRONT_FROM[side as usize][face as usize]
}

/// Exact inverse of [`map_front_from`].
pub fn map_front_to(side: FaceId, face: FaceId) -> FaceId {
    FRONT_TO[side as usize][face as usize]
}

/// A permutation of the six face indices that corresponds to holding the cube differently. Applied
/// component-wise to positions, it moves every cell of the cube rigidly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relabel([FaceId; 6]);

impl Relabel {
    /// A quarter turn of the whole cube, clockwise around the front axis.
    pub const FRONT_CLOCKWISE: Relabel = Relabel([F, D, R, U, L, B]);

    /// A quarter turn of the whole cube, counter-clockwise around the front axis.
    pub const FRONT_COUNTER_CLOCKWISE: Relabel = Relabel([F, U, L, D, R, B]);

    /// Renumber faces so that `side` becomes the front.
    pub fn front_from(side: FaceId) -> Relabel {
        Relabel(FRONT_FROM[side as usize])
    }

    /// Undo [`front_from`](Relabel::front_from).
    pub fn front_to(side: FaceId) -> Relabel {
        Relabel(FRONT_TO[side as usize])
    }

    /// The new index of `face`.
    pub fn apply(self, face: FaceId) -> FaceId {
        self.0[face as usize]
    }
}

/// The number of clockwise whole-cube front turns that carry the face in a given slot into the
/// right slot. Front and back never reach it.
const QUARTER_TURNS_TO_RIGHT: [Option<u8>; 6] = [None, Some(0), Some(1), Some(2), Some(3), None];

/// How many clockwise front-axis quarter turns of the whole cube bring `slot` to the right, or
/// `None` for the front and back slots.
pub fn quarter_turns_to_right(slot: FaceId) -> Option<u8> {
    QUARTER_TURNS_TO_RIGHT[slot as usize]
}

/// Neighbours of a face once the cube is unfolded into a flat net, used to read and print faces
/// row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Layout2D {
    pub face: FaceId,
    pub right: FaceId,
    pub up: FaceId,
    pub left: FaceId,
    pub down: FaceId,
}

const LAYOUT_2D: [Layout2D; 6] = [
    Layout2D { face: F, right: R, up: U, left: L, down: D },
    Layout2D { face: R, right: B, up: U, left: F, down: D },
    Layout2D { face: U, right: R, up: B, left: L, down: F },
    Layout2D { face: L, right: F, up: U, left: B, down: D },
    Layout2D { face: D, right: R, up: F, left: L, down: B },
    Layout2D { face: B, right: R, up: D, left: L, down: U },
];

impl Layout2D {
    /// The flat-net neighbours of `face`.
    pub fn of(face: FaceId) -> Layout2D {
        LAYOUT_2D[face as usize]
    }

    /// The three faces (besides `self.face`) naming each cell of the face read row by row from
    /// the top left, as `[row][column]`.
    pub fn cells(self) -> [[(FaceId, FaceId); 3]; 3] {
        let Layout2D {
            face,
            right,
            up,
            left,
            down,
        } = self;
        [
            [(left, up), (face, up), (right, up)],
            [(left, face), (face, face), (right, face)],
            [(left, down), (face, down), (right, down)],
        ]
    }
}
