//! Addressing of the cells of the cube. A cell is named by the (multi)set of faces that meet at
//! it, stored as a canonical ordered triple:
//!
//! - `a1 == a2 == a3`: a center
//! - `a1 == a2 < a3`: an edge
//! - `a1 < a2 < a3`: a corner
//!
//! The same triple names the same physical cubie slot from each face it touches, so a face has to
//! be known in addition to the position to pick out a single sticker.

use super::topology::{FaceId, Relabel};

/// The three kinds of cell on a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CellKind {
    Center,
    Edge,
    Corner,
}

/// A canonical triple of faces naming one cubie slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    a1: FaceId,
    a2: FaceId,
    a3: FaceId,
}

impl Position {
    /// Build a position from any three faces. The result is sorted, and if the two larger faces
    /// coincide the smaller one is repeated instead, so `{i, j, j}` and `{i, i, j}` name the same
    /// edge.
    pub fn new(b1: FaceId, b2: FaceId, b3: FaceId) -> Position {
        let mut a = [b1, b2, b3];
        a.sort();
        let [a1, mut a2, a3] = a;
        if a2 == a3 {
            a2 = a1;
        }
        Position { a1, a2, a3 }
    }

    const fn raw(a1: FaceId, a2: FaceId, a3: FaceId) -> Position {
        Position { a1, a2, a3 }
    }

    /// The center of a face.
    pub fn center(face: FaceId) -> Position {
        Position::raw(face, face, face)
    }

    /// The components in canonical order.
    pub fn faces(self) -> [FaceId; 3] {
        [self.a1, self.a2, self.a3]
    }

    /// Whether the cell lies on the given face.
    pub fn touches(self, face: FaceId) -> bool {
        self.faces().contains(&face)
    }

    /// The two remaining components once one occurrence of `face` is removed, or `None` if the
    /// position doesn't touch `face`.
    pub fn others(self, face: FaceId) -> Option<(FaceId, FaceId)> {
        match self.faces() {
            [a, b, c] if a == face => Some((b, c)),
            [a, b, c] if b == face => Some((a, c)),
            [a, b, c] if c == face => Some((a, b)),
            _ => None,
        }
    }

    /// Classify the cell.
    pub fn kind(self) -> CellKind {
        if self.a1 == self.a3 {
            CellKind::Center
        } else if self.a1 == self.a2 {
            CellKind::Edge
        } else {
            CellKind::Corner
        }
    }

    /// Apply a relabel of the faces to each component and re-canonicalize.
    pub fn relabel(self, r: Relabel) -> Position {
        Position::new(r.apply(self.a1), r.apply(self.a2), r.apply(self.a3))
    }

    /// The position this cell moves to when the whole cube turns a quarter turn clockwise around
    /// the front axis. Four applications give back the original position.
    pub fn rotate_clockwise_90(self) -> Position {
        self.relabel(Relabel::FRONT_CLOCKWISE)
    }

    /// This position in the numbering where `side` is the front.
    pub fn map_front_from(self, side: FaceId) -> Position {
        self.relabel(Relabel::front_from(side))
    }

    /// Inverse of [`map_front_from`](Position::map_front_from).
    pub fn map_front_to(self, side: FaceId) -> Position {
        self.relabel(Relabel::front_to(side))
    }

    /// Every position on a face, in canonical order. The index of a position in this list is the
    /// slot a [`Face`](super::face::Face) stores its sticker in.
    pub fn cells_of(face: FaceId) -> &'static [Position; 9] {
        &FACE_CELLS[face as usize]
    }

    /// The slot of this position on the given face, if it lies on that face.
    pub fn slot_on(self, face: FaceId) -> Option<usize> {
        Position::cells_of(face).binary_search(&self).ok()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.a1.letter(),
            self.a2.letter(),
            self.a3.letter()
        )
    }
}

use FaceId::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

const fn p(a1: FaceId, a2: FaceId, a3: FaceId) -> Position {
    Position::raw(a1, a2, a3)
}

// One center, four edges and four corners per face, sorted.
#[rustfmt::skip]
const FACE_CELLS: [[Position; 9]; 6] = [
    [p(F, F, F), p(F, F, R), p(F, F, U), p(F, F, L), p(F, F, D), p(F, R, U), p(F, R, D), p(F, U, L), p(F, L, D)],
    [p(F, F, R), p(F, R, U), p(F, R, D), p(R, R, R), p(R, R, U), p(R, R, D), p(R, R, B), p(R, U, B), p(R, D, B)],
    [p(F, F, U), p(F, R, U), p(F, U, L), p(R, R, U), p(R, U, B), p(U, U, U), p(U, U, L), p(U, U, B), p(U, L, B)],
    [p(F, F, L), p(F, U, L), p(F, L, D), p(U, U, L), p(U, L, B), p(L, L, L), p(L, L, D), p(L, L, B), p(L, D, B)],
    [p(F, F, D), p(F, R, D), p(F, L, D), p(R, R, D), p(R, D, B), p(L, L, D), p(L, D, B), p(D, D, D), p(D, D, B)],
    [p(R, R, B), p(R, U, B), p(R, D, B), p(U, U, B), p(U, L, B), p(L, L, B), p(L, D, B), p(D, D, B), p(B, B, B)],
];
