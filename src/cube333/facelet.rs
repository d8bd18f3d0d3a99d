//! Sticker colours. Every sticker remembers the colours of the other stickers on its cubie, so two
//! stickers compare equal only if they belong to the same kind of cubie.

use super::position::CellKind;
use super::topology::FaceId;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The six sticker colours. Each colour belongs to exactly one face of the solved cube, and the
/// ordering of colours follows the ordering of those faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Color {
    Green,
    Red,
    White,
    Purple,
    Yellow,
    Blue,
}

impl Color {
    /// Every colour, ordered like [`FaceId::ARRAY`].
    pub const ARRAY: [Color; 6] = [
        Color::Green,
        Color::Red,
        Color::White,
        Color::Purple,
        Color::Yellow,
        Color::Blue,
    ];

    /// The colour of a face in the solved cube.
    pub fn home(face: FaceId) -> Color {
        Color::ARRAY[face as usize]
    }

    /// The face this colour belongs to in the solved cube.
    pub fn home_face(self) -> FaceId {
        FaceId::ARRAY[self as usize]
    }

    /// Single character used when reading and printing cubes.
    pub fn symbol(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Red => 'r',
            Color::White => 'w',
            Color::Purple => 'p',
            Color::Yellow => 'y',
            Color::Blue => 'b',
        }
    }

    /// Inverse of [`symbol`](Color::symbol), ignoring case.
    pub fn from_symbol(c: char) -> Option<Color> {
        Color::ARRAY
            .into_iter()
            .find(|col| col.symbol() == c.to_ascii_lowercase())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The colour of one sticker together with the colours of its neighbours on the same cubie.
///
/// Neighbours are kept sorted. For edge stickers the neighbour pair is stored as
/// `(min(color, other), other)`, which doesn't depend on which neighbour was passed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet {
    color: Color,
    n1: Color,
    n2: Color,
}

impl Facelet {
    /// Build a sticker of colour `color` on a cubie whose other two stickers are `b2` and `b3`.
    /// Centers pass their own colour twice, edge stickers pass their own colour once.
    pub fn new(color: Color, b2: Color, b3: Color) -> Facelet {
        let mut f = Facelet {
            color,
            n1: b2.min(b3),
            n2: b2.max(b3),
        };
        if f.kind() == CellKind::Edge {
            if f.n2 == color {
                f.n2 = f.n1;
            }
            f.n1 = color.min(f.n2);
        }
        f
    }

    /// A sticker that only knows its own colour, used while a cube is being read in.
    pub(crate) fn bare(color: Color) -> Facelet {
        Facelet {
            color,
            n1: color,
            n2: color,
        }
    }

    /// The colour of this sticker.
    pub fn color(self) -> Color {
        self.color
    }

    /// The colours of the neighbouring stickers, as stored.
    pub fn neighbours(self) -> (Color, Color) {
        (self.n1, self.n2)
    }

    /// Classify the cubie this sticker belongs to.
    pub fn kind(self) -> CellKind {
        if self.color == self.n1 && self.n1 == self.n2 {
            CellKind::Center
        } else if self.color != self.n1 && self.color != self.n2 && self.n1 < self.n2 {
            CellKind::Corner
        } else {
            CellKind::Edge
        }
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            CellKind::Center => write!(f, "{}", self.color),
            CellKind::Edge => {
                let other = if self.color == self.n1 {
                    self.n2
                } else {
                    self.n1
                };
                write!(f, "{}{}", self.color, other)
            }
            CellKind::Corner => write!(f, "{}{}{}", self.color, self.n1, self.n2),
        }
    }
}
