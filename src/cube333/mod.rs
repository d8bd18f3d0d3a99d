//! A facelet model of the 3x3x3 Rubik's cube. The cube is stored as six faces of nine stickers,
//! each sticker addressed by a [`Position`]. Every turn is derived from a single front turn plus a
//! relabelling of the faces, see [`turns`].

pub mod axis;
pub mod face;
pub mod facelet;
pub mod grid;
pub mod moves;
mod normalize;
pub mod position;
pub mod topology;
pub mod turns;

pub use face::Face;
pub use facelet::{Color, Facelet};
pub use grid::ColorGrid;
pub use position::{CellKind, Position};
pub use topology::FaceId;

use crate::error::Error;
use std::cmp::Ordering;
use topology::{Layout2D, Relabel};

/// A cube state, along with how many moves produced it and which ones.
///
/// `faces[i]` is always the face sitting in slot `i`. Which colour that face shows in its center
/// is a separate question answered by [`slot_of_color`](Cube::slot_of_color): slice moves and
/// whole-cube rotations move centers between slots.
///
/// Comparison and equality only look at the stickers, never at `step` or `path`.
#[derive(Debug, Clone)]
pub struct Cube {
    faces: [Face; 6],
    step: usize,
    path: String,
}

impl Cube {
    /// The solved cube, held in its home orientation.
    pub fn solved() -> Cube {
        Cube {
            faces: FaceId::ARRAY.map(Face::solved),
            step: 0,
            path: String::new(),
        }
    }

    /// How many moves have been applied since the cube was created.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The applied move names, concatenated.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn record(&mut self, name: &str) {
        self.step += 1;
        self.path.push_str(name);
    }

    /// The face in a slot.
    pub fn face(&self, slot: FaceId) -> &Face {
        &self.faces[slot as usize]
    }

    /// The faces in slot order.
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// The colour of the center in a slot.
    pub fn center_color(&self, slot: FaceId) -> Result<Color, Error> {
        self.face(slot).center_color()
    }

    /// The slot whose center has the given colour.
    pub fn slot_of_color(&self, color: Color) -> Result<FaceId, Error> {
        for slot in FaceId::ARRAY {
            if self.center_color(slot)? == color {
                return Ok(slot);
            }
        }
        Err(Error::CorruptedState(format!("no center has colour {color}")))
    }

    /// The sticker on face `slot` at `pos`.
    pub fn sticker(&self, slot: FaceId, pos: Position) -> Result<Facelet, Error> {
        self.face(slot).get(pos)
    }

    pub(crate) fn set_sticker(
        &mut self,
        slot: FaceId,
        pos: Position,
        facelet: Facelet,
    ) -> Result<(), Error> {
        self.faces[slot as usize].set(pos, facelet)
    }

    /// Move every sticker of the cube by relabelling the faces, i.e. hold the whole cube
    /// differently. Each face lands in the slot its relabelled position names, so slot `i` still
    /// holds the face whose center position is `i` afterwards.
    pub fn relabel(&mut self, r: Relabel) -> Result<(), Error> {
        let mut out = self.faces;
        for face in &self.faces {
            let moved = face.relabel(r)?;
            out[moved.side() as usize] = moved;
        }
        self.faces = out;
        Ok(())
    }

    /// Renumber the faces so that `side` becomes the front.
    pub fn map_front_from(&mut self, side: FaceId) -> Result<(), Error> {
        self.relabel(Relabel::front_from(side))
    }

    /// Undo [`map_front_from`](Cube::map_front_from).
    pub fn map_front_to(&mut self, side: FaceId) -> Result<(), Error> {
        self.relabel(Relabel::front_to(side))
    }

    /// Turn the whole cube a quarter turn clockwise around the front axis.
    pub fn rotate_front_clockwise_90(&mut self) -> Result<(), Error> {
        self.relabel(Relabel::FRONT_CLOCKWISE)
    }

    /// The colours of every face read row by row as laid out on the flat net.
    pub fn render(&self) -> Result<ColorGrid, Error> {
        let mut grid = ColorGrid::default();
        for slot in FaceId::ARRAY {
            let layout = Layout2D::of(slot);
            for (r, row) in layout.cells().iter().enumerate() {
                for (c, &(a, b)) in row.iter().enumerate() {
                    let pos = Position::new(slot, a, b);
                    grid.set(slot, r, c, self.sticker(slot, pos)?.color());
                }
            }
        }
        Ok(grid)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.faces == other.faces
    }
}

impl Eq for Cube {}

impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cube {
    fn cmp(&self, other: &Self) -> Ordering {
        self.faces.cmp(&other.faces)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grid = self.render().map_err(|_| std::fmt::Error)?;
        writeln!(f, "step = {}, path={}", self.step, self.path)?;

        let blank = "      ";
        let row = |slot: FaceId, r: usize| -> String {
            grid.row(slot, r)
                .iter()
                .map(|c| format!("{c} "))
                .collect()
        };

        for r in 0..3 {
            writeln!(f, "{blank} {}", row(FaceId::Up, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{}|{}|{}",
                row(FaceId::Left, r),
                row(FaceId::Front, r),
                row(FaceId::Right, r)
            )?;
        }
        for slot in [FaceId::Down, FaceId::Back] {
            for r in 0..3 {
                writeln!(f, "{blank} {}", row(slot, r))?;
            }
        }
        Ok(())
    }
}
