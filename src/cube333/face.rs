//! One face of the cube: nine stickers keyed by position.

use super::facelet::{Color, Facelet};
use super::position::{CellKind, Position};
use super::topology::{FaceId, Relabel};
use crate::error::Error;

/// The nine stickers of one face. Sticker `i` sits at `Position::cells_of(side)[i]`, so the
/// positions of a face are always distinct, always complete and always in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face {
    side: FaceId,
    cells: [Facelet; 9],
}

impl Face {
    /// The face `side` of a solved cube.
    pub fn solved(side: FaceId) -> Face {
        let cells = (*Position::cells_of(side)).map(|pos| {
            let (a, b) = pos.others(side).unwrap_or((side, side));
            Facelet::new(Color::home(side), Color::home(a), Color::home(b))
        });
        Face { side, cells }
    }

    /// The slot of the cube this face currently occupies.
    pub fn side(&self) -> FaceId {
        self.side
    }

    fn slot(&self, pos: Position) -> Result<usize, Error> {
        pos.slot_on(self.side).ok_or_else(|| {
            Error::CorruptedState(format!("position {pos} is not on face {}", self.side))
        })
    }

    /// The sticker at `pos`.
    pub fn get(&self, pos: Position) -> Result<Facelet, Error> {
        Ok(self.cells[self.slot(pos)?])
    }

    /// Replace the sticker at `pos`.
    pub fn set(&mut self, pos: Position, facelet: Facelet) -> Result<(), Error> {
        let i = self.slot(pos)?;
        self.cells[i] = facelet;
        Ok(())
    }

    /// Every (position, sticker) pair in canonical position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Facelet)> + '_ {
        Position::cells_of(self.side)
            .iter()
            .copied()
            .zip(self.cells.iter().copied())
    }

    /// Re-key every sticker by relabelling its position. Stickers stay attached to their physical
    /// cell, so the face as a whole moves to the relabelled slot.
    pub fn relabel(&self, r: Relabel) -> Result<Face, Error> {
        let side = r.apply(self.side);
        let mut out = Face {
            side,
            cells: self.cells,
        };
        for (pos, facelet) in self.iter() {
            out.set(pos.relabel(r), facelet)?;
        }
        Ok(out)
    }

    /// Turn the face a quarter turn clockwise around the front axis. For the front face this is
    /// the sticker rotation of an `F` turn; other faces are carried around with the whole cube.
    pub fn turn_clockwise_90(&self) -> Result<Face, Error> {
        self.relabel(Relabel::FRONT_CLOCKWISE)
    }

    /// See [`Position::map_front_from`].
    pub fn map_front_from(&self, side: FaceId) -> Result<Face, Error> {
        self.relabel(Relabel::front_from(side))
    }

    /// See [`Position::map_front_to`].
    pub fn map_front_to(&self, side: FaceId) -> Result<Face, Error> {
        self.relabel(Relabel::front_to(side))
    }

    /// The position and sticker of the center cell.
    pub fn center(&self) -> Result<(Position, Facelet), Error> {
        let (pos, facelet) = self
            .iter()
            .find(|(p, _)| p.kind() == CellKind::Center)
            .ok_or_else(|| Error::CorruptedState(format!("no center on face {}", self.side)))?;
        if facelet.kind() != CellKind::Center {
            return Err(Error::CorruptedState(format!(
                "center of face {} holds a non-center sticker {facelet}",
                self.side
            )));
        }
        Ok((pos, facelet))
    }

    /// The colour of the center cell.
    pub fn center_color(&self) -> Result<Color, Error> {
        Ok(self.center()?.1.color())
    }
}
