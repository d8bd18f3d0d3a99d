//! The flat 6x3x3 colour grid used to read cubes in and print them out.
//!
//! As text, a grid is six lines, one per face in slot order (F, R, U, L, D, B). Each line holds the
//! three rows of the face separated by `;`, and each row three colour symbols separated by spaces:
//!
//! ```text
//! g g w;r r r;b b r
//! ```
//!
//! Rows run top to bottom and columns left to right as the face appears on the unfolded net.

use super::facelet::{Color, Facelet};
use super::position::Position;
use super::topology::{FaceId, Layout2D};
use super::Cube;
use crate::error::Error;

use std::str::FromStr;

/// The colours of a cube as `[face][row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorGrid([[[Color; 3]; 3]; 6]);

impl Default for ColorGrid {
    /// The grid of the solved cube.
    fn default() -> Self {
        ColorGrid(Color::ARRAY.map(|c| [[c; 3]; 3]))
    }
}

impl ColorGrid {
    /// Wrap raw colours.
    pub fn new(colors: [[[Color; 3]; 3]; 6]) -> ColorGrid {
        ColorGrid(colors)
    }

    /// The colour at a cell of the net.
    pub fn get(&self, slot: FaceId, row: usize, col: usize) -> Color {
        self.0[slot as usize][row][col]
    }

    /// Set the colour at a cell of the net.
    pub fn set(&mut self, slot: FaceId, row: usize, col: usize, color: Color) {
        self.0[slot as usize][row][col] = color;
    }

    /// One row of a face.
    pub fn row(&self, slot: FaceId, row: usize) -> [Color; 3] {
        self.0[slot as usize][row]
    }

    /// Replace a whole face.
    pub fn set_face(&mut self, slot: FaceId, face: [[Color; 3]; 3]) {
        self.0[slot as usize] = face;
    }

    /// The raw colours.
    pub fn colors(&self) -> &[[[Color; 3]; 3]; 6] {
        &self.0
    }

    /// Parse one face in the `r r r;r r r;r r r` format. `slot` is only used in error messages.
    pub fn parse_face(slot: FaceId, line: &str) -> Result<[[Color; 3]; 3], Error> {
        let rows: Vec<&str> = line.trim().split(';').collect();
        if rows.len() != 3 {
            return Err(Error::InvalidConfiguration(format!(
                "expected 3 rows in {slot}, found {}",
                rows.len()
            )));
        }

        let mut face = [[Color::Green; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<&str> = row.split_whitespace().collect();
            if symbols.len() != 3 {
                return Err(Error::InvalidConfiguration(format!(
                    "expected 3 cells in row {r} of {slot}, found {} in [{row}]",
                    symbols.len()
                )));
            }
            for (c, symbol) in symbols.iter().enumerate() {
                let mut chars = symbol.chars();
                face[r][c] = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Color::from_symbol(ch),
                    _ => None,
                }
                .ok_or_else(|| {
                    Error::InvalidConfiguration(format!(
                        "column {c} [{symbol}] of row {r} in {slot} is not a valid colour, valid \
                         colours are {}",
                        valid_symbols()
                    ))
                })?;
            }
        }
        Ok(face)
    }
}

fn valid_symbols() -> String {
    Color::ARRAY
        .iter()
        .map(|c| c.symbol().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl FromStr for ColorGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != 6 {
            return Err(Error::InvalidConfiguration(format!(
                "expected 6 faces, found {}",
                lines.len()
            )));
        }

        let mut grid = ColorGrid::default();
        for (slot, line) in FaceId::ARRAY.into_iter().zip(lines) {
            grid.set_face(slot, ColorGrid::parse_face(slot, line)?);
        }
        Ok(grid)
    }
}

impl std::fmt::Display for ColorGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in &self.0 {
            let rows: Vec<String> = face
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|c| c.symbol().to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            writeln!(f, "{}", rows.join(";"))?;
        }
        Ok(())
    }
}

impl Cube {
    /// Build a cube from a colour grid. Besides the shape of the grid this checks that every
    /// colour appears nine times, that no cubie carries the same or opposite colours twice and that
    /// the centers are a rotation of the solved arrangement.
    pub fn from_grid(grid: &ColorGrid) -> Result<Cube, Error> {
        for color in Color::ARRAY {
            let count = grid.0.iter().flatten().flatten().filter(|&&c| c == color).count();
            if count != 9 {
                return Err(Error::InvalidConfiguration(format!(
                    "colour {color} appears {count} times, expected 9"
                )));
            }
        }

        let mut bare = Cube::solved();
        for slot in FaceId::ARRAY {
            for (r, row) in Layout2D::of(slot).cells().iter().enumerate() {
                for (c, &(a, b)) in row.iter().enumerate() {
                    let pos = Position::new(slot, a, b);
                    bare.set_sticker(slot, pos, Facelet::bare(grid.get(slot, r, c)))?;
                }
            }
        }

        // Every sticker learns the colours of the other stickers on its cubie.
        let mut cube = bare.clone();
        for slot in FaceId::ARRAY {
            for &pos in Position::cells_of(slot) {
                let (a, b) = pos.others(slot).unwrap_or((slot, slot));
                let own = bare.sticker(slot, pos)?.color();
                let ca = bare.sticker(a, pos)?.color();
                let cb = bare.sticker(b, pos)?.color();
                check_cubie(pos, slot, own, a, ca)?;
                check_cubie(pos, slot, own, b, cb)?;
                cube.set_sticker(slot, pos, Facelet::new(own, ca, cb))?;
            }
        }

        let mirrored =
            || Error::InvalidConfiguration("the centers are not a rotation of the solved cube".into());
        let normal = cube.normalized().map_err(|_| mirrored())?;
        for slot in FaceId::ARRAY {
            if normal.center_color(slot)? != Color::home(slot) {
                return Err(mirrored());
            }
        }

        Ok(cube)
    }
}

// Two different stickers of a cubie must show different, non-opposite colours.
fn check_cubie(pos: Position, s1: FaceId, c1: Color, s2: FaceId, c2: Color) -> Result<(), Error> {
    if s1 == s2 {
        return Ok(());
    }
    if c1 == c2 || c1.home_face().opposite() == c2.home_face() {
        return Err(Error::InvalidConfiguration(format!(
            "cubie {pos} shows {c1} on {s1} and {c2} on {s2}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // R U F' D2 L B
    const SCRAMBLED: &str = "w y y;w g g;w b b
b b y;y r p;p p w
b r g;b w w;p r r
w p g;w p g;g g g
r y y;r y y;y r r
p b b;p b g;p w r
";

    #[test]
    fn solved_grid_round_trip() {
        let grid = Cube::solved().render().unwrap();
        assert_eq!(grid, ColorGrid::default());
        assert_eq!(Cube::from_grid(&grid).unwrap(), Cube::solved());
        assert_eq!(grid.to_string().parse::<ColorGrid>().unwrap(), grid);
    }

    #[test]
    fn solved_text() {
        let text = ColorGrid::default().to_string();
        assert_eq!(text.lines().next(), Some("g g g;g g g;g g g"));
        assert_eq!(text.lines().nth(3), Some("p p p;p p p;p p p"));
    }

    #[test]
    fn rendered_grid_reads_back() {
        let cube = Cube::solved()
            .apply_sequence(&"R U F' l2 D".parse().unwrap())
            .unwrap();
        let grid = cube.render().unwrap();
        assert_eq!(Cube::from_grid(&grid).unwrap(), cube);
    }

    #[test]
    fn shape_errors() {
        let bad_rows = SCRAMBLED.replacen("w y y;w g g;w b b", "w y y;w g g", 1);
        assert!(matches!(
            bad_rows.parse::<ColorGrid>(),
            Err(Error::InvalidConfiguration(_))
        ));
        let bad_cells = SCRAMBLED.replacen("w y y;", "w y;", 1);
        assert!(matches!(
            bad_cells.parse::<ColorGrid>(),
            Err(Error::InvalidConfiguration(_))
        ));
        let bad_colour = SCRAMBLED.replacen("w y y;", "w q y;", 1);
        assert!(matches!(
            bad_colour.parse::<ColorGrid>(),
            Err(Error::InvalidConfiguration(_))
        ));
        let missing_face: String = SCRAMBLED.lines().take(5).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            missing_face.parse::<ColorGrid>(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn impossible_cubes_are_rejected() {
        // a single sticker changed breaks the colour counts
        let mut grid = ColorGrid::default();
        grid.set(FaceId::Front, 0, 0, Color::Red);
        assert!(matches!(
            Cube::from_grid(&grid),
            Err(Error::InvalidConfiguration(_))
        ));

        // trading two stickers keeps the counts but repeats a colour on the front-right edge
        let mut grid = ColorGrid::default();
        grid.set(FaceId::Front, 1, 2, Color::Red);
        grid.set(FaceId::Right, 0, 1, Color::Green);
        assert!(matches!(
            Cube::from_grid(&grid),
            Err(Error::InvalidConfiguration(_))
        ));

        // mirrored centers
        let mut grid = ColorGrid::default();
        let right = [[Color::Red; 3]; 3];
        let left = [[Color::Purple; 3]; 3];
        grid.set_face(FaceId::Right, left);
        grid.set_face(FaceId::Left, right);
        assert!(Cube::from_grid(&grid).is_err());
    }

    #[test]
    fn scrambled_example_reads_in() {
        let grid: ColorGrid = SCRAMBLED.parse().unwrap();
        assert_eq!(grid.get(FaceId::Front, 0, 2), Color::Yellow);
        assert_eq!(grid.row(FaceId::Left, 2), [Color::Green; 3]);

        let cube = Cube::from_grid(&grid).unwrap();
        let expected = Cube::solved()
            .apply_sequence(&"R U F' D2 L B".parse().unwrap())
            .unwrap();
        assert_eq!(cube, expected);
        assert_eq!(cube.step(), 0);
    }
}
