//! A catalogue of well known positions, each given as a move sequence from the solved cube.
//!
//! Pretty patterns and the Schoenflies symmetry patterns are from <http://kociemba.org/cube.htm>,
//! the practice sequences are the algorithms of a beginner's layer-by-layer method.

use crate::cube333::moves::Move333;
use crate::cube333::Cube;
use crate::error::Error;
use crate::moves::MoveSequence;

/// A named position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// What the pattern is.
    pub description: &'static str,
    /// Space separated moves reaching it from the solved cube.
    pub moves: &'static str,
}

const fn pattern(description: &'static str, moves: &'static str) -> Pattern {
    Pattern { description, moves }
}

/// Every pattern. The first entry is the solved cube.
pub const PATTERNS: &[Pattern] = &[
    pattern("initial state", ""),
    pattern("Pretty Pattern:Superflip", "R2 F B R B2 R U2 L B2 R U' D' R2 F D2 B2 U2 R' L U"),
    pattern("Pretty Pattern:Colored Anaconda 1", "F' U' L' B' F' R' U' D B R2 U B R"),
    pattern("Pretty Pattern:Colored Anaconda 2", "F R D F2 R' U' D B L' R' F' D' R'"),
    pattern("Pretty Pattern:Colored Python 1", "D' L' R' B F D' U' L' R' B' F' U'"),
    pattern("Pretty Pattern:Colored Python 2", "D' L' R' B' F' D U L R B' F' U'"),
    pattern("Pretty Pattern:Two Colored Rings", "L U' B F' L D' U' R B F' U' R"),
    pattern("Pretty Pattern:Six Square Blocks", "F2 D F2 D2 L2 U L2 U' L2 B D2 R2"),
    pattern("Pretty Pattern:Pons Asinorum", "U2 D2 F2 B2 R2 L2"),
    pattern(
        "Pretty Pattern:Pons Asinorum composed with Superflip",
        "B' D' L' F' D' F' B U F' B R2 L U D' F L U R D",
    ),
    pattern("Schoenflies-Symbol Th", "U2 L2 F2 D2 U2 F2 R2 U2"),
    pattern("Schoenflies-Symbol T", "B F L R B' F' D' U' L R D U"),
    pattern("Schoenflies-Symbol D3d", "U L D U L' D' U' R B2 U2 B2 L' R' U'"),
    pattern("Schoenflies-Symbol C3v", "U L' R' B2 U' R2 B L2 D' F2 L' R' U'"),
    pattern("Schoenflies-Symbol D3", "D B D U2 B2 F2 L2 R2 U' F U"),
    pattern("Schoenflies-Symbol S6", "B' D' U L' R B' F U"),
    pattern("Schoenflies-Symbol C3", "L' R U2 R2 D2 F2 L R D2"),
    pattern("Schoenflies-Symbol D4h (a)", "U2 D2"),
    pattern("Schoenflies-Symbol D4h (b)", "U D"),
    pattern("Schoenflies-Symbol S4", "U R2 L2 U2 R2 L2 D"),
    pattern("Schoenflies-Symbol D2d (edge)", "U F2 B2 D2 F2 B2 U"),
    pattern("Schoenflies-Symbol D2d (face)", "U R L F2 B2 R' L' U"),
    pattern("Schoenflies-Symbol D2h (edge)", "U R2 L2 D2 F2 B2 U"),
    pattern("Schoenflies-Symbol D2h (face)", "B2 D2 U2 F2"),
    pattern("Schoenflies-Symbol D2 (edge)", "U F2 U2 D2 F2 D"),
    pattern("Schoenflies-Symbol D2 (face)", "R2 L2 F B"),
    pattern("Schoenflies-Symbol C2v (a1)", "U R2 L2 U2 F2 B2 U'"),
    pattern("Schoenflies-Symbol C2v (a2)", "R2 L2 U2"),
    pattern("Schoenflies-Symbol C2v (b)", "B2 R2 B2 R2 B2 R2"),
    pattern("Schoenflies-Symbol C2h (a)", "U' D F2 B2"),
    pattern("Schoenflies-Symbol C2h (b)", "U R2 U D R2 D"),
    pattern("Schoenflies-Symbol C2 (a)", "L R U2"),
    pattern("Schoenflies-Symbol C2 (b)", "U R2 D' U' R2 U'"),
    pattern("Schoenflies-Symbol Cs (b)", "U B2 U D B2 D'"),
    pattern("Schoenflies-Symbol Ci", "U D' R L'"),
    pattern(
        "Beginner Practice:Middle layer, front-left edge from the down layer",
        "D L D' L' D' F' D F",
    ),
    pattern(
        "Beginner Practice:Middle layer, left-front edge from the down layer",
        "D' F' D F D L D' L'",
    ),
    pattern("Beginner Practice:Orienting last layer edges, L shape", "F U R U' R' F'"),
    pattern("Beginner Practice:Orienting last layer edges, line", "F R U R' U' F'"),
    pattern("Beginner Practice:Swapping adjacent last layer corners", "L U' R' U L' U' R U2"),
    pattern("Beginner Practice:Twisting three corners anti-clockwise", "R' U' R U' R' U2 R U2"),
    pattern("Beginner Practice:Twisting three corners clockwise", "R U R' U R U2 R' U2"),
    pattern("Beginner Practice:Permuting last layer edges, step 1", "R2 U F B' R2 F' B U R2"),
    pattern("Beginner Practice:Permuting last layer edges, step 2", "R2 U' F B' R2 F' B U' R2"),
];

impl Pattern {
    /// The pattern at `index`, or the solved cube if the index is past the end of the catalogue.
    pub fn get(index: usize) -> Pattern {
        PATTERNS.get(index).copied().unwrap_or(PATTERNS[0])
    }

    /// The moves of the pattern.
    pub fn sequence(&self) -> Result<MoveSequence<Move333>, Error> {
        self.moves.parse()
    }

    /// The solved cube with the pattern's moves applied.
    pub fn cube(&self) -> Result<Cube, Error> {
        Cube::solved().apply_sequence(&self.sequence()?)
    }
}
