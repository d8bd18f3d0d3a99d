//! A facelet model of the 3x3x3 cube: every sticker is stored on each face it belongs to, turns
//! are expressed through one canonical front turn and relabelling of the faces, and states can be
//! compared exactly or up to how the whole cube is held.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod history;
pub mod moves;
pub mod patterns;
