//! Puzzle-independent move algebra: inverses, commutation and cancellation of adjacent moves.

use std::str::FromStr;

/// What is left of two adjacent moves once they are combined.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// Nothing is left, e.g. `R R'`.
    NoMove,
    /// The two moves merge, e.g. `R R` into `R2`.
    OneMove(M),
    /// The moves are unrelated and both stay, e.g. `R U`.
    TwoMove(M, M),
}

/// A move in some puzzle notation. A move is a power of a generator; two moves on the same
/// generator merge, and moves that commute may be swapped when adjacent.
pub trait Move: Eq + Clone {
    /// The move undoing this one, so that `X X^{-1}` and `X^{-1} X` both do nothing.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Whether `A B = B A`. This relation has to be transitive: moves are grouped into classes
    /// (for a cube, the turning axis) and any two moves of a class commute.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Combine two adjacent moves.
    ///
    /// ```rust
    /// use facelet_cube::mv;
    /// use facelet_cube::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(Right, 1).cancel(mv!(Up, 3)) == Cancellation::TwoMove(mv!(Right, 1), mv!(Up, 3)));
    /// assert!(mv!(Right, 1).cancel(mv!(Right, 1)) == Cancellation::OneMove(mv!(Right, 2)));
    /// assert!(mv!(Right, 1).cancel(mv!(Right, 3)) == Cancellation::NoMove);
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves, applied left to right.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The sequence undoing this one: the inverse moves in reverse order.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(Move::inverse).collect())
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// This sequence followed by `other`.
    pub fn append(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }

    /// Merge and drop moves wherever the move algebra allows, looking past moves that commute
    /// with the incoming one. The result has the same effect and is never longer.
    pub fn cancel(self) -> Self {
        let mut out: Vec<M> = Vec::with_capacity(self.0.len());

        'next: for mv in self.0 {
            // Walk back over the reduced prefix while the moves there commute with `mv`. The
            // prefix is already fully reduced, so the first merge found is the only one.
            let mut i = out.len();
            while i > 0 {
                i -= 1;
                match out[i].clone().cancel(mv.clone()) {
                    Cancellation::NoMove => {
                        out.remove(i);
                        continue 'next;
                    }
                    Cancellation::OneMove(merged) => {
                        out.remove(i);
                        out.push(merged);
                        continue 'next;
                    }
                    Cancellation::TwoMove(..) => {}
                }
                if !mv.commutes_with(&out[i]) {
                    break;
                }
            }
            out.push(mv);
        }

        Self(out)
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parses whitespace separated move names.
impl<M: Move + FromStr> FromStr for MoveSequence<M> {
    type Err = M::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl<M: Move + std::fmt::Display> std::fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for mv in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
