//! A record of the cube states visited during a session, with undo and detection of positions that
//! have been seen before.

use crate::cube333::Cube;
use crate::error::Error;
use crate::patterns::Pattern;

/// What happened to a state offered to [`History::add_if_not_duplicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// The state was new and has been appended.
    Added,
    /// The exact state was already recorded; nothing was appended.
    Duplicate {
        /// The 1-based position of the earlier state in the history.
        index: usize,
        /// The move counter of the earlier state.
        step: usize,
        /// The move path of the earlier state.
        path: String,
    },
    /// The state was appended, but an earlier state only differs from it by a whole-cube rotation.
    Similar {
        /// The 1-based position of the earlier state in the history.
        index: usize,
        /// The move counter of the earlier state.
        step: usize,
        /// The move path of the earlier state.
        path: String,
    },
}

/// Cube states in the order they were reached. The first state is the start position and is never
/// removed, so there is always a current state.
#[derive(Debug, Clone)]
pub struct History {
    start: Cube,
    later: Vec<Cube>,
}

impl History {
    /// A history holding only the start position.
    pub fn new(start: Cube) -> History {
        History {
            start,
            later: Vec::new(),
        }
    }

    /// A history starting at one of the catalogue patterns, see [`Pattern::get`].
    pub fn from_pattern(index: usize) -> Result<History, Error> {
        let pattern = Pattern::get(index);
        tracing::info!(pattern = pattern.description, "starting from pattern");
        Ok(History::new(pattern.cube()?))
    }

    /// Number of recorded states, including the start.
    pub fn len(&self) -> usize {
        1 + self.later.len()
    }

    /// Always false: the start state is never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The states from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Cube> + '_ {
        std::iter::once(&self.start).chain(self.later.iter())
    }

    /// The state recorded first.
    pub fn start_state(&self) -> &Cube {
        &self.start
    }

    /// The state recorded last.
    pub fn current(&self) -> &Cube {
        self.later.last().unwrap_or(&self.start)
    }

    /// Append a state without any checks.
    pub fn add(&mut self, state: Cube) {
        self.later.push(state);
    }

    /// A fresh history starting again from the start state.
    pub fn reset(&self) -> History {
        History::new(self.start.clone())
    }

    /// The earliest recorded state with exactly the same stickers, with its 1-based index.
    pub fn find_exact(&self, state: &Cube) -> Option<(usize, &Cube)> {
        self.iter()
            .enumerate()
            .find(|(_, old)| *old == state)
            .map(|(i, old)| (i + 1, old))
    }

    /// The earliest recorded state equal to `state` up to a whole-cube rotation, with its 1-based
    /// index.
    pub fn find_similar(&self, state: &Cube) -> Result<Option<(usize, &Cube)>, Error> {
        let normal = state.normalized()?;
        for (i, old) in self.iter().enumerate() {
            if old.normalized()? == normal {
                return Ok(Some((i + 1, old)));
            }
        }
        Ok(None)
    }

    /// Append `state` unless the exact same state was already recorded. States that are only
    /// rotations of a recorded state are appended, but reported.
    pub fn add_if_not_duplicate(&mut self, state: Cube) -> Result<Recorded, Error> {
        if let Some((index, old)) = self.find_exact(&state) {
            tracing::warn!(
                index,
                step = old.step(),
                path = old.path(),
                "duplicate of an earlier state, ignored"
            );
            return Ok(Recorded::Duplicate {
                index,
                step: old.step(),
                path: old.path().to_string(),
            });
        }

        let recorded = match self.find_similar(&state)? {
            Some((index, old)) => {
                tracing::warn!(
                    index,
                    step = old.step(),
                    path = old.path(),
                    "similar to an earlier state"
                );
                Recorded::Similar {
                    index,
                    step: old.step(),
                    path: old.path().to_string(),
                }
            }
            None => Recorded::Added,
        };
        self.add(state);
        Ok(recorded)
    }

    /// Drop the latest state and return it. The start state can't be undone, in which case
    /// nothing changes and `None` is returned.
    pub fn undo(&mut self) -> Option<Cube> {
        let undone = self.later.pop();
        if undone.is_none() {
            tracing::info!("cannot undo the initial state");
        }
        undone
    }
}
