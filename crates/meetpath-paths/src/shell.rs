//! Uniform-cost "balloon" growth.
//!
//! Frontiers A and B take turns. Each turn grows one frontier by a full
//! shell: every cell claimed in its previous turn looks at its eight
//! neighbours. Every step costs 1, so the resulting path is shortest in
//! step count.

use meetpath_core::Dir;

use crate::error::PathError;
use crate::frontier::{Advance, Contact, Expansion};
use crate::queue::Shell;
use crate::tags::{Side, TagStore};

/// Result of growing one frontier by one shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// This many cells were claimed.
    Grew(usize),
    Contact(Contact),
    /// No new cell was claimed.
    Exhausted,
}

pub(crate) struct ShellGrowth {
    shells: [Shell; 2],
    exhausted: [bool; 2],
    turn: Side,
}

impl ShellGrowth {
    pub(crate) fn new(tags: &TagStore) -> Result<Self, PathError> {
        Ok(Self {
            shells: [Shell::root(tags.root(Side::A))?, Shell::root(tags.root(Side::B))?],
            exhausted: [false, false],
            turn: Side::A,
        })
    }

    /// Grow `side` by one shell.
    fn expand(&mut self, tags: &mut TagStore, side: Side) -> Result<Pass, PathError> {
        let mut next = Shell::default();
        let shell = &self.shells[side.index()];

        for &p in shell.cells() {
            for (d, n) in Dir::ALL.into_iter().zip(tags.neighbors8(p)) {
                if !n.passable() {
                    continue;
                }
                match n.owner() {
                    None => {
                        let np = p.step(d);
                        tags.claim(np, side, Some(d.opposite()));
                        next.push(np)?;
                    }
                    Some(owner) if owner != side => {
                        let np = p.step(d);
                        let contact = match side {
                            Side::A => Contact { a: p, b: np },
                            Side::B => Contact { a: np, b: p },
                        };
                        return Ok(Pass::Contact(contact));
                    }
                    Some(_) => {}
                }
            }
        }

        if next.is_empty() {
            return Ok(Pass::Exhausted);
        }
        let grew = next.len();
        self.shells[side.index()] = next;
        Ok(Pass::Grew(grew))
    }

    /// Cells in the current shell of `side`.
    #[cfg(test)]
    fn shell(&self, side: Side) -> &[meetpath_core::Point] {
        self.shells[side.index()].cells()
    }
}

impl Expansion for ShellGrowth {
    fn advance(&mut self, tags: &mut TagStore) -> Result<Advance, PathError> {
        let side = if self.exhausted[self.turn.index()] {
            self.turn.opposite()
        } else {
            self.turn
        };
        if self.exhausted[side.index()] {
            return Ok(Advance::Exhausted);
        }
        self.turn = side.opposite();

        match self.expand(tags, side)? {
            Pass::Grew(n) => {
                log::trace!("frontier {side:?} grew by {n} cells");
                Ok(Advance::Continue)
            }
            Pass::Contact(c) => Ok(Advance::Contact(c)),
            Pass::Exhausted => {
                log::trace!("frontier {side:?} exhausted");
                self.exhausted[side.index()] = true;
                if self.exhausted[side.opposite().index()] {
                    Ok(Advance::Exhausted)
                } else {
                    Ok(Advance::Continue)
                }
            }
        }
    }
}
