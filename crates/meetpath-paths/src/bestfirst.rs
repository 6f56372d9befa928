//! Heuristic-guided best-first growth.
//!
//! Both frontiers feed one shared open list keyed by
//! `f = g + octile(cell, opposite root)`. A popped candidate claims its cell
//! if nobody owns it yet; if the opposite frontier already owns it, the
//! frontiers have met. Diagonal steps cost √2 so they are never cheaper
//! than the detour they replace.

use meetpath_core::{Dir, Point};

use crate::distance::{octile, step_cost};
use crate::error::PathError;
use crate::frontier::{Advance, Contact, Expansion};
use crate::queue::OpenList;
use crate::tags::{Side, TagStore};

/// A discovered but not yet expanded cell.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    pos: Point,
    /// Accumulated cost from the discovering frontier's root.
    g: f64,
    side: Side,
    /// Step back toward the discoverer. `None` only for the two root seeds.
    back: Option<Dir>,
}

pub(crate) struct BestFirst {
    open: OpenList<Candidate>,
    pops: usize,
}

impl BestFirst {
    /// Seed both roots into a fresh open list.
    pub(crate) fn new(tags: &TagStore) -> Result<Self, PathError> {
        let mut bf = Self {
            open: OpenList::new(),
            pops: 0,
        };
        for side in [Side::A, Side::B] {
            let root = tags.root(side);
            let target = tags.root(side.opposite());
            let seed = Candidate {
                pos: root,
                g: 0.0,
                side,
                back: None,
            };
            bf.open.insert(seed, octile(root, target))?;
        }
        Ok(bf)
    }

    /// Entries still waiting in the open list.
    #[cfg(test)]
    fn pending(&self) -> usize {
        self.open.len()
    }

    /// Queue every passable neighbour of `c` not owned by its own frontier.
    ///
    /// Cells of the opposite frontier are queued too: both roots are
    /// claimed up front, so adjacent roots would otherwise never meet.
    fn expand(&mut self, tags: &TagStore, c: Candidate) -> Result<(), PathError> {
        let target = tags.root(c.side.opposite());
        for (d, n) in Dir::ALL.into_iter().zip(tags.neighbors8(c.pos)) {
            if !n.passable() || n.owner() == Some(c.side) {
                continue;
            }
            let np = c.pos.step(d);
            let g = c.g + step_cost(d);
            let next = Candidate {
                pos: np,
                g,
                side: c.side,
                back: Some(d.opposite()),
            };
            self.open.insert(next, g + octile(np, target))?;
        }
        Ok(())
    }
}

impl Expansion for BestFirst {
    fn advance(&mut self, tags: &mut TagStore) -> Result<Advance, PathError> {
        let Some(c) = self.open.pop_min() else {
            return Ok(Advance::Exhausted);
        };
        self.pops += 1;

        match tags.tag(c.pos).owner() {
            None => {
                tags.claim(c.pos, c.side, c.back);
                self.expand(tags, c)?;
            }
            // Root seeds are pre-claimed; anything else is a stale duplicate.
            Some(owner) if owner == c.side => {
                if c.back.is_none() {
                    self.expand(tags, c)?;
                }
            }
            Some(_) => {
                let Some(back) = c.back else {
                    return Ok(Advance::Continue);
                };
                let discoverer = c.pos.step(back);
                let contact = match c.side {
                    Side::A => Contact {
                        a: discoverer,
                        b: c.pos,
                    },
                    Side::B => Contact {
                        a: c.pos,
                        b: discoverer,
                    },
                };
                log::trace!(
                    "frontiers met at {} after {} pops, {} pending",
                    c.pos,
                    self.pops,
                    self.open.len()
                );
                return Ok(Advance::Contact(contact));
            }
        }
        Ok(Advance::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetpath_core::Occupancy;

    fn setup(art: &str) -> (TagStore, BestFirst) {
        let m = Occupancy::parse_map(art).unwrap();
        let tags = TagStore::new(&m.grid, m.start.unwrap(), m.end.unwrap()).unwrap();
        let bf = BestFirst::new(&tags).unwrap();
        (tags, bf)
    }

    fn run(tags: &mut TagStore, bf: &mut BestFirst) -> Option<Contact> {
        loop {
            match bf.advance(tags).unwrap() {
                Advance::Continue => {}
                Advance::Contact(c) => return Some(c),
                Advance::Exhausted => return None,
            }
        }
    }

    #[test]
    fn seeds_both_roots() {
        let (_, bf) = setup("S..E");
        assert_eq!(bf.pending(), 2);
    }

    #[test]
    fn root_pop_expands_without_claiming() {
        let (mut tags, mut bf) = setup("S..E");
        assert_eq!(bf.advance(&mut tags).unwrap(), Advance::Continue);
        // A's root pushed its only neighbour; the cell is still unclaimed.
        assert_eq!(bf.pending(), 2);
        assert!(tags.tag(Point::new(1, 0)).is_unclaimed());
        assert_eq!(tags.claimed(Side::A), 1);
    }

    #[test]
    fn meets_in_open_row() {
        let (mut tags, mut bf) = setup("S...E");
        let c = run(&mut tags, &mut bf).unwrap();
        assert!(c.a.is_adjacent(c.b));
        assert_eq!(tags.tag(c.a).owner(), Some(Side::A));
        assert_eq!(tags.tag(c.b).owner(), Some(Side::B));
    }

    #[test]
    fn meets_at_the_only_gap() {
        let (mut tags, mut bf) = setup(
            "\
.....
..#..
S.#.E",
        );
        let c = run(&mut tags, &mut bf).unwrap();
        let gap = Point::new(2, 0);
        assert!(c.a == gap || c.b == gap);
        assert!(tags.tag(gap).owner().is_some());
    }

    #[test]
    fn disconnected_drains_queue() {
        let (mut tags, mut bf) = setup(
            "\
S.#..
..#.E",
        );
        assert_eq!(run(&mut tags, &mut bf), None);
        assert_eq!(bf.pending(), 0);
        assert_eq!(tags.claimed(Side::A), 4);
        assert_eq!(tags.claimed(Side::B), 4);
    }

    #[test]
    fn every_claim_points_toward_its_root() {
        let (mut tags, mut bf) = setup(
            "\
S....
.###.
.....
.#.#.
....E",
        );
        run(&mut tags, &mut bf).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let mut p = Point::new(x, y);
                let Some(side) = tags.tag(p).owner() else {
                    continue;
                };
                let mut hops = 0;
                while let Some(d) = tags.tag(p).back() {
                    p = p.step(d);
                    assert_eq!(tags.tag(p).owner(), Some(side));
                    hops += 1;
                    assert!(hops <= 25);
                }
                assert_eq!(p, tags.root(side));
            }
        }
    }
}
