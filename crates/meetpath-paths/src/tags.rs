//! Per-cell search state.
//!
//! Every cell of the grid gets one [`Tag`] byte holding its passability,
//! which frontier (if any) owns it and the compass direction leading one
//! step back toward that frontier's root. The backpointers form two trees
//! rooted at the endpoints, so the search needs no separate node table.

use meetpath_core::{Dir, Occupancy, Point};

use crate::error::PathError;

/// One of the two frontiers of a bidirectional search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    /// Rooted at the start point.
    A,
    /// Rooted at the end point.
    B,
}

impl Side {
    /// The other frontier.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Packed cell state.
///
/// Bit 0 is passability, bits 1 and 2 mark ownership by frontier A or B,
/// and the high nibble stores the backpointer as `Dir::index() + 1`
/// (zero meaning none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Tag(u8);

impl Tag {
    const PASSABLE_BIT: u8 = 0x01;
    const A_BIT: u8 = 0x02;
    const B_BIT: u8 = 0x04;
    const OWNER_MASK: u8 = 0x06;
    const LINK_SHIFT: u32 = 4;

    /// Blocked and unclaimed. Also stands in for every out-of-bounds cell.
    pub const BLOCKED: Tag = Tag(0);
    /// Passable and unclaimed.
    pub const OPEN: Tag = Tag(Self::PASSABLE_BIT);

    /// Whether the cell can be walked on.
    #[inline]
    pub const fn passable(self) -> bool {
        self.0 & Self::PASSABLE_BIT != 0
    }

    /// The owning frontier, or `None` while unclaimed.
    #[inline]
    pub const fn owner(self) -> Option<Side> {
        match self.0 & Self::OWNER_MASK {
            Self::A_BIT => Some(Side::A),
            Self::B_BIT => Some(Side::B),
            _ => None,
        }
    }

    /// Whether no frontier owns the cell yet.
    #[inline]
    pub const fn is_unclaimed(self) -> bool {
        self.0 & Self::OWNER_MASK == 0
    }

    /// Direction of the step back toward the owning root. Roots and
    /// unclaimed cells have none.
    #[inline]
    pub fn back(self) -> Option<Dir> {
        match self.0 >> Self::LINK_SHIFT {
            0 => None,
            n => Dir::from_index(n as usize - 1),
        }
    }

    #[inline]
    fn claimed(self, side: Side, back: Option<Dir>) -> Tag {
        let owner = match side {
            Side::A => Self::A_BIT,
            Side::B => Self::B_BIT,
        };
        let link = back.map_or(0, |d| (d.index() as u8 + 1) << Self::LINK_SHIFT);
        Tag(self.0 | owner | link)
    }
}

/// The search's private copy of the grid, one [`Tag`] per cell.
///
/// Cells move from unclaimed to claimed exactly once and are never reset,
/// which keeps every backpointer chain acyclic.
#[derive(Debug, Clone)]
pub(crate) struct TagStore {
    width: i32,
    height: i32,
    tags: Vec<Tag>,
    roots: [Point; 2],
    claimed: [usize; 2],
}

impl TagStore {
    /// Copy passability from `grid` and plant the two roots: `start` for
    /// frontier A, `end` for frontier B.
    ///
    /// Both endpoints must be distinct passable cells of `grid`; anything
    /// else is rejected with [`PathError::InvalidEndpoint`].
    pub fn new(grid: &Occupancy, start: Point, end: Point) -> Result<Self, PathError> {
        for p in [start, end] {
            if !grid.passable(p) {
                return Err(PathError::InvalidEndpoint(p));
            }
        }
        if start == end {
            return Err(PathError::InvalidEndpoint(end));
        }

        let mut tags = Vec::new();
        tags.try_reserve_exact(grid.len())?;
        tags.extend(
            grid.cells()
                .iter()
                .map(|&open| if open { Tag::OPEN } else { Tag::BLOCKED }),
        );
        let mut store = Self {
            width: grid.width(),
            height: grid.height(),
            tags,
            roots: [start, end],
            claimed: [0, 0],
        };
        store.claim(start, Side::A, None);
        store.claim(end, Side::B, None);
        Ok(store)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Tag at `p`, or [`Tag::BLOCKED`] outside the grid.
    #[inline]
    pub fn tag(&self, p: Point) -> Tag {
        self.idx(p).map_or(Tag::BLOCKED, |i| self.tags[i])
    }

    /// Tags of the eight neighbours of `p`, in [`Dir::ALL`] order
    /// (NW, N, NE, W, E, SW, S, SE).
    #[inline]
    pub fn neighbors8(&self, p: Point) -> [Tag; 8] {
        Dir::ALL.map(|d| self.tag(p.step(d)))
    }

    /// Assign `p` to frontier `side`, with `back` leading one step toward
    /// its root.
    ///
    /// Must be called at most once per cell, and only on passable cells.
    pub fn claim(&mut self, p: Point, side: Side, back: Option<Dir>) {
        let Some(i) = self.idx(p) else {
            debug_assert!(false, "claim outside the grid at {p}");
            return;
        };
        let tag = self.tags[i];
        debug_assert!(tag.passable(), "claim of blocked cell {p}");
        debug_assert!(tag.is_unclaimed(), "cell {p} claimed twice");
        self.tags[i] = tag.claimed(side, back);
        self.claimed[side.index()] += 1;
    }

    /// Root cell of frontier `side`.
    #[inline]
    pub fn root(&self, side: Side) -> Point {
        self.roots[side.index()]
    }

    /// Number of cells owned by `side`, root included.
    #[inline]
    pub fn claimed(&self, side: Side) -> usize {
        self.claimed[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(w: i32, h: i32) -> Occupancy {
        Occupancy::filled(w, h, true).unwrap()
    }

    #[test]
    fn tag_packing() {
        assert!(!Tag::BLOCKED.passable());
        assert!(Tag::BLOCKED.is_unclaimed());
        assert!(Tag::OPEN.passable());
        assert_eq!(Tag::OPEN.owner(), None);
        assert_eq!(Tag::OPEN.back(), None);

        for d in Dir::ALL {
            for side in [Side::A, Side::B] {
                let t = Tag::OPEN.claimed(side, Some(d));
                assert!(t.passable());
                assert!(!t.is_unclaimed());
                assert_eq!(t.owner(), Some(side));
                assert_eq!(t.back(), Some(d));
            }
        }
        assert_eq!(Tag::OPEN.claimed(Side::B, None).back(), None);
    }

    #[test]
    fn new_plants_roots() {
        let g = open_grid(4, 3);
        let tags = TagStore::new(&g, Point::new(0, 0), Point::new(3, 2)).unwrap();
        assert_eq!(tags.len(), 12);
        assert_eq!(tags.tag(Point::new(0, 0)).owner(), Some(Side::A));
        assert_eq!(tags.tag(Point::new(3, 2)).owner(), Some(Side::B));
        assert_eq!(tags.tag(Point::new(0, 0)).back(), None);
        assert_eq!(tags.tag(Point::new(1, 1)), Tag::OPEN);
        assert_eq!(tags.root(Side::A), Point::new(0, 0));
        assert_eq!(tags.root(Side::B), Point::new(3, 2));
        assert_eq!(tags.claimed(Side::A), 1);
        assert_eq!(tags.claimed(Side::B), 1);
    }

    #[test]
    fn copies_passability() {
        let g = Occupancy::parse("S#\n.E").unwrap();
        let tags = TagStore::new(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(tags.tag(Point::new(1, 0)), Tag::BLOCKED);
        assert!(tags.tag(Point::new(0, 1)).passable());
    }

    #[test]
    fn neighbors_use_blocked_sentinel_outside() {
        let g = open_grid(2, 2);
        let tags = TagStore::new(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        let ns = tags.neighbors8(Point::new(0, 0));
        // NW, N, NE, W are off the grid; SW too.
        for i in [0, 1, 2, 3, 5] {
            assert_eq!(ns[i], Tag::BLOCKED);
        }
        assert_eq!(ns[4], Tag::OPEN); // E
        assert_eq!(ns[6], Tag::OPEN); // S
        assert_eq!(ns[7].owner(), Some(Side::B)); // SE is the B root
    }

    #[test]
    fn claim_records_owner_and_direction() {
        let g = open_grid(3, 3);
        let mut tags = TagStore::new(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        tags.claim(Point::new(1, 1), Side::A, Some(Dir::NorthWest));
        let t = tags.tag(Point::new(1, 1));
        assert_eq!(t.owner(), Some(Side::A));
        assert_eq!(t.back(), Some(Dir::NorthWest));
        assert_eq!(Point::new(1, 1).step(Dir::NorthWest), tags.root(Side::A));
        assert_eq!(tags.claimed(Side::A), 2);
    }

    #[test]
    #[should_panic(expected = "claimed twice")]
    #[cfg(debug_assertions)]
    fn double_claim_is_a_bug() {
        let g = open_grid(3, 1);
        let mut tags = TagStore::new(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        tags.claim(Point::new(1, 0), Side::A, Some(Dir::West));
        tags.claim(Point::new(1, 0), Side::B, Some(Dir::East));
    }

    #[test]
    fn new_rejects_bad_endpoints() {
        let g = Occupancy::parse("..#\n...").unwrap();
        let ok = Point::new(0, 0);
        let wall = Point::new(2, 0);
        let out = Point::new(5, 1);
        assert_eq!(
            TagStore::new(&g, ok, wall).unwrap_err(),
            PathError::InvalidEndpoint(wall)
        );
        assert_eq!(
            TagStore::new(&g, out, ok).unwrap_err(),
            PathError::InvalidEndpoint(out)
        );
        assert_eq!(
            TagStore::new(&g, ok, ok).unwrap_err(),
            PathError::InvalidEndpoint(ok)
        );
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
    }
}
