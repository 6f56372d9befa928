use meetpath_core::Point;

use crate::error::PathError;
use crate::tags::TagStore;

/// Two adjacent cells where the frontiers touched: `a` is owned by
/// frontier A, `b` by frontier B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Contact {
    pub(crate) a: Point,
    pub(crate) b: Point,
}

/// Outcome of one expansion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The search made progress and should keep going.
    Continue,
    /// The frontiers met.
    Contact(Contact),
    /// Nothing is left to expand.
    Exhausted,
}

/// A discipline for growing both frontiers over a shared [`TagStore`].
pub(crate) trait Expansion {
    /// Perform one step: a whole shell pass for uniform-cost growth, a
    /// single queue pop for best-first growth.
    fn advance(&mut self, tags: &mut TagStore) -> Result<Advance, PathError>;
}
