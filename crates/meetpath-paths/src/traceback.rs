//! Path reconstruction from the backpointer trees.

use meetpath_core::Point;

use crate::error::{PathError, try_push};
use crate::frontier::Contact;
use crate::tags::TagStore;

/// Follow backpointers from `from` to its frontier's root.
///
/// The result starts at `from` and ends at the root.
pub(crate) fn walk_to_root(tags: &TagStore, from: Point) -> Result<Vec<Point>, PathError> {
    let mut half = Vec::new();
    let mut p = from;
    try_push(&mut half, p)?;
    while let Some(d) = tags.tag(p).back() {
        p = p.step(d);
        try_push(&mut half, p)?;
        if half.len() > tags.len() {
            debug_assert!(false, "backpointer cycle through {from}");
            break;
        }
    }
    Ok(half)
}

/// Splice the two half-paths meeting at `contact` into one path running
/// from `start` to the other root.
pub(crate) fn splice(
    tags: &TagStore,
    contact: Contact,
    start: Point,
) -> Result<Vec<Point>, PathError> {
    let a_half = walk_to_root(tags, contact.a)?;
    let b_half = walk_to_root(tags, contact.b)?;

    let mut path = Vec::new();
    path.try_reserve_exact(a_half.len() + b_half.len())?;
    path.extend(a_half.into_iter().rev());
    path.extend(b_half);

    if path.first() != Some(&start) {
        path.reverse();
    }
    Ok(path)
}
